//! Application entry point wiring egui/eframe to launch the demo window.

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::ui::GitCryptDemoApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let frame = config.style.frame_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([frame.x + 60.0, frame.y + 120.0])
            .with_min_inner_size([frame.x + 20.0, frame.y + 100.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GitCryptDemo",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(GitCryptDemoApp::new(config)))
        }),
    )
}
