// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Framed view showing the resolved line under a globe icon.

use eframe::egui;

use crate::config::ViewStyle;
use crate::logic::FileContentResolver;
use crate::models::resolution::Resolution;
use crate::resources::ResourceStore;

/// UI model for the content view. The payload is resolved once on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentViewModel {
    primary_file: String,
    fallback_file: String,
    resolution: Resolution,
    style: ViewStyle,
}

impl ContentViewModel {
    /// Resolve the payload for `primary_file`/`fallback_file` against `store`.
    pub fn new(
        primary_file: &str,
        fallback_file: &str,
        style: ViewStyle,
        store: &dyn ResourceStore,
    ) -> Self {
        let resolution =
            FileContentResolver::new(store).resolve_detailed(primary_file, fallback_file);
        Self {
            primary_file: primary_file.to_string(),
            fallback_file: fallback_file.to_string(),
            resolution,
            style,
        }
    }

    /// Text rendered in the view.
    pub fn payload(&self) -> String {
        self.resolution.to_string()
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn primary_file(&self) -> &str {
        &self.primary_file
    }

    pub fn fallback_file(&self) -> &str {
        &self.fallback_file
    }
}

/// Badge color for the resolution branch.
pub fn badge_color(resolution: &Resolution) -> egui::Color32 {
    match resolution {
        Resolution::Primary(_) => egui::Color32::from_rgb(46, 125, 50),
        Resolution::Fallback(_) => egui::Color32::from_rgb(21, 101, 192),
        Resolution::FallbackEncrypted { .. } => egui::Color32::from_rgb(230, 81, 0),
        Resolution::FallbackMissing => egui::Color32::from_rgb(198, 40, 40),
    }
}

/// Render the framed payload.
pub fn view(ui: &mut egui::Ui, model: &ContentViewModel) {
    let style = &model.style;
    let size = style.frame_size();

    egui::Frame::new()
        .fill(style.background())
        .stroke(egui::Stroke::new(1.0, style.border_color()))
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_size(size);
            ui.vertical_centered(|ui| {
                // Rough vertical centering of icon plus one line of text.
                let content_height = style.icon_size + style.text_size + 12.0;
                ui.add_space(((size.y - content_height) / 2.0).max(0.0));
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::GLOBE)
                        .size(style.icon_size)
                        .color(style.icon_color()),
                );
                let mut payload = egui::RichText::new(model.payload())
                    .size(style.text_size)
                    .color(style.text_color());
                if model.resolution().is_placeholder() {
                    payload = payload.italics();
                }
                ui.label(payload);
            });
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let resolution = model.resolution();
        ui.label(
            egui::RichText::new(resolution.status_label())
                .small()
                .strong()
                .color(badge_color(resolution)),
        );
        ui.label(
            egui::RichText::new(format!("{} / {}", model.primary_file(), model.fallback_file()))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::decode::ENCRYPTED_MARKER;
    use crate::resources::MemoryStore;

    #[test]
    fn new_resolves_payload_once() {
        let store = MemoryStore::new().with_file("Secret.txt", "classified\n");

        let model = ContentViewModel::new(
            "Secret.txt",
            "Unsecret.txt",
            ViewStyle::default(),
            &store,
        );

        assert_eq!(model.payload(), "classified");
        assert_eq!(model.resolution(), &Resolution::Primary("classified".into()));
    }

    // The model keeps its payload even if the store changes afterwards.
    #[test]
    fn payload_does_not_track_later_store_changes() {
        let mut store = MemoryStore::new();
        let model = ContentViewModel::new(
            "Secret.txt",
            "Unsecret.txt",
            ViewStyle::default(),
            &store,
        );
        store.insert("Secret.txt", "late\n");

        assert_eq!(model.payload(), "File missing!");
    }

    #[test]
    fn encrypted_fallback_payload_names_fallback() {
        let store = MemoryStore::new().with_file("Public.txt", ENCRYPTED_MARKER.to_vec());

        let model = ContentViewModel::new("Secret.txt", "Public.txt", ViewStyle::default(), &store);

        assert_eq!(model.payload(), "file Public.txt looks encrypted");
        assert_eq!(model.fallback_file(), "Public.txt");
    }

    #[test]
    fn badge_colors_differ_per_branch() {
        let colors = [
            badge_color(&Resolution::Primary(String::new())),
            badge_color(&Resolution::Fallback(String::new())),
            badge_color(&Resolution::FallbackMissing),
            badge_color(&Resolution::FallbackEncrypted {
                fallback: String::new(),
            }),
        ];

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
