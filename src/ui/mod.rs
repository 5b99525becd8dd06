// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell around the content view.

pub mod components;

use eframe::egui;

use crate::config::AppConfig;
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::content_view;

/// Stateful egui application showing the resolved demo line.
pub struct GitCryptDemoApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl GitCryptDemoApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            model: AppModel::from_config(config),
            inbox: Vec::new(),
        }
    }

    /// Apply queued messages, running any resulting commands inline until the inbox is empty.
    fn process_inbox(&mut self) {
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            msgs.extend(commands.into_iter().map(mvu::run_command));
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Reload", egui_phosphor::regular::ARROW_CLOCKWISE))
                .on_hover_text("Read the files again")
                .clicked()
            {
                self.inbox.push(Msg::Reload);
            }
            if ui
                .button(format!("{} Open folder…", egui_phosphor::regular::FOLDER_OPEN))
                .on_hover_text("Read the files from a folder on disk")
                .clicked()
            {
                self.inbox.push(Msg::OpenFolderRequested);
            }
            if ui
                .button(format!("{} Bundled", egui_phosphor::regular::PACKAGE))
                .on_hover_text("Read the files shipped with the application")
                .clicked()
            {
                self.inbox.push(Msg::UseBundled);
            }
        });
    }

    /// Render the resource origin and the latest status message.
    fn render_status(&self, ui: &mut egui::Ui) {
        let origin = format!("Source: {}", self.model.store.describe());
        ui.label(
            egui::RichText::new(origin)
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}

impl eframe::App for GitCryptDemoApp {
    // Required by eframe 0.34; rendering happens in `update`, which eframe still calls.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_inbox();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_toolbar(ui);
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                content_view::view(ui, &self.model.content);
            });
        });

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}
