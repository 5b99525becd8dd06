// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the content view, resource store, and commands.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::resources::{DirectoryStore, MemoryStore, ResourceStore};
use crate::ui::components::content_view::ContentViewModel;

/// Top-level application state.
pub struct AppModel {
    /// Filenames and style the view is built from.
    pub config: AppConfig,
    /// Where resources are currently looked up.
    pub store: Box<dyn ResourceStore>,
    /// Resolved content view.
    pub content: ContentViewModel,
    /// Latest status message to display.
    pub status: Option<String>,
}

impl AppModel {
    /// Build the model and resolve the initial payload.
    pub fn new(config: AppConfig, store: Box<dyn ResourceStore>) -> Self {
        let content = build_content(&config, store.as_ref());
        Self {
            config,
            store,
            content,
            status: None,
        }
    }

    /// Store implied by the configuration: a folder on disk or the bundled files.
    pub fn from_config(config: AppConfig) -> Self {
        let store = store_for(&config);
        Self::new(config, store)
    }

    fn rebuild(&mut self) {
        self.content = build_content(&self.config, self.store.as_ref());
    }
}

/// Application messages routed through the update function.
#[derive(Debug, PartialEq)]
pub enum Msg {
    Reload,
    OpenFolderRequested,
    FolderChosen(Option<PathBuf>),
    UseBundled,
}

/// Commands represent side-effects executed between frames.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    PickFolder,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Reload => {
            model.rebuild();
            model.status = Some(format!("Reloaded from {}.", model.store.describe()));
        }
        Msg::OpenFolderRequested => cmds.push(Command::PickFolder),
        Msg::FolderChosen(Some(path)) => {
            info!(path = %path.display(), "switching to resource folder");
            model.store = Box::new(DirectoryStore::new(path));
            model.rebuild();
            model.status = Some(format!("Reading from {}.", model.store.describe()));
        }
        Msg::FolderChosen(None) => model.status = Some("Folder selection cancelled.".to_string()),
        Msg::UseBundled => {
            model.store = Box::new(MemoryStore::bundled());
            model.rebuild();
            model.status = Some("Reading bundled resources.".to_string());
        }
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickFolder => {
            let folder = rfd::FileDialog::new()
                .set_title("Choose resource folder")
                .pick_folder();
            Msg::FolderChosen(folder)
        }
    }
}

fn build_content(config: &AppConfig, store: &dyn ResourceStore) -> ContentViewModel {
    ContentViewModel::new(
        &config.primary_file,
        &config.fallback_file,
        config.style.clone(),
        store,
    )
}

fn store_for(config: &AppConfig) -> Box<dyn ResourceStore> {
    match &config.resource_dir {
        Some(dir) => {
            if !dir.is_dir() {
                warn!(path = %dir.display(), "configured resource folder does not exist");
            }
            Box::new(DirectoryStore::new(dir.clone()))
        }
        None => Box::new(MemoryStore::bundled()),
    }
}
