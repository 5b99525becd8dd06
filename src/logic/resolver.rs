// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Primary/fallback resolution of the line shown in the window.
//!
//! Responsibilities:
//! - Prefer the first line of the primary file when it reads as text.
//! - Fall back to the first line of the fallback file.
//! - Otherwise produce a placeholder that names the failure.
//!
//! Nothing here returns an error; every failure becomes a [`Resolution`].

use tracing::{debug, warn};

use crate::logic::decode::decode_first_line;
use crate::models::file_reference::FileReference;
use crate::models::resolution::{DecodeFailure, LineLookup, Resolution};
use crate::resources::{ResourceError, ResourceStore};

/// Resolves the displayed line against a read-only [`ResourceStore`].
pub struct FileContentResolver<'a> {
    store: &'a dyn ResourceStore,
}

impl<'a> FileContentResolver<'a> {
    pub fn new(store: &'a dyn ResourceStore) -> Self {
        Self { store }
    }

    /// Text to display for the given primary and fallback filenames.
    pub fn resolve(&self, primary_file: &str, fallback_file: &str) -> String {
        self.resolve_detailed(primary_file, fallback_file).to_string()
    }

    /// Same as [`Self::resolve`] but keeps track of which branch won.
    pub fn resolve_detailed(&self, primary_file: &str, fallback_file: &str) -> Resolution {
        if let Some(line) = self.read_first_line(primary_file).into_line() {
            debug!(file = primary_file, "primary file is plaintext");
            return Resolution::Primary(line);
        }

        match self.read_first_line(fallback_file) {
            LineLookup::Line(line) => {
                debug!(file = fallback_file, "showing fallback file");
                Resolution::Fallback(line)
            }
            LineLookup::Missing => Resolution::FallbackMissing,
            LineLookup::Undecodable(_) => Resolution::FallbackEncrypted {
                fallback: fallback_file.to_string(),
            },
        }
    }

    /// One locate-and-decode attempt for a single filename.
    pub fn read_first_line(&self, file_name: &str) -> LineLookup {
        let reference = FileReference::parse(file_name);
        debug!(
            base = reference.base_name(),
            ext = reference.extension(),
            "looking up resource"
        );
        match self.store.locate(&reference) {
            Ok(bytes) => {
                let lookup = LineLookup::from(decode_first_line(&bytes));
                if let LineLookup::Undecodable(reason) = &lookup {
                    warn!(file = file_name, %reason, "file is not a text file");
                }
                lookup
            }
            Err(ResourceError::NotFound { .. }) => {
                warn!(
                    file = file_name,
                    store = %self.store.describe(),
                    "cannot find file in resources"
                );
                LineLookup::Missing
            }
            // Present but unreadable counts as undecodable rather than missing.
            Err(err @ ResourceError::Unreadable { .. }) => {
                warn!(file = file_name, error = %err, "file is not readable");
                LineLookup::Undecodable(DecodeFailure::Unreadable(err.to_string()))
            }
        }
    }
}
