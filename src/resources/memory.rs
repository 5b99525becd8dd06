// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! In-memory store, also backing the resources compiled into the binary.

use std::collections::HashMap;

use super::{ResourceError, ResourceStore};
use crate::models::file_reference::FileReference;

const BUNDLED_SECRET: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/Secret.txt"
));
const BUNDLED_UNSECRET: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/Unsecret.txt"
));

/// Resource map keyed by the full `base.ext` name.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    files: HashMap<String, Vec<u8>>,
    label: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            label: "in-memory resources".to_string(),
        }
    }

    /// Demo files embedded at build time from the `resources/` folder.
    pub fn bundled() -> Self {
        let mut store = Self::new()
            .with_file("Secret.txt", BUNDLED_SECRET)
            .with_file("Unsecret.txt", BUNDLED_UNSECRET);
        store.label = "bundled resources".to_string();
        store
    }

    /// Builder-style insert.
    pub fn with_file(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn insert(&mut self, name: &str, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.to_string(), contents.into());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStore for MemoryStore {
    fn locate(&self, reference: &FileReference) -> Result<Vec<u8>, ResourceError> {
        let name = reference.to_string();
        self.files
            .get(&name)
            .cloned()
            .ok_or(ResourceError::NotFound { name })
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::decode::ENCRYPTED_MARKER;

    #[test]
    fn locate_returns_inserted_bytes() {
        let store = MemoryStore::new().with_file("a.txt", "alpha\n");

        let bytes = store.locate(&FileReference::parse("a.txt")).unwrap();

        assert_eq!(bytes, b"alpha\n");
    }

    #[test]
    fn locate_unknown_name_is_not_found() {
        let store = MemoryStore::new();

        let err = store.locate(&FileReference::parse("b.txt")).unwrap_err();

        assert!(matches!(err, ResourceError::NotFound { ref name } if name == "b.txt"));
        assert_eq!(err.to_string(), "cannot find file b.txt in resources");
    }

    // The secret demo file is committed in its git-crypt encrypted form.
    #[test]
    fn bundled_store_ships_both_demo_files() {
        let store = MemoryStore::bundled();

        let secret = store.locate(&FileReference::parse("Secret.txt")).unwrap();
        let unsecret = store.locate(&FileReference::parse("Unsecret.txt")).unwrap();

        assert!(secret.starts_with(&ENCRYPTED_MARKER));
        assert!(std::str::from_utf8(&unsecret).is_ok());
        assert_eq!(store.describe(), "bundled resources");
    }
}
