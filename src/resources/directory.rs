// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Store that resolves resource names inside a folder on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{ResourceError, ResourceStore};
use crate::models::file_reference::FileReference;

/// Resources read from `root/<base>.<ext>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a name to a path directly under the root. Anything that would
    /// escape the folder or descend into subfolders is rejected.
    fn path_for(&self, name: &str) -> Option<PathBuf> {
        let candidate = Path::new(name);
        let mut components = candidate.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.root.join(file)),
            _ => None,
        }
    }
}

impl ResourceStore for DirectoryStore {
    fn locate(&self, reference: &FileReference) -> Result<Vec<u8>, ResourceError> {
        let name = reference.to_string();
        let Some(path) = self.path_for(&name) else {
            return Err(ResourceError::NotFound { name });
        };
        if !path.is_file() {
            return Err(ResourceError::NotFound { name });
        }
        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ResourceError::NotFound { name },
            _ => ResourceError::Unreadable { name, source },
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
