// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only resource stores that map a filename to its bytes.
//!
//! The resolver never touches the filesystem directly; it asks a
//! [`ResourceStore`] to locate a [`FileReference`]. The application ships the
//! demo files embedded in the binary ([`MemoryStore::bundled`]) and can switch
//! to a folder on disk ([`DirectoryStore`]).

pub mod directory;
pub mod memory;

use std::io;

use thiserror::Error;

use crate::models::file_reference::FileReference;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

/// Failure to hand out the bytes of a named resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("cannot find file {name} in resources")]
    NotFound { name: String },
    #[error("cannot read file {name}")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Lookup of bundled resources by name.
pub trait ResourceStore {
    /// Return the full contents of the referenced resource.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when the store has no such resource,
    /// [`ResourceError::Unreadable`] when it exists but cannot be read.
    fn locate(&self, reference: &FileReference) -> Result<Vec<u8>, ResourceError>;

    /// Human-readable origin shown in the window footer.
    fn describe(&self) -> String;
}
