// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! # gitcrypt-demo — is the bundled file still encrypted?
//!
//! Shows the first line of a primary file (typically one protected by a
//! git-crypt filter) or, when that file is still encrypted or missing, the
//! first line of a fallback file. When neither reads as text a placeholder
//! is shown instead.
//!
//! ```
//! use gitcrypt_demo::logic::FileContentResolver;
//! use gitcrypt_demo::resources::MemoryStore;
//!
//! let store = MemoryStore::new()
//!     .with_file("Secret.txt", b"\0GITCRYPT\0\x8f\xd2".to_vec())
//!     .with_file("Unsecret.txt", "hello world\n");
//! let line = FileContentResolver::new(&store).resolve("Secret.txt", "Unsecret.txt");
//! assert_eq!(line, "hello world");
//! ```

pub mod app;
pub mod config;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod resources;
pub mod ui;
