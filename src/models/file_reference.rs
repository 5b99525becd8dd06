// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filename split into base name and extension for resource lookup.

use std::fmt;

/// A resource name split on its last `.`.
///
/// `extension` is `None` when the name has no dot at all, and `Some("")`
/// when it ends in one, so the original name always round-trips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReference {
    base_name: String,
    extension: Option<String>,
}

impl FileReference {
    /// Split `name` on its last `.`.
    pub fn parse(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((base, ext)) => Self {
                base_name: base.to_string(),
                extension: Some(ext.to_string()),
            },
            None => Self {
                base_name: name.to_string(),
                extension: None,
            },
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "{}.{}", self.base_name, ext),
            None => f.write_str(&self.base_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileReference;

    #[test]
    fn parse_splits_on_last_dot() {
        let reference = FileReference::parse("notes.backup.txt");

        assert_eq!(reference.base_name(), "notes.backup");
        assert_eq!(reference.extension(), Some("txt"));
    }

    #[test]
    fn parse_without_dot_has_no_extension() {
        let reference = FileReference::parse("README");

        assert_eq!(reference.base_name(), "README");
        assert_eq!(reference.extension(), None);
        assert_eq!(reference.to_string(), "README");
    }

    // Hidden-file style names keep an empty base rather than losing the extension.
    #[test]
    fn parse_leading_dot_keeps_extension() {
        let reference = FileReference::parse(".env");

        assert_eq!(reference.base_name(), "");
        assert_eq!(reference.extension(), Some("env"));
    }

    // A trailing dot is kept so `notes.` and `notes` stay distinct resources.
    #[test]
    fn trailing_dot_round_trips() {
        let reference = FileReference::parse("notes.");

        assert_eq!(reference.base_name(), "notes");
        assert_eq!(reference.extension(), Some(""));
        assert_eq!(reference.to_string(), "notes.");
    }

    #[test]
    fn display_rejoins_parts() {
        assert_eq!(FileReference::parse("Secret.txt").to_string(), "Secret.txt");
    }
}
