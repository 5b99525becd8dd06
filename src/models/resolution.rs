// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Outcome types for decoding a resource and resolving the displayed line.

use std::fmt;
use std::str::Utf8Error;

use thiserror::Error;

/// Placeholder shown when the fallback resource is not in the store.
pub const FILE_MISSING: &str = "File missing!";

/// Why located bytes could not be turned into text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeFailure {
    #[error("content starts with the git-crypt marker")]
    EncryptedMarker,
    #[error("content is not valid UTF-8: {0}")]
    InvalidText(#[from] Utf8Error),
    #[error("{0}")]
    Unreadable(String),
}

/// Result of decoding a located resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// First line of the text, without the terminating `\n`.
    Text(String),
    Undecodable(DecodeFailure),
}

/// Outcome of a single locate-and-decode attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineLookup {
    Line(String),
    Undecodable(DecodeFailure),
    Missing,
}

impl LineLookup {
    /// The line when the attempt succeeded.
    pub fn into_line(self) -> Option<String> {
        match self {
            LineLookup::Line(line) => Some(line),
            _ => None,
        }
    }
}

impl From<Decoded> for LineLookup {
    fn from(decoded: Decoded) -> Self {
        match decoded {
            Decoded::Text(line) => LineLookup::Line(line),
            Decoded::Undecodable(reason) => LineLookup::Undecodable(reason),
        }
    }
}

/// Which branch of the primary/fallback resolution produced the payload.
///
/// `Display` renders exactly the string shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// First line of the primary file (plaintext available).
    Primary(String),
    /// First line of the fallback file.
    Fallback(String),
    /// The fallback file is not in the store at all.
    FallbackMissing,
    /// The fallback file exists but could not be decoded as text.
    FallbackEncrypted { fallback: String },
}

impl Resolution {
    /// Short label summarising the branch, used for the status badge.
    pub fn status_label(&self) -> &'static str {
        match self {
            Resolution::Primary(_) => "plaintext",
            Resolution::Fallback(_) => "fallback",
            Resolution::FallbackMissing => "missing",
            Resolution::FallbackEncrypted { .. } => "encrypted",
        }
    }

    /// Whether the payload is a diagnostic placeholder rather than file content.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            Resolution::FallbackMissing | Resolution::FallbackEncrypted { .. }
        )
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Primary(line) | Resolution::Fallback(line) => f.write_str(line),
            Resolution::FallbackMissing => f.write_str(FILE_MISSING),
            Resolution::FallbackEncrypted { fallback } => {
                write!(f, "file {fallback} looks encrypted")
            }
        }
    }
}
