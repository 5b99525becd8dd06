// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn resource bytes into the first line of text, or explain why not.

use crate::models::resolution::{DecodeFailure, Decoded};

/// Header git-crypt writes in front of every encrypted blob: `\0GITCRYPT\0`.
pub const ENCRYPTED_MARKER: [u8; 10] = *b"\0GITCRYPT\0";

/// Decode `bytes` as UTF-8 text and keep everything before the first `\n`.
///
/// The marker is itself valid UTF-8, so it is checked explicitly before the
/// text decode. A trailing `\r` is part of the line.
pub fn decode_first_line(bytes: &[u8]) -> Decoded {
    if bytes.starts_with(&ENCRYPTED_MARKER) {
        return Decoded::Undecodable(DecodeFailure::EncryptedMarker);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let line = text.split('\n').next().unwrap_or_default();
            Decoded::Text(line.to_string())
        }
        Err(err) => Decoded::Undecodable(err.into()),
    }
}
