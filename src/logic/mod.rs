// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: decoding resource bytes and resolving the displayed line.

pub mod decode;
pub mod resolver;

pub use resolver::FileContentResolver;
