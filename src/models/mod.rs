// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between the resolver and the UI.

pub mod file_reference;
pub mod resolution;
