// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod content_view;
