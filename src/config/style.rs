// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cosmetic settings for the content view.

use egui::{Color32, Vec2, vec2};
use serde::Deserialize;

/// Colors and sizes of the content view. Colors are `[r, g, b]`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewStyle {
    pub background: [u8; 3],
    pub text_color: [u8; 3],
    pub icon_color: [u8; 3],
    pub border_color: [u8; 3],
    pub icon_size: f32,
    pub text_size: f32,
    /// Width and height of the framed area in logical pixels.
    pub frame_size: [f32; 2],
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            background: [211, 211, 211],
            text_color: [0, 0, 0],
            icon_color: [0, 0, 255],
            border_color: [255, 255, 255],
            icon_size: 50.0,
            text_size: 28.0,
            frame_size: [300.0, 300.0],
        }
    }
}

impl ViewStyle {
    pub fn background(&self) -> Color32 {
        rgb(self.background)
    }

    pub fn text_color(&self) -> Color32 {
        rgb(self.text_color)
    }

    pub fn icon_color(&self) -> Color32 {
        rgb(self.icon_color)
    }

    pub fn border_color(&self) -> Color32 {
        rgb(self.border_color)
    }

    pub fn frame_size(&self) -> Vec2 {
        vec2(self.frame_size[0], self.frame_size[1])
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_demo_look() {
        let style = ViewStyle::default();

        assert_eq!(style.background(), Color32::from_rgb(211, 211, 211));
        assert_eq!(style.text_color(), Color32::BLACK);
        assert_eq!(style.border_color(), Color32::WHITE);
        assert_eq!(style.frame_size(), vec2(300.0, 300.0));
    }
}
