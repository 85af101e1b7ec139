//! Colors - Greet Theme Colors

use gpui::{Rgba, rgb};

/// Greet color palette - All colors are accessed via associated functions
pub struct GreetColors;

impl GreetColors {
    /// Header background - Cyan/Teal
    pub fn header_bg() -> Rgba {
        rgb(0x2cb3b8)
    }

    /// Main background
    pub fn background() -> Rgba {
        rgb(0xf5f5f5)
    }

    /// Content area background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }

    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x1f2937)
    }

    /// Header text
    pub fn text_header() -> Rgba {
        rgb(0xffffff)
    }

    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe5e7eb)
    }
}
