use serde::{Deserialize, Serialize};

use super::color::Color;
use super::registry;

/// Styling for the suggestion bar above the keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarStyle {
    /// Total bar height, in points.
    pub height: f32,
    pub item_font_size: f32,
    pub subtitle_font_size: f32,
    pub text_color: Color,
    /// Background behind an emphasized (autocomplete) item.
    pub highlight_background_color: Color,
    pub highlight_text_color: Color,
    pub separator_color: Color,
    pub separator_width: f32,
    pub separator_height: f32,
}

impl ToolbarStyle {
    /// The process-wide standard toolbar style.
    pub fn standard() -> Self {
        registry::stylesheet().toolbar
    }

    /// Replace the process-wide standard toolbar style. Affects reads that
    /// happen after this call; already-captured copies keep their values.
    pub fn set_standard(style: ToolbarStyle) {
        registry::set_standard_toolbar(style);
    }
}
