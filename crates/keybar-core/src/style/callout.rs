use serde::{Deserialize, Serialize};

use super::color::Color;
use super::registry;

/// A width/height pair, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Styling for callout views, the transient overlays presented above a
/// keyboard button on press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutStyle {
    pub background_color: Color,
    pub border_color: Color,
    /// How far the callout overlaps the button it points at.
    pub button_overlay_inset: Size,
    pub corner_radius: f32,
    /// Size of the curve connecting the callout bubble to the button.
    pub curve_size: f32,
    pub shadow_color: Color,
    pub shadow_radius: f32,
    pub text_color: Color,
}

impl CalloutStyle {
    /// The process-wide standard callout style.
    pub fn standard() -> Self {
        registry::stylesheet().callout
    }

    /// Replace the process-wide standard callout style. Affects reads that
    /// happen after this call; already-captured copies keep their values.
    pub fn set_standard(style: CalloutStyle) {
        registry::set_standard_callout(style);
    }
}

/// Styling for secondary input callouts, the overlays listing alternate
/// characters on a long-press. Embeds a [`CalloutStyle`] for the bubble
/// itself; the standard instance inherits the standard callout style.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryInputCalloutStyle {
    pub callout: CalloutStyle,
    pub font_size: f32,
    pub selected_background_color: Color,
    pub selected_text_color: Color,
    pub vertical_padding: f32,
}

impl SecondaryInputCalloutStyle {
    /// The process-wide standard secondary callout style.
    pub fn standard() -> Self {
        registry::stylesheet().secondary_callout
    }

    /// Replace the process-wide standard secondary callout style.
    pub fn set_standard(style: SecondaryInputCalloutStyle) {
        registry::set_standard_secondary_callout(style);
    }
}
