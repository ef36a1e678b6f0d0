//! Standard render model for the suggestion bar.
//!
//! Visuals are plain values the host frontend draws; the engine never
//! touches a drawing API. Custom builders may produce any visual type,
//! these are the defaults.

use keybar_core::style::{Color, ToolbarStyle};
use keybar_core::Suggestion;
use unicode_width::UnicodeWidthStr;

/// Default visual for one bar slot: either a suggestion item or the
/// divider between two items.
#[derive(Debug, Clone, PartialEq)]
pub enum BarVisual {
    Item(ItemVisual),
    Separator(SeparatorVisual),
}

/// Rendered suggestion content.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    /// Display title; unknown words carry typographic quotes.
    pub title: String,
    pub subtitle: Option<String>,
    /// True for autocomplete acceptances, drawn with the highlight colors.
    pub emphasized: bool,
    /// Terminal-column width of `title`, for hosts that lay out in cells.
    pub width_hint: usize,
    pub font_size: f32,
    pub subtitle_font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
}

/// A vertical divider between two items.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorVisual {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Standard item builder: title plus optional subtitle, styled from the
/// standard toolbar style read at invocation time.
pub fn standard_item(suggestion: &Suggestion) -> BarVisual {
    let style = ToolbarStyle::standard();
    let title = display_title(suggestion);
    let emphasized = suggestion.is_autocomplete;
    BarVisual::Item(ItemVisual {
        width_hint: title.width(),
        subtitle: suggestion.subtitle.clone(),
        emphasized,
        font_size: style.item_font_size,
        subtitle_font_size: style.subtitle_font_size,
        text_color: if emphasized {
            style.highlight_text_color
        } else {
            style.text_color
        },
        background_color: if emphasized {
            style.highlight_background_color
        } else {
            Color::CLEAR
        },
        title,
    })
}

/// Standard separator builder: a fixed-size vertical divider. The
/// suggestion argument is accepted for parity with custom builders and
/// ignored.
pub fn standard_separator(_suggestion: &Suggestion) -> BarVisual {
    let style = ToolbarStyle::standard();
    BarVisual::Separator(SeparatorVisual {
        width: style.separator_width,
        height: style.separator_height,
        color: style.separator_color,
    })
}

/// Unknown words render quoted, everything else uses the title as-is.
fn display_title(suggestion: &Suggestion) -> String {
    if suggestion.is_unknown {
        format!("\u{201C}{}\u{201D}", suggestion.title)
    } else {
        suggestion.title.clone()
    }
}
