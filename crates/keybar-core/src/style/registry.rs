//! Process-wide style defaults, loaded from TOML.
//!
//! - `init_custom(toml_content)` installs a custom TOML before the first
//!   `stylesheet()` read
//! - `stylesheet()` returns a clone of the current sheet (lazy-init)
//! - `set_standard_*` replaces one style at a time, `set_stylesheet` all
//!   of them; later reads observe the new values
//! - Default values are embedded via `include_str!("default_style.toml")`

use std::sync::{OnceLock, RwLock};

use serde::Deserialize;
use tracing::debug;

use super::callout::{CalloutStyle, SecondaryInputCalloutStyle};
use super::color::Color;
use super::toolbar::ToolbarStyle;
use super::StyleError;

pub const DEFAULT_STYLE_TOML: &str = include_str!("default_style.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom style TOML before the first `stylesheet()` call.
pub fn init_custom(toml_content: String) -> Result<(), StyleError> {
    parse_style_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| StyleError::AlreadyInitialized)
}

/// Returns the embedded default style TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_STYLE_TOML
}

/// The full set of process-wide standard styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub callout: CalloutStyle,
    pub secondary_callout: SecondaryInputCalloutStyle,
    pub toolbar: ToolbarStyle,
}

fn sheet_lock() -> &'static RwLock<StyleSheet> {
    static INSTANCE: OnceLock<RwLock<StyleSheet>> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_STYLE_TOML);
        RwLock::new(parse_style_toml(toml_str).expect("style TOML must be valid"))
    })
}

/// The current process-wide stylesheet.
///
/// Consumers capture values at read time; later mutation does not reach
/// already-captured copies.
pub fn stylesheet() -> StyleSheet {
    sheet_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the whole process-wide stylesheet.
pub fn set_stylesheet(sheet: StyleSheet) {
    debug!("stylesheet replaced");
    *sheet_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = sheet;
}

pub fn set_standard_callout(style: CalloutStyle) {
    with_sheet(|sheet| sheet.callout = style);
}

pub fn set_standard_secondary_callout(style: SecondaryInputCalloutStyle) {
    with_sheet(|sheet| sheet.secondary_callout = style);
}

pub fn set_standard_toolbar(style: ToolbarStyle) {
    with_sheet(|sheet| sheet.toolbar = style);
}

fn with_sheet(mutate: impl FnOnce(&mut StyleSheet)) {
    let mut guard = sheet_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    mutate(&mut guard);
}

/// TOML shape of the sheet. The secondary callout omits the embedded
/// bubble style; it inherits the `[callout]` section.
#[derive(Deserialize)]
struct RawSheet {
    callout: CalloutStyle,
    secondary_callout: RawSecondaryCallout,
    toolbar: ToolbarStyle,
}

#[derive(Deserialize)]
struct RawSecondaryCallout {
    font_size: f32,
    selected_background_color: Color,
    selected_text_color: Color,
    vertical_padding: f32,
}

pub fn parse_style_toml(toml_str: &str) -> Result<StyleSheet, StyleError> {
    let raw: RawSheet =
        toml::from_str(toml_str).map_err(|e| StyleError::Parse(e.to_string()))?;
    let sheet = StyleSheet {
        secondary_callout: SecondaryInputCalloutStyle {
            callout: raw.callout.clone(),
            font_size: raw.secondary_callout.font_size,
            selected_background_color: raw.secondary_callout.selected_background_color,
            selected_text_color: raw.secondary_callout.selected_text_color,
            vertical_padding: raw.secondary_callout.vertical_padding,
        },
        callout: raw.callout,
        toolbar: raw.toolbar,
    };
    validate(&sheet)?;
    Ok(sheet)
}

fn validate(sheet: &StyleSheet) -> Result<(), StyleError> {
    macro_rules! check_non_negative {
        ($value:expr, $name:literal) => {
            if !$value.is_finite() || $value < 0.0 {
                return Err(StyleError::InvalidValue {
                    field: $name.to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive {
        ($value:expr, $name:literal) => {
            if !$value.is_finite() || $value <= 0.0 {
                return Err(StyleError::InvalidValue {
                    field: $name.to_string(),
                    reason: "must be a positive number".to_string(),
                });
            }
        };
    }

    check_non_negative!(sheet.callout.corner_radius, "callout.corner_radius");
    check_non_negative!(sheet.callout.curve_size, "callout.curve_size");
    check_non_negative!(sheet.callout.shadow_radius, "callout.shadow_radius");
    check_non_negative!(
        sheet.callout.button_overlay_inset.width,
        "callout.button_overlay_inset.width"
    );
    check_non_negative!(
        sheet.callout.button_overlay_inset.height,
        "callout.button_overlay_inset.height"
    );

    check_positive!(
        sheet.secondary_callout.font_size,
        "secondary_callout.font_size"
    );
    check_non_negative!(
        sheet.secondary_callout.vertical_padding,
        "secondary_callout.vertical_padding"
    );

    check_positive!(sheet.toolbar.height, "toolbar.height");
    check_positive!(sheet.toolbar.item_font_size, "toolbar.item_font_size");
    check_positive!(
        sheet.toolbar.subtitle_font_size,
        "toolbar.subtitle_font_size"
    );
    check_non_negative!(sheet.toolbar.separator_width, "toolbar.separator_width");
    check_positive!(sheet.toolbar.separator_height, "toolbar.separator_height");

    Ok(())
}
