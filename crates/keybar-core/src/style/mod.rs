//! Style value objects and the process-wide style registry.
//!
//! Each style type is a plain value record. The registry holds one
//! "standard" instance per type, loaded from TOML; `Type::standard()`
//! reads it and `Type::set_standard()` replaces it. Consumers capture
//! values at read time, so mutating a standard instance only affects
//! reads that happen afterwards.

mod callout;
mod color;
pub mod registry;
mod toolbar;

pub use callout::{CalloutStyle, SecondaryInputCalloutStyle, Size};
pub use color::Color;
pub use registry::{
    default_toml, init_custom, parse_style_toml, set_stylesheet, stylesheet, StyleSheet,
};
pub use toolbar::ToolbarStyle;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid color {value:?}: {reason}")]
    InvalidColor {
        value: String,
        reason: &'static str,
    },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("styles already initialized")]
    AlreadyInitialized,
}
