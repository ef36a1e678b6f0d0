//! Core data model for keyboard suggestion bars and overlays.
//!
//! Leaf types only: suggestion candidates, keyboard actions and the
//! collaborator seams they cross, style value objects backed by a
//! process-wide registry, haptic feedback configuration, and emoji
//! category data. The composition logic lives in `keybar-view`.

pub mod action;
pub mod emoji;
pub mod feedback;
pub mod style;
pub mod suggestion;

pub use action::{ActionHandler, Gesture, KeyboardAction, KeyboardType, TextSurface};
pub use emoji::EmojiCategory;
pub use feedback::{HapticFeedback, HapticFeedbackConfiguration};
pub use suggestion::Suggestion;
