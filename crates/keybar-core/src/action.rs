//! Keyboard actions, gestures, and the collaborator seams the bar drives.
//!
//! The suggestion bar never edits text or fires feedback itself; it talks
//! to the host through [`TextSurface`] and [`ActionHandler`] and treats
//! every call as fire-and-forget.

use crate::suggestion::Suggestion;

/// User gesture kinds the action handler distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    DoubleTap,
    LongPress,
    Repeat,
}

/// Keyboard layer kinds reachable from a layer-switch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardType {
    Alphabetic,
    Numeric,
    Symbolic,
    Emojis,
}

/// Actions dispatched to the host's action handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardAction {
    None,
    Character(String),
    Backspace,
    KeyboardType(KeyboardType),
}

impl KeyboardAction {
    /// The empty character action: a tap with no text payload, dispatched
    /// solely to trigger the handler's ordinary tap side effects.
    pub fn empty_character() -> Self {
        Self::Character(String::new())
    }
}

/// Host text surface: the component that owns and edits the text buffer.
pub trait TextSurface {
    /// Replace the in-progress word with `suggestion.text`, per the
    /// host's own word-boundary rules.
    fn insert_autocomplete_suggestion(&mut self, suggestion: &Suggestion);
}

/// Keyboard action handling collaborator.
///
/// Owns all side effects of ordinary key gestures (haptic feedback, state
/// refresh). What it does with any given action is opaque to this crate.
pub trait ActionHandler {
    fn handle(&mut self, gesture: Gesture, action: &KeyboardAction);
}
