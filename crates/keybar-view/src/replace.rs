use std::sync::{Arc, Mutex};

use tracing::debug_span;

use keybar_core::{ActionHandler, Gesture, KeyboardAction, Suggestion, TextSurface};

/// Action invoked when a bar item is tapped.
pub type ReplacementAction = Box<dyn FnMut(&Suggestion)>;

/// Standard replacement action: commit the suggestion into the host
/// surface, then fire a synthetic empty-character tap so the action
/// handler runs its ordinary tap side effects (haptics, state refresh).
///
/// Both calls are fire-and-forget; failures belong to the collaborators.
/// A poisoned collaborator lock means the host panicked elsewhere; we
/// skip the call rather than cascade the panic.
pub fn standard_replacement(
    surface: Arc<Mutex<dyn TextSurface + Send>>,
    actions: Arc<Mutex<dyn ActionHandler + Send>>,
) -> ReplacementAction {
    Box::new(move |suggestion| {
        let _span = debug_span!("replace", text = %suggestion.text).entered();
        if let Ok(mut surface) = surface.lock() {
            surface.insert_autocomplete_suggestion(suggestion);
        }
        if let Ok(mut actions) = actions.lock() {
            actions.handle(Gesture::Tap, &KeyboardAction::empty_character());
        }
    })
}
