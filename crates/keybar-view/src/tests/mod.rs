mod emoji_menu;
mod proptest_layout;

use keybar_core::{ActionHandler, Gesture, KeyboardAction, Suggestion, TextSurface};

/// Text surface recording every inserted suggestion.
#[derive(Default)]
pub(super) struct RecordingSurface {
    pub(super) inserted: Vec<Suggestion>,
}

impl TextSurface for RecordingSurface {
    fn insert_autocomplete_suggestion(&mut self, suggestion: &Suggestion) {
        self.inserted.push(suggestion.clone());
    }
}

/// Action handler recording every dispatched gesture/action pair.
#[derive(Default)]
pub(super) struct RecordingHandler {
    pub(super) handled: Vec<(Gesture, KeyboardAction)>,
}

impl ActionHandler for RecordingHandler {
    fn handle(&mut self, gesture: Gesture, action: &KeyboardAction) {
        self.handled.push((gesture, action.clone()));
    }
}

/// Three-candidate fixture: an unknown word, an autocomplete acceptance,
/// and a titled candidate with a subtitle.
pub(super) fn preview_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("Baz").unknown(),
        Suggestion::new("Bar").autocomplete(),
        Suggestion::new("")
            .with_title("Foo")
            .with_subtitle("Recommended"),
    ]
}

pub(super) fn plain(texts: &[&str]) -> Vec<Suggestion> {
    texts.iter().map(|t| Suggestion::new(*t)).collect()
}
