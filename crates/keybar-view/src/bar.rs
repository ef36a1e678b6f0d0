use std::sync::{Arc, Mutex};

use tracing::{debug, debug_span};

use keybar_core::{ActionHandler, Suggestion, TextSurface};

use crate::item::BarItem;
use crate::layout;
use crate::replace::{standard_replacement, ReplacementAction};
use crate::visual::{standard_item, standard_separator, BarVisual};

/// Builder turning a suggestion into its item visual.
pub type ItemBuilder<V> = Box<dyn Fn(&Suggestion) -> V>;
/// Builder turning a suggestion into the separator drawn after it.
pub type SeparatorBuilder<V> = Box<dyn Fn(&Suggestion) -> V>;

/// One rendered slot of the bar: the item content plus the separator
/// that follows it, if the layout placed one.
///
/// The host must wrap `content` in a tap target that feeds `id` back
/// into [`SuggestionBar::handle_tap`]. That wrapping target is the only
/// one: custom item builders must not put their own tap targets inside
/// `content`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarElement<V> {
    /// Identity within this render pass (position in the suggestion list).
    pub id: usize,
    pub content: V,
    pub separator: Option<V>,
}

/// Suggestion bar composition root.
///
/// Owns the current suggestion list, the two visual builders, and the
/// replacement action invoked on tap. Rendering is stateless per call:
/// every [`render`](Self::render) recomputes the full element sequence
/// from the current list, and `set_suggestions` replaces that list
/// wholesale.
pub struct SuggestionBar<V = BarVisual> {
    items: Vec<BarItem>,
    item_builder: ItemBuilder<V>,
    separator_builder: SeparatorBuilder<V>,
    replacement_action: ReplacementAction,
}

impl SuggestionBar<BarVisual> {
    /// Bar with the standard builders and the standard replacement
    /// action committing into `surface` and notifying `actions`.
    pub fn new(
        suggestions: Vec<Suggestion>,
        surface: Arc<Mutex<dyn TextSurface + Send>>,
        actions: Arc<Mutex<dyn ActionHandler + Send>>,
    ) -> Self {
        Self::with_builders(
            suggestions,
            Box::new(standard_item),
            Box::new(standard_separator),
            standard_replacement(surface, actions),
        )
    }
}

impl<V> SuggestionBar<V> {
    /// Bar with custom builders and replacement action.
    pub fn with_builders(
        suggestions: Vec<Suggestion>,
        item_builder: ItemBuilder<V>,
        separator_builder: SeparatorBuilder<V>,
        replacement_action: ReplacementAction,
    ) -> Self {
        Self {
            items: BarItem::wrap(suggestions),
            item_builder,
            separator_builder,
            replacement_action,
        }
    }

    /// Replace the suggestion list wholesale. The next `render` reflects
    /// only the new list.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.items = BarItem::wrap(suggestions);
    }

    /// Replace the item builder. The next `render` uses the new builder.
    pub fn set_item_builder(&mut self, builder: ItemBuilder<V>) {
        self.item_builder = builder;
    }

    /// Replace the separator builder.
    pub fn set_separator_builder(&mut self, builder: SeparatorBuilder<V>) {
        self.separator_builder = builder;
    }

    /// Replace the action invoked by `handle_tap`.
    pub fn set_replacement_action(&mut self, action: ReplacementAction) {
        self.replacement_action = action;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compose the ordered element sequence for the current list.
    pub fn render(&self) -> Vec<BarElement<V>> {
        let _span = debug_span!("render", items = self.items.len()).entered();
        self.items
            .iter()
            .map(|item| BarElement {
                id: item.index,
                content: (self.item_builder)(&item.suggestion),
                separator: layout::separator_after(&self.items, item.index)
                    .then(|| (self.separator_builder)(&item.suggestion)),
            })
            .collect()
    }

    /// Dispatch a tap on the element with `id`, invoking the replacement
    /// action once with that element's suggestion. Returns false when the
    /// id does not match a current item.
    pub fn handle_tap(&mut self, id: usize) -> bool {
        let Some(item) = self.items.get(id) else {
            debug!(id, "tap on stale element id");
            return false;
        };
        let suggestion = item.suggestion.clone();
        (self.replacement_action)(&suggestion);
        true
    }
}
