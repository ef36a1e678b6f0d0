//! Emoji category menu: a filtered category list with a toggled
//! selection, flanked by a keyboard switcher and a backspace key.

use keybar_core::style::Color;
use keybar_core::{EmojiCategory, KeyboardAction, KeyboardType};

/// Menu over a set of emoji categories.
///
/// Categories without emojis are dropped at construction, so the host
/// can pass `EmojiCategory::all()` without checking which categories it
/// has populated.
#[derive(Debug, Clone)]
pub struct EmojiCategoryMenu {
    categories: Vec<EmojiCategory>,
    selection: EmojiCategory,
    selected_color: Color,
}

/// One slot of the rendered menu row.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuElement {
    /// A key forwarding `action` to the host's action handler.
    Action { action: KeyboardAction },
    /// A category toggle.
    Category {
        category: EmojiCategory,
        display_emoji: &'static str,
        selected: bool,
        background_color: Color,
    },
}

impl EmojiCategoryMenu {
    pub fn new(categories: Vec<EmojiCategory>, selection: EmojiCategory) -> Self {
        Self {
            categories: categories
                .into_iter()
                .filter(|c| !c.emojis().is_empty())
                .collect(),
            selection,
            selected_color: Color::BLACK.with_opacity(0.1),
        }
    }

    /// Menu over all categories.
    pub fn standard(selection: EmojiCategory) -> Self {
        Self::new(EmojiCategory::all(), selection)
    }

    /// Override the background color of the selected category button.
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    pub fn categories(&self) -> &[EmojiCategory] {
        &self.categories
    }

    pub fn selection(&self) -> EmojiCategory {
        self.selection
    }

    /// Move the selection. Categories not present in the menu are ignored.
    pub fn select(&mut self, category: EmojiCategory) {
        if self.categories.contains(&category) {
            self.selection = category;
        }
    }

    /// Compose the menu row: keyboard switcher, one toggle per category,
    /// backspace.
    pub fn render(&self) -> Vec<MenuElement> {
        let mut row = Vec::with_capacity(self.categories.len() + 2);
        row.push(MenuElement::Action {
            action: KeyboardAction::KeyboardType(KeyboardType::Alphabetic),
        });
        for &category in &self.categories {
            let selected = category == self.selection;
            row.push(MenuElement::Category {
                category,
                display_emoji: category.fallback_display_emoji(),
                selected,
                background_color: if selected {
                    self.selected_color
                } else {
                    Color::CLEAR
                },
            });
        }
        row.push(MenuElement::Action {
            action: KeyboardAction::Backspace,
        });
        row
    }
}
