//! Suggestion-bar composition for software keyboards.
//!
//! [`SuggestionBar`] turns an ordered candidate list into a render-model
//! sequence the host frontend draws: one tappable item per suggestion,
//! with separators placed by the layout policy. Taps are routed back
//! through [`SuggestionBar::handle_tap`], which dispatches the bar's
//! replacement action. Item and separator visuals come from pluggable
//! builder functions with standard defaults.

mod bar;
mod emoji_menu;
mod item;
pub mod layout;
mod replace;
mod visual;

#[cfg(test)]
mod tests;

pub use bar::{BarElement, ItemBuilder, SeparatorBuilder, SuggestionBar};
pub use emoji_menu::{EmojiCategoryMenu, MenuElement};
pub use item::BarItem;
pub use replace::{standard_replacement, ReplacementAction};
pub use visual::{standard_item, standard_separator, BarVisual, ItemVisual, SeparatorVisual};
