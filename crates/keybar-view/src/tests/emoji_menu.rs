use keybar_core::style::Color;
use keybar_core::{EmojiCategory, KeyboardAction, KeyboardType};

use crate::emoji_menu::{EmojiCategoryMenu, MenuElement};

#[test]
fn empty_categories_are_filtered_out() {
    let menu = EmojiCategoryMenu::standard(EmojiCategory::Smileys);
    assert!(!menu.categories().contains(&EmojiCategory::Frequent));
    assert_eq!(menu.categories().len(), EmojiCategory::all().len() - 1);
}

#[test]
fn select_ignores_categories_outside_the_menu() {
    let mut menu = EmojiCategoryMenu::standard(EmojiCategory::Smileys);

    menu.select(EmojiCategory::Frequent);
    assert_eq!(menu.selection(), EmojiCategory::Smileys);

    menu.select(EmojiCategory::Flags);
    assert_eq!(menu.selection(), EmojiCategory::Flags);
}

#[test]
fn renders_switcher_then_categories_then_backspace() {
    let menu = EmojiCategoryMenu::new(
        vec![EmojiCategory::Smileys, EmojiCategory::Foods],
        EmojiCategory::Foods,
    );
    let row = menu.render();
    assert_eq!(row.len(), 4);
    assert_eq!(
        row[0],
        MenuElement::Action {
            action: KeyboardAction::KeyboardType(KeyboardType::Alphabetic)
        }
    );
    assert_eq!(
        row[3],
        MenuElement::Action {
            action: KeyboardAction::Backspace
        }
    );

    match &row[1] {
        MenuElement::Category {
            selected,
            background_color,
            ..
        } => {
            assert!(!*selected);
            assert_eq!(*background_color, Color::CLEAR);
        }
        other => panic!("expected category, got {other:?}"),
    }
    match &row[2] {
        MenuElement::Category {
            category,
            display_emoji,
            selected,
            background_color,
        } => {
            assert_eq!(*category, EmojiCategory::Foods);
            assert_eq!(*display_emoji, EmojiCategory::Foods.fallback_display_emoji());
            assert!(*selected);
            assert_ne!(*background_color, Color::CLEAR);
        }
        other => panic!("expected category, got {other:?}"),
    }
}

#[test]
fn selected_color_override_shows_up_in_render() {
    let menu = EmojiCategoryMenu::new(vec![EmojiCategory::Smileys], EmojiCategory::Smileys)
        .with_selected_color(Color::WHITE);
    match &menu.render()[1] {
        MenuElement::Category {
            background_color, ..
        } => assert_eq!(*background_color, Color::WHITE),
        other => panic!("expected category, got {other:?}"),
    }
}
