use proptest::prelude::*;

use keybar_core::Suggestion;

use crate::bar::SuggestionBar;
use crate::item::BarItem;
use crate::layout::separator_map;

fn suggestions_from_flags(flags: &[bool]) -> Vec<Suggestion> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &autocomplete)| {
            let s = Suggestion::new(format!("s{i}"));
            if autocomplete {
                s.autocomplete()
            } else {
                s
            }
        })
        .collect()
}

proptest! {
    // The four layout rules are mutually exclusive and total: a separator
    // follows item i exactly when i is not autocomplete, not last, and
    // not followed by an autocomplete.
    #[test]
    fn separator_rules_are_total(flags in proptest::collection::vec(any::<bool>(), 0..12)) {
        let items = BarItem::wrap(suggestions_from_flags(&flags));
        let map = separator_map(&items);
        prop_assert_eq!(map.len(), flags.len());
        for i in 0..flags.len() {
            let expected = !flags[i] && i + 1 < flags.len() && !flags[i + 1];
            prop_assert_eq!(map[i], expected, "index {}", i);
        }
    }

    #[test]
    fn render_emits_one_element_per_suggestion(flags in proptest::collection::vec(any::<bool>(), 0..12)) {
        let bar = SuggestionBar::with_builders(
            suggestions_from_flags(&flags),
            Box::new(|s: &Suggestion| s.title.clone()),
            Box::new(|_| String::new()),
            Box::new(|_| {}),
        );
        let elements = bar.render();
        prop_assert_eq!(elements.len(), flags.len());
        for (i, element) in elements.iter().enumerate() {
            prop_assert_eq!(element.id, i);
        }
    }
}
