use keybar_core::Suggestion;

/// One suggestion wrapped for ordered rendering.
///
/// Identity is the position in the input sequence. A render pass
/// recomputes identities from the current list, so an index is only
/// meaningful until the next `set_suggestions`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub index: usize,
    pub suggestion: Suggestion,
}

impl BarItem {
    pub(crate) fn wrap(suggestions: Vec<Suggestion>) -> Vec<BarItem> {
        suggestions
            .into_iter()
            .enumerate()
            .map(|(index, suggestion)| BarItem { index, suggestion })
            .collect()
    }
}
