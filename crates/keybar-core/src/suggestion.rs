//! Text-completion candidates shown in the suggestion bar.

/// A single text-completion candidate.
///
/// `text` is what gets inserted into the host text surface when the
/// suggestion is applied; `title` is what the bar displays and defaults
/// to `text`. The flags drive layout and styling: an autocomplete
/// acceptance is never separated from its neighbors and is rendered
/// emphasized, an unknown word is rendered quoted.
///
/// Suggestions are constructed fresh for every update cycle and replaced
/// wholesale; the bar never mutates them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text inserted into the host surface on tap.
    pub text: String,
    /// Display text. Same as `text` unless set explicitly.
    pub title: String,
    /// Optional secondary line below the title.
    pub subtitle: Option<String>,
    /// True when this candidate accepts the system's predicted completion.
    pub is_autocomplete: bool,
    /// True when this candidate is an unrecognized/raw word.
    pub is_unknown: bool,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            title: text.clone(),
            text,
            subtitle: None,
            is_autocomplete: false,
            is_unknown: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Mark this candidate as the autocomplete acceptance.
    pub fn autocomplete(mut self) -> Self {
        self.is_autocomplete = true;
        self
    }

    /// Mark this candidate as an unrecognized word.
    pub fn unknown(mut self) -> Self {
        self.is_unknown = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_defaults_to_text() {
        let s = Suggestion::new("kyou");
        assert_eq!(s.title, "kyou");
        assert_eq!(s.text, "kyou");
        assert!(s.subtitle.is_none());
        assert!(!s.is_autocomplete);
        assert!(!s.is_unknown);
    }

    #[test]
    fn builders_set_flags_and_display_fields() {
        let s = Suggestion::new("")
            .with_title("Foo")
            .with_subtitle("Recommended");
        assert_eq!(s.text, "");
        assert_eq!(s.title, "Foo");
        assert_eq!(s.subtitle.as_deref(), Some("Recommended"));

        let s = Suggestion::new("Bar").autocomplete();
        assert!(s.is_autocomplete);

        let s = Suggestion::new("Baz").unknown();
        assert!(s.is_unknown);
    }
}
