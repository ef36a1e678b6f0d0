//! Parse suggestion lists from JSON and render composed bars as terminal
//! text or as a JSON render model.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use keybar_core::Suggestion;
use keybar_view::{standard_item, standard_separator, BarElement, BarVisual, SuggestionBar};

/// JSON input record for one suggestion.
#[derive(Debug, Deserialize)]
pub struct SuggestionSpec {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub autocomplete: bool,
    #[serde(default)]
    pub unknown: bool,
}

impl From<SuggestionSpec> for Suggestion {
    fn from(spec: SuggestionSpec) -> Self {
        let mut s = Suggestion::new(spec.text);
        if let Some(title) = spec.title {
            s = s.with_title(title);
        }
        if let Some(subtitle) = spec.subtitle {
            s = s.with_subtitle(subtitle);
        }
        if spec.autocomplete {
            s = s.autocomplete();
        }
        if spec.unknown {
            s = s.unknown();
        }
        s
    }
}

/// Parse a JSON array of suggestion specs.
pub fn parse_suggestions(json: &str) -> Result<Vec<Suggestion>, serde_json::Error> {
    let specs: Vec<SuggestionSpec> = serde_json::from_str(json)?;
    Ok(specs.into_iter().map(Into::into).collect())
}

/// A bar with the standard builders and a no-op replacement action; the
/// CLI has no host surface to commit into.
pub fn standard_preview_bar(suggestions: Vec<Suggestion>) -> SuggestionBar<BarVisual> {
    SuggestionBar::with_builders(
        suggestions,
        Box::new(standard_item),
        Box::new(standard_separator),
        Box::new(|_| {}),
    )
}

/// Render the element sequence as one terminal line. Cells are padded to
/// the widest cell by display columns, emphasized items are bracketed,
/// and placed separators render as `│`.
pub fn format_line(elements: &[BarElement<BarVisual>]) -> String {
    let cells: Vec<(String, bool, bool)> = elements
        .iter()
        .map(|element| {
            let (text, emphasized) = match &element.content {
                BarVisual::Item(item) => (
                    match &item.subtitle {
                        Some(subtitle) => format!("{} · {}", item.title, subtitle),
                        None => item.title.clone(),
                    },
                    item.emphasized,
                ),
                BarVisual::Separator(_) => unreachable!("standard item builder emits items"),
            };
            (text, emphasized, element.separator.is_some())
        })
        .collect();

    let widest = cells.iter().map(|(text, _, _)| text.width()).max().unwrap_or(0);

    let mut line = String::new();
    for (text, emphasized, separated) in &cells {
        let padded = pad_center(text, widest);
        if *emphasized {
            line.push('[');
            line.push_str(&padded);
            line.push(']');
        } else {
            line.push(' ');
            line.push_str(&padded);
            line.push(' ');
        }
        if *separated {
            line.push('│');
        }
    }
    line
}

fn pad_center(text: &str, target: usize) -> String {
    let slack = target.saturating_sub(text.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
}

/// JSON shape of one rendered element.
#[derive(Debug, Serialize)]
pub struct RenderedElement {
    pub id: usize,
    pub item: RenderedItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<RenderedSeparator>,
}

#[derive(Debug, Serialize)]
pub struct RenderedItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub emphasized: bool,
    pub width_hint: usize,
}

#[derive(Debug, Serialize)]
pub struct RenderedSeparator {
    pub width: f32,
    pub height: f32,
    pub color: String,
}

/// Project the default render model into its JSON shape.
pub fn render_model(elements: &[BarElement<BarVisual>]) -> Vec<RenderedElement> {
    elements
        .iter()
        .map(|element| {
            let item = match &element.content {
                BarVisual::Item(item) => RenderedItem {
                    title: item.title.clone(),
                    subtitle: item.subtitle.clone(),
                    emphasized: item.emphasized,
                    width_hint: item.width_hint,
                },
                BarVisual::Separator(_) => unreachable!("standard item builder emits items"),
            };
            let separator = element.separator.as_ref().map(|visual| match visual {
                BarVisual::Separator(sep) => RenderedSeparator {
                    width: sep.width,
                    height: sep.height,
                    color: sep.color.to_hex(),
                },
                BarVisual::Item(_) => unreachable!("standard separator builder emits separators"),
            });
            RenderedElement {
                id: element.id,
                item,
                separator,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREVIEW_JSON: &str = r#"[
        {"text": "Baz", "unknown": true},
        {"text": "Bar", "autocomplete": true},
        {"text": "", "title": "Foo", "subtitle": "Recommended"}
    ]"#;

    #[test]
    fn spec_title_defaults_to_text() {
        let suggestions = parse_suggestions(r#"[{"text": "kyou"}]"#).unwrap();
        assert_eq!(suggestions[0].title, "kyou");
        assert_eq!(suggestions[0].text, "kyou");
        assert!(!suggestions[0].is_autocomplete);
    }

    #[test]
    fn spec_flags_and_display_fields_carry_over() {
        let suggestions = parse_suggestions(PREVIEW_JSON).unwrap();
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].is_unknown);
        assert!(suggestions[1].is_autocomplete);
        assert_eq!(suggestions[2].title, "Foo");
        assert_eq!(suggestions[2].subtitle.as_deref(), Some("Recommended"));
    }

    #[test]
    fn plain_items_get_two_separators() {
        let suggestions = parse_suggestions(
            r#"[{"text": "A"}, {"text": "B"}, {"text": "C"}]"#,
        )
        .unwrap();
        let line = format_line(&standard_preview_bar(suggestions).render());
        assert_eq!(line.matches('│').count(), 2);
        assert_eq!(line, " A │ B │ C ");
    }

    #[test]
    fn autocomplete_suppresses_separators_and_brackets_the_item() {
        let suggestions = parse_suggestions(PREVIEW_JSON).unwrap();
        let line = format_line(&standard_preview_bar(suggestions).render());
        assert_eq!(line.matches('│').count(), 0);
        assert!(line.contains('['));
    }

    #[test]
    fn cells_are_padded_to_the_widest_cell() {
        let suggestions =
            parse_suggestions(r#"[{"text": "A"}, {"text": "今日"}]"#).unwrap();
        let line = format_line(&standard_preview_bar(suggestions).render());
        // "A" padded to the 4-column width of "今日"
        assert_eq!(line, "  A   │ 今日 ");
    }

    #[test]
    fn render_model_mirrors_elements() {
        let suggestions = parse_suggestions(PREVIEW_JSON).unwrap();
        let model = render_model(&standard_preview_bar(suggestions).render());
        assert_eq!(model.len(), 3);
        assert_eq!(model[0].id, 0);
        assert!(model.iter().all(|e| e.separator.is_none()));
        assert!(model[1].item.emphasized);
        assert_eq!(model[2].item.subtitle.as_deref(), Some("Recommended"));
    }

    #[test]
    fn style_files_load_and_validate_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");

        std::fs::write(&path, keybar_core::style::default_toml()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let sheet = keybar_core::style::parse_style_toml(&content).unwrap();
        assert_eq!(sheet.toolbar.separator_height, 30.0);

        std::fs::write(&path, "not valid toml {{{").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(keybar_core::style::parse_style_toml(&content).is_err());
    }
}
