//! Autocomplete response rendering
//!
//! The client-side script accepts either an HTML fragment of
//! `<span data-value="...">` elements or a JSON list of value/label pairs.

use crate::widget::value_to_text;
use reinhardt_autocomplete_core::ChoiceItem;
use serde_json::Value;

/// Fragment rendered when a request matches nothing
pub const EMPTY_CHOICES_HTML: &str = r#"<span class="block"><em>No matches found</em></span>"#;

/// Render one choice as `<span data-value="value">label</span>`
pub fn choice_html(value: &Value, label: &str) -> String {
	format!(
		r#"<span data-value="{}">{}</span>"#,
		html_escape::encode_double_quoted_attribute(&value_to_text(Some(value))),
		html_escape::encode_text(label)
	)
}

/// Render every choice, or [`EMPTY_CHOICES_HTML`] when there are none
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::ChoiceItem;
/// use reinhardt_autocomplete_widgets::autocomplete_html;
/// use serde_json::json;
///
/// let html = autocomplete_html(&[ChoiceItem::new(json!(1), "Rust"), ChoiceItem::new(json!(2), "Go")]);
/// assert_eq!(html, r#"<span data-value="1">Rust</span><span data-value="2">Go</span>"#);
/// ```
pub fn autocomplete_html(items: &[ChoiceItem]) -> String {
	if items.is_empty() {
		return EMPTY_CHOICES_HTML.to_string();
	}
	items
		.iter()
		.map(|item| choice_html(&item.value, &item.label))
		.collect()
}

/// Serialize choices as `[{"value": ..., "label": ...}]`
pub fn autocomplete_json(items: &[ChoiceItem]) -> serde_json::Result<String> {
	serde_json::to_string(items)
}
