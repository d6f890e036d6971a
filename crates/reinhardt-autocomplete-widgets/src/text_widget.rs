//! Text input bound to an autocomplete

use crate::widget::{Attrs, Widget, value_to_text};
use serde_json::Value;

/// CSS class the client-side script binds to
pub const TEXT_WIDGET_CLASS: &str = "autocomplete-light-text-widget";

/// Text input that asks an autocomplete for suggestions as the user types
///
/// The autocomplete is identified by name; its URL defaults to
/// `/autocomplete/<name>/`. Options for the client-side widget and
/// autocomplete are rendered as `data-widget-*` and `data-autocomplete-*`
/// attributes.
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_widgets::{Attrs, TextWidget, Widget};
/// use serde_json::json;
///
/// let widget = TextWidget::new("CityAutocomplete").with_autocomplete_attr("minimum-characters", "2");
/// let html = widget.render("city", Some(&json!("Paris")), &Attrs::new());
///
/// assert!(html.starts_with(r#"<input type="text" name="city" value="Paris""#));
/// assert!(html.contains(r#"data-autocomplete-url="/autocomplete/CityAutocomplete/""#));
/// assert!(html.contains(r#"data-autocomplete-minimum-characters="2""#));
/// ```
#[derive(Debug, Clone)]
pub struct TextWidget {
	autocomplete: String,
	url: Option<String>,
	widget_bootstrap: String,
	widget_attrs: Attrs,
	autocomplete_attrs: Attrs,
	attrs: Attrs,
}

impl TextWidget {
	pub fn new(autocomplete: impl Into<String>) -> Self {
		Self {
			autocomplete: autocomplete.into(),
			url: None,
			widget_bootstrap: "text".to_string(),
			widget_attrs: Attrs::new(),
			autocomplete_attrs: Attrs::new(),
			attrs: Attrs::new(),
		}
	}

	/// Override the URL suggestions are fetched from
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}

	/// Name of the client-side bootstrap routine
	pub fn with_widget_bootstrap(mut self, bootstrap: impl Into<String>) -> Self {
		self.widget_bootstrap = bootstrap.into();
		self
	}

	/// Option for the client-side widget, rendered as `data-widget-<key>`
	pub fn with_widget_attr(mut self, key: &str, value: impl Into<String>) -> Self {
		self.widget_attrs.set(format!("data-widget-{}", key), value);
		self
	}

	/// Option for the client-side autocomplete, rendered as
	/// `data-autocomplete-<key>`
	pub fn with_autocomplete_attr(mut self, key: &str, value: impl Into<String>) -> Self {
		self.autocomplete_attrs
			.set(format!("data-autocomplete-{}", key), value);
		self
	}

	/// Attribute rendered on every call, before per-call attributes
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.set(key, value);
		self
	}

	pub fn autocomplete(&self) -> &str {
		&self.autocomplete
	}

	pub fn url(&self) -> String {
		self.url
			.clone()
			.unwrap_or_else(|| format!("/autocomplete/{}/", self.autocomplete))
	}

	/// Every attribute of the input except `type`, `name` and `value`
	///
	/// A `class` passed by the caller is appended to the widget class.
	pub fn build_attrs(&self, extra: &Attrs) -> Attrs {
		let mut attrs = Attrs::new()
			.with("class", TEXT_WIDGET_CLASS)
			.with("data-autocomplete-url", self.url())
			.with("data-widget-bootstrap", self.widget_bootstrap.as_str());
		attrs.merge(&self.autocomplete_attrs);
		attrs.merge(&self.widget_attrs);

		let mut classes = vec![TEXT_WIDGET_CLASS.to_string()];
		for source in [&self.attrs, extra] {
			for (key, value) in source.iter() {
				if key == "class" {
					classes.push(value.to_string());
				} else {
					attrs.set(key, value);
				}
			}
		}
		attrs.set("class", classes.join(" "));
		attrs
	}
}

impl Widget for TextWidget {
	fn render(&self, name: &str, value: Option<&Value>, attrs: &Attrs) -> String {
		let text = value_to_text(value);
		tracing::trace!(name, autocomplete = %self.autocomplete, "rendering text widget");

		format!(
			r#"<input type="text" name="{}" value="{}"{} />"#,
			html_escape::encode_double_quoted_attribute(name),
			html_escape::encode_double_quoted_attribute(&text),
			self.build_attrs(attrs).render()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_render_without_value() {
		let widget = TextWidget::new("TagAutocomplete");

		let html = widget.render("tags", None, &Attrs::new());

		assert_eq!(
			html,
			r#"<input type="text" name="tags" value="" class="autocomplete-light-text-widget" data-autocomplete-url="/autocomplete/TagAutocomplete/" data-widget-bootstrap="text" />"#
		);
	}

	#[rstest]
	fn test_caller_class_is_appended() {
		let widget = TextWidget::new("A").with_attr("class", "wide");

		let attrs = widget.build_attrs(&Attrs::new().with("class", "form-control"));

		assert_eq!(
			attrs.get("class"),
			Some("autocomplete-light-text-widget wide form-control")
		);
	}

	#[rstest]
	fn test_custom_url_and_bootstrap() {
		let widget = TextWidget::new("A")
			.with_url("/api/complete/a")
			.with_widget_bootstrap("tags")
			.with_widget_attr("max-values", "3");

		let attrs = widget.build_attrs(&Attrs::new());

		assert_eq!(attrs.get("data-autocomplete-url"), Some("/api/complete/a"));
		assert_eq!(attrs.get("data-widget-bootstrap"), Some("tags"));
		assert_eq!(attrs.get("data-widget-max-values"), Some("3"));
	}

	#[rstest]
	fn test_value_is_escaped() {
		let widget = TextWidget::new("A");

		let html = widget.render("q", Some(&json!("\"><script>")), &Attrs::new());

		assert!(!html.contains("<script>"));
		assert!(html.contains("value=\"&quot;"));
	}
}
