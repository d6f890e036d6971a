//! Widget trait and HTML attributes

use serde_json::Value;

/// Ordered HTML attributes
///
/// Setting an existing key replaces its value in place, so rendering order is
/// the order keys were first set.
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_widgets::Attrs;
///
/// let attrs = Attrs::new()
///     .with("placeholder", "Type a city")
///     .with("data-x", "\"quoted\"");
///
/// assert_eq!(
///     attrs.render(),
///     r#" placeholder="Type a city" data-x="&quot;quoted&quot;""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: Vec<(String, String)>,
}

impl Attrs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`set`](Self::set)
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	/// Copy every entry of `other` over this one
	pub fn merge(&mut self, other: &Attrs) {
		for (key, value) in other.iter() {
			self.set(key, value);
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Render as ` key="value"` pairs with escaped values
	///
	/// Keys are not escaped; a key with characters outside
	/// `[A-Za-z0-9_:.-]` is skipped.
	pub fn render(&self) -> String {
		let mut html = String::new();
		for (key, value) in &self.entries {
			if !is_valid_key(key) {
				tracing::warn!(key = %key, "skipping invalid attribute name");
				continue;
			}
			html.push_str(&format!(
				r#" {}="{}""#,
				key,
				html_escape::encode_double_quoted_attribute(value)
			));
		}
		html
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut attrs = Self::new();
		for (key, value) in iter {
			attrs.set(key, value);
		}
		attrs
	}
}

fn is_valid_key(key: &str) -> bool {
	!key.is_empty()
		&& key
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Base widget trait
pub trait Widget: Send + Sync {
	/// Render the widget as HTML
	fn render(&self, name: &str, value: Option<&Value>, attrs: &Attrs) -> String;
}

/// Text form of a bound value as placed in an input's `value` attribute
///
/// `null` renders empty; arrays render their elements comma-separated.
pub fn value_to_text(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(s)) => s.clone(),
		Some(Value::Array(items)) => items
			.iter()
			.map(|item| value_to_text(Some(item)))
			.collect::<Vec<_>>()
			.join(","),
		Some(other) => other.to_string(),
	}
}
