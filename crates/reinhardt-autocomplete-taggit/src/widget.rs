//! Tag widget
//!
//! Renders the value of a tag field as an edit string inside an autocomplete
//! text input. Bound values may be raw text, tags, tag ids or tagged items;
//! ids are resolved to tags through a [`TagLookup`]. Tagged items carry their
//! tag and are rendered from it directly.

use crate::error::{TaggitError, TaggitResult};
use crate::parser::{TagParser, TaggitTagParser};
use crate::tag::{Tag, TaggedItem};
use reinhardt_autocomplete_core::{AutocompleteModel, EvaluateChoices};
use reinhardt_autocomplete_widgets::{Attrs, TextWidget, Widget};
use serde_json::{Value, json};

/// Value bound to a tag field
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
	/// Edit string typed by the user, rendered unchanged
	Text(String),
	/// Tag names
	Names(Vec<String>),
	/// Tag records
	Tags(Vec<Tag>),
	/// Tag primary keys
	TagIds(Vec<i64>),
	/// Tags applied to an object
	TaggedItems(Vec<TaggedItem>),
}

impl TagValue {
	/// Interpret a bound JSON value
	///
	/// Strings are text; arrays hold ids, names, tagged items or tags.
	pub fn from_value(value: &Value) -> TaggitResult<Self> {
		match value {
			Value::Null => Ok(Self::Text(String::new())),
			Value::String(text) => Ok(Self::Text(text.clone())),
			Value::Array(items) if items.iter().all(Value::is_i64) => Ok(Self::TagIds(
				items.iter().filter_map(Value::as_i64).collect(),
			)),
			Value::Array(items) if items.iter().all(Value::is_string) => Ok(Self::Names(
				items
					.iter()
					.filter_map(Value::as_str)
					.map(str::to_string)
					.collect(),
			)),
			Value::Array(_) => {
				if let Ok(items) = serde_json::from_value::<Vec<TaggedItem>>(value.clone()) {
					return Ok(Self::TaggedItems(items));
				}
				serde_json::from_value::<Vec<Tag>>(value.clone())
					.map(Self::Tags)
					.map_err(|_| TaggitError::invalid_tag_list())
			}
			_ => Err(TaggitError::invalid_tag_list()),
		}
	}
}

/// Resolves tag ids to tags
pub trait TagLookup: Send + Sync {
	fn tags_by_ids(&self, ids: &[i64]) -> TaggitResult<Vec<Tag>>;
}

impl<S> TagLookup for AutocompleteModel<S>
where
	S: EvaluateChoices<Record = Tag> + Clone + Send + Sync,
{
	fn tags_by_ids(&self, ids: &[i64]) -> TaggitResult<Vec<Tag>> {
		let tags = self
			.clone()
			.with_values(ids.iter().map(|id| json!(id)))
			.choices_for_values()?
			.evaluate()?;
		Ok(tags)
	}
}

/// Autocomplete text input holding a tag edit string
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{AutocompleteConfig, AutocompleteModel, MemoryQuerySet};
/// use reinhardt_autocomplete_taggit::{Tag, TagValue, TagWidget};
///
/// let tags = AutocompleteModel::new(AutocompleteConfig::new().with_search_fields(["name"]))
///     .with_choices(MemoryQuerySet::new(vec![
///         Tag::from_name("rust").with_id(1),
///         Tag::from_name("web development").with_id(2),
///     ]));
/// let widget = TagWidget::new("TagAutocomplete", tags);
///
/// let text = widget.format_value(&TagValue::TagIds(vec![2, 1])).unwrap();
/// assert_eq!(text, r#""web development", rust"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagWidget<L, P = TaggitTagParser> {
	text_widget: TextWidget,
	lookup: L,
	parser: P,
}

impl<L: TagLookup> TagWidget<L> {
	pub fn new(autocomplete: impl Into<String>, lookup: L) -> Self {
		Self {
			text_widget: TextWidget::new(autocomplete),
			lookup,
			parser: TaggitTagParser,
		}
	}
}

impl<L: TagLookup, P: TagParser> TagWidget<L, P> {
	/// Use another strategy for rendering edit strings
	pub fn with_parser<Q: TagParser>(self, parser: Q) -> TagWidget<L, Q> {
		TagWidget {
			text_widget: self.text_widget,
			lookup: self.lookup,
			parser,
		}
	}

	/// Replace the underlying text input
	pub fn with_text_widget(mut self, text_widget: TextWidget) -> Self {
		self.text_widget = text_widget;
		self
	}

	pub fn text_widget(&self) -> &TextWidget {
		&self.text_widget
	}

	pub fn parser(&self) -> &P {
		&self.parser
	}

	/// Edit string for a bound value
	pub fn format_value(&self, value: &TagValue) -> TaggitResult<String> {
		let names: Vec<String> = match value {
			TagValue::Text(text) => return Ok(text.clone()),
			TagValue::Names(names) => names.clone(),
			TagValue::Tags(tags) => tags.iter().map(|tag| tag.name.clone()).collect(),
			TagValue::TagIds(ids) => self.names_for_ids(ids)?,
			TagValue::TaggedItems(items) => items.iter().map(|item| item.tag.name.clone()).collect(),
		};
		Ok(self.parser.edit_string(&names))
	}

	/// Render a bound value, resolving ids through the lookup
	pub fn render_value(&self, name: &str, value: &TagValue, attrs: &Attrs) -> TaggitResult<String> {
		let text = self.format_value(value)?;
		Ok(self.text_widget.render(name, Some(&Value::String(text)), attrs))
	}

	fn names_for_ids(&self, ids: &[i64]) -> TaggitResult<Vec<String>> {
		let tags = self.lookup.tags_by_ids(ids)?;
		tracing::trace!(requested = ids.len(), found = tags.len(), "resolved tag ids");
		Ok(tags.into_iter().map(|tag| tag.name).collect())
	}
}

impl<L: TagLookup, P: TagParser> Widget for TagWidget<L, P> {
	fn render(&self, name: &str, value: Option<&Value>, attrs: &Attrs) -> String {
		let bound = match value {
			Some(value) => TagValue::from_value(value),
			None => Ok(TagValue::Text(String::new())),
		};

		match bound.and_then(|bound| self.render_value(name, &bound, attrs)) {
			Ok(html) => html,
			Err(error) => {
				// the raw value may hold ids, which would be saved back as tag names
				tracing::warn!(name, %error, "could not render tags, rendering empty value");
				self.text_widget.render(name, None, attrs)
			}
		}
	}
}
