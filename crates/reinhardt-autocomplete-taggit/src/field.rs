//! Tag form field

use crate::error::{TaggitError, TaggitResult};
use crate::parser::{TagParser, TaggitTagParser, check_lengths};
use crate::widget::{TagLookup, TagWidget};
use serde_json::Value;

/// Form field cleaning tag input into tag names
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_taggit::{TagField, TaggitError};
/// use serde_json::json;
///
/// let field = TagField::new();
/// assert_eq!(field.clean(Some(&json!("rust, web"))).unwrap(), vec!["rust", "web"]);
/// assert!(matches!(field.clean(None), Err(TaggitError::Required)));
///
/// let optional = TagField::new().required(false);
/// assert!(optional.clean(Some(&json!(""))).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TagField<P = TaggitTagParser> {
	parser: P,
	required: bool,
}

impl TagField {
	pub fn new() -> Self {
		Self::with_parser(TaggitTagParser)
	}
}

impl Default for TagField {
	fn default() -> Self {
		Self::new()
	}
}

impl<P: TagParser> TagField<P> {
	pub fn with_parser(parser: P) -> Self {
		Self {
			parser,
			required: true,
		}
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn parser(&self) -> &P {
		&self.parser
	}

	/// Validate submitted data and return tag names
	///
	/// Text is parsed with the field's parser. A list of strings is taken as
	/// tag names. Anything else fails with the comma-separated list message.
	pub fn clean(&self, value: Option<&Value>) -> TaggitResult<Vec<String>> {
		let names = self.to_names(value)?;
		if names.is_empty() && self.required {
			return Err(TaggitError::Required);
		}
		Ok(names)
	}

	fn to_names(&self, value: Option<&Value>) -> TaggitResult<Vec<String>> {
		match value {
			None | Some(Value::Null) => Ok(Vec::new()),
			Some(Value::String(text)) if text.trim().is_empty() => Ok(Vec::new()),
			Some(Value::String(text)) => self.parser.parse(text),
			Some(Value::Array(items)) => {
				let mut names: Vec<String> = Vec::new();
				for item in items {
					let name = item
						.as_str()
						.ok_or_else(TaggitError::invalid_tag_list)?
						.trim();
					if !name.is_empty() && !names.iter().any(|n| n == name) {
						names.push(name.to_string());
					}
				}
				check_lengths(&names)?;
				Ok(names)
			}
			Some(other) => {
				tracing::debug!(value = %other, "rejected tag input");
				Err(TaggitError::invalid_tag_list())
			}
		}
	}

	/// Edit string shown when the field is rendered with `names`
	pub fn prepare_value(&self, names: &[String]) -> String {
		self.parser.edit_string(names)
	}

	/// Whether submitted data differs from the initial tag names
	pub fn has_changed(&self, initial: &[String], data: Option<&Value>) -> bool {
		let Ok(mut submitted) = self.to_names(data) else {
			return true;
		};
		let mut initial = initial.to_vec();
		initial.sort();
		submitted.sort();
		initial != submitted
	}

	/// Widget rendering this field's values with the same parser
	pub fn widget<L: TagLookup>(&self, autocomplete: impl Into<String>, lookup: L) -> TagWidget<L, P>
	where
		P: Clone,
	{
		TagWidget::new(autocomplete, lookup).with_parser(self.parser.clone())
	}
}
