//! Autocomplete configuration
//!
//! Configuration can be assembled with the builder methods or loaded from
//! TOML:
//!
//! ```toml
//! limit_choices = 10
//! search_fields = ["^name", "=slug", "description"]
//! split_words = "or"
//! order_by = ["-created_at", "name"]
//! ```

use crate::error::{AutocompleteError, AutocompleteResult};
use crate::lookup::SearchField;
use crate::source::OrderingField;
use serde::{Deserialize, Serialize};

/// Default maximum number of choices returned for a request
pub const DEFAULT_LIMIT_CHOICES: usize = 20;

/// How multi-word queries are combined
///
/// Serialized as `false`, `true` or `"or"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SplitWordsRepr", into = "SplitWordsRepr")]
pub enum SplitWords {
	/// Match the whole query against each field
	#[default]
	Disabled,
	/// Every word must match at least one field
	And,
	/// Any word matching any field suffices
	Or,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SplitWordsRepr {
	Flag(bool),
	Mode(String),
}

impl TryFrom<SplitWordsRepr> for SplitWords {
	type Error = String;

	fn try_from(repr: SplitWordsRepr) -> Result<Self, Self::Error> {
		match repr {
			SplitWordsRepr::Flag(false) => Ok(Self::Disabled),
			SplitWordsRepr::Flag(true) => Ok(Self::And),
			SplitWordsRepr::Mode(mode) if mode.eq_ignore_ascii_case("or") => Ok(Self::Or),
			SplitWordsRepr::Mode(mode) if mode.eq_ignore_ascii_case("and") => Ok(Self::And),
			SplitWordsRepr::Mode(mode) => Err(format!(
				"split_words must be a boolean or \"or\", got \"{}\"",
				mode
			)),
		}
	}
}

impl From<SplitWords> for SplitWordsRepr {
	fn from(split: SplitWords) -> Self {
		match split {
			SplitWords::Disabled => Self::Flag(false),
			SplitWords::And => Self::Flag(true),
			SplitWords::Or => Self::Mode("or".to_string()),
		}
	}
}

impl From<bool> for SplitWords {
	fn from(flag: bool) -> Self {
		if flag { Self::And } else { Self::Disabled }
	}
}

/// Ordering applied to choices: a single field name or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderBy {
	One(String),
	Many(Vec<String>),
}

impl OrderBy {
	pub fn fields(&self) -> Vec<OrderingField> {
		match self {
			Self::One(field) => vec![OrderingField::parse(field)],
			Self::Many(fields) => fields.iter().map(|f| OrderingField::parse(f)).collect(),
		}
	}
}

impl From<&str> for OrderBy {
	fn from(field: &str) -> Self {
		Self::One(field.to_string())
	}
}

impl From<Vec<&str>> for OrderBy {
	fn from(fields: Vec<&str>) -> Self {
		Self::Many(fields.into_iter().map(str::to_string).collect())
	}
}

/// Per-autocomplete options
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{AutocompleteConfig, SplitWords};
///
/// let config = AutocompleteConfig::from_toml_str(r#"
///     search_fields = ["^name", "email"]
///     split_words = "or"
/// "#).unwrap();
///
/// assert_eq!(config.limit_choices, 20);
/// assert_eq!(config.split_words, SplitWords::Or);
/// assert_eq!(config.search_fields, vec!["^name", "email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
	pub limit_choices: usize,
	pub search_fields: Vec<String>,
	pub split_words: SplitWords,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_by: Option<OrderBy>,
}

impl Default for AutocompleteConfig {
	fn default() -> Self {
		Self {
			limit_choices: DEFAULT_LIMIT_CHOICES,
			search_fields: Vec::new(),
			split_words: SplitWords::Disabled,
			order_by: None,
		}
	}
}

impl AutocompleteConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse and validate a TOML document
	pub fn from_toml_str(source: &str) -> AutocompleteResult<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn with_limit_choices(mut self, limit: usize) -> Self {
		self.limit_choices = limit;
		self
	}

	pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.search_fields = fields.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_split_words(mut self, split_words: impl Into<SplitWords>) -> Self {
		self.split_words = split_words.into();
		self
	}

	pub fn with_order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
		self.order_by = Some(order_by.into());
		self
	}

	/// Parsed ordering, empty when unset
	pub fn ordering(&self) -> Vec<OrderingField> {
		self.order_by.as_ref().map(OrderBy::fields).unwrap_or_default()
	}

	/// Check the options for mistakes that would only surface per request
	pub fn validate(&self) -> AutocompleteResult<()> {
		if self.limit_choices == 0 {
			return Err(AutocompleteError::Configuration(
				"limit_choices must be greater than zero".to_string(),
			));
		}
		for spec in &self.search_fields {
			spec.parse::<SearchField>()?;
		}
		for field in self.ordering() {
			if field.field.is_empty() {
				return Err(AutocompleteError::Configuration(
					"order_by contains an empty field name".to_string(),
				));
			}
		}
		Ok(())
	}
}
