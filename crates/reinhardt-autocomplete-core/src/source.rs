//! Choice source capability traits
//!
//! A choice source is a lazy, queryset-like collection. Every operation
//! consumes the source and returns a narrowed one; nothing is evaluated until
//! [`EvaluateChoices::evaluate`] is called (for sources that can evaluate
//! in-process) or the source is rendered by its backend.

use crate::condition::SearchCondition;
use crate::error::AutocompleteResult;
use serde_json::Value;
use std::fmt;

/// A record that can be offered as an autocomplete choice
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::Choice;
/// use serde_json::{Value, json};
///
/// struct City {
///     id: i64,
///     name: String,
/// }
///
/// impl Choice for City {
///     fn choice_value(&self) -> Value {
///         json!(self.id)
///     }
///
///     fn choice_label(&self) -> String {
///         self.name.clone()
///     }
///
///     fn field_value(&self, name: &str) -> Option<Value> {
///         match name {
///             "id" => Some(json!(self.id)),
///             "name" => Some(json!(self.name)),
///             _ => None,
///         }
///     }
/// }
///
/// let city = City { id: 3, name: "Lyon".to_string() };
/// assert_eq!(city.choice_value(), json!(3));
/// assert_eq!(city.choice_label(), "Lyon");
/// ```
pub trait Choice {
	/// Identifier submitted by the widget, usually the primary key
	fn choice_value(&self) -> Value;

	/// Human-readable label
	fn choice_label(&self) -> String;

	/// Field accessor used for matching and ordering
	fn field_value(&self, name: &str) -> Option<Value>;
}

/// Ordering on a single field, `-` prefixed for descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingField {
	pub field: String,
	pub descending: bool,
}

impl OrderingField {
	/// Parse `"name"` or `"-name"`
	pub fn parse(spec: &str) -> Self {
		match spec.strip_prefix('-') {
			Some(field) => Self {
				field: field.to_string(),
				descending: true,
			},
			None => Self {
				field: spec.to_string(),
				descending: false,
			},
		}
	}

	pub fn asc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			descending: false,
		}
	}

	pub fn desc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			descending: true,
		}
	}
}

impl fmt::Display for OrderingField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.descending {
			write!(f, "-{}", self.field)
		} else {
			f.write_str(&self.field)
		}
	}
}

/// Capabilities an autocomplete needs from its backing collection
pub trait ChoiceSource: Sized {
	/// Keep records matching `condition`
	fn filter(self, condition: SearchCondition) -> Self;

	/// Keep records whose identifier is one of `values`
	fn filter_pk_in(self, values: &[Value]) -> Self;

	/// Drop records whose identifier is one of `values`
	fn exclude_pk_in(self, values: &[Value]) -> Self;

	/// Replace the ordering
	fn order_by(self, fields: &[OrderingField]) -> Self;

	/// Keep at most `limit` records
	fn slice(self, limit: usize) -> Self;
}

/// Sources that can produce their records in-process
pub trait EvaluateChoices: ChoiceSource {
	type Record: Choice;

	fn evaluate(&self) -> AutocompleteResult<Vec<Self::Record>>;
}

/// String form of an identifier or field value
///
/// Strings are returned as-is, so `"1"` and `1` share the form `1`.
/// `null` has no string form.
pub fn value_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		other => Some(other.to_string()),
	}
}

/// Whether two identifiers denote the same choice, comparing both the
/// native and the string form
pub fn same_choice(a: &Value, b: &Value) -> bool {
	if a == b {
		return true;
	}
	match (value_to_string(a), value_to_string(b)) {
		(Some(a), Some(b)) => a == b,
		_ => false,
	}
}
