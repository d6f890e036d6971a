//! Search field specifiers and match lookups
//!
//! A search field specifier is a field name optionally prefixed with a
//! character selecting how the query is matched against it:
//!
//! | Prefix | Match kind |
//! |---|---|
//! | `^` | starts-with, case-insensitive |
//! | `=` | exact, case-insensitive |
//! | `@` | full-text search |
//! | (none) | contains, case-insensitive |

use crate::error::{AutocompleteError, AutocompleteResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a query string is matched against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
	/// Case-insensitive prefix match (`^field`)
	IStartsWith,
	/// Case-insensitive equality (`=field`)
	IExact,
	/// Full-text search (`@field`)
	Search,
	/// Case-insensitive substring match (unprefixed)
	IContains,
}

impl MatchKind {
	/// Resolve a specifier prefix character
	pub fn from_prefix(prefix: char) -> Option<Self> {
		match prefix {
			'^' => Some(Self::IStartsWith),
			'=' => Some(Self::IExact),
			'@' => Some(Self::Search),
			_ => None,
		}
	}

	/// Prefix character selecting this kind, if any
	pub fn prefix(&self) -> Option<char> {
		match self {
			Self::IStartsWith => Some('^'),
			Self::IExact => Some('='),
			Self::Search => Some('@'),
			Self::IContains => None,
		}
	}

	/// Lookup suffix as used in `field__lookup` notation
	pub fn lookup_name(&self) -> &'static str {
		match self {
			Self::IStartsWith => "istartswith",
			Self::IExact => "iexact",
			Self::Search => "search",
			Self::IContains => "icontains",
		}
	}
}

/// A parsed search field specifier
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{MatchKind, SearchField};
///
/// let field = SearchField::parse("^name");
/// assert_eq!(field.kind, MatchKind::IStartsWith);
/// assert_eq!(field.field, "name");
/// assert_eq!(field.to_string(), "name__istartswith");
///
/// let field = SearchField::parse("email");
/// assert_eq!(field.kind, MatchKind::IContains);
/// assert_eq!(field.field, "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchField {
	pub kind: MatchKind,
	pub field: String,
}

impl SearchField {
	pub fn new(field: impl Into<String>, kind: MatchKind) -> Self {
		Self {
			field: field.into(),
			kind,
		}
	}

	/// Parse a specifier, never failing
	///
	/// Only the first character is inspected; the remainder is taken as the
	/// field name unchanged.
	pub fn parse(spec: &str) -> Self {
		let mut chars = spec.chars();
		match chars.next().and_then(MatchKind::from_prefix) {
			Some(kind) => Self::new(chars.as_str(), kind),
			None => Self::new(spec, MatchKind::IContains),
		}
	}

	/// Build a lookup matching `value` against this field
	pub fn lookup(&self, value: impl Into<String>) -> Lookup {
		Lookup {
			field: self.field.clone(),
			kind: self.kind,
			value: value.into(),
		}
	}

	/// The specifier string this field was parsed from
	pub fn specifier(&self) -> String {
		match self.kind.prefix() {
			Some(prefix) => format!("{}{}", prefix, self.field),
			None => self.field.clone(),
		}
	}
}

impl FromStr for SearchField {
	type Err = AutocompleteError;

	/// Strict parsing used for configuration: the field name must be
	/// non-empty and made of identifier characters or `.`.
	fn from_str(spec: &str) -> AutocompleteResult<Self> {
		let field = Self::parse(spec);
		if field.field.is_empty() {
			return Err(AutocompleteError::InvalidSearchField(format!(
				"'{}' has no field name",
				spec
			)));
		}
		if !field
			.field
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
		{
			return Err(AutocompleteError::InvalidSearchField(format!(
				"'{}' contains characters outside [A-Za-z0-9_.]",
				spec
			)));
		}
		Ok(field)
	}
}

impl fmt::Display for SearchField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}__{}", self.field, self.kind.lookup_name())
	}
}

/// A single match predicate: `field <kind> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
	pub field: String,
	pub kind: MatchKind,
	pub value: String,
}

impl fmt::Display for Lookup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}__{}={:?}",
			self.field,
			self.kind.lookup_name(),
			self.value
		)
	}
}
