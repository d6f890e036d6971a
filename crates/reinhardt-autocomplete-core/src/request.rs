//! Autocomplete request parameters
//!
//! An autocomplete request carries the free-text query `q` and any number of
//! `exclude` identifiers for choices the widget has already selected.

use crate::error::{AutocompleteError, AutocompleteResult};
use serde_json::Value;

/// Query parameters of an autocomplete request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteRequest {
	pub q: String,
	pub exclude: Vec<String>,
}

impl AutocompleteRequest {
	pub fn new(q: impl Into<String>) -> Self {
		Self {
			q: q.into(),
			exclude: Vec::new(),
		}
	}

	pub fn with_exclude<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.exclude = ids.into_iter().map(Into::into).collect();
		self
	}

	/// Decode `q` and repeated `exclude` parameters
	///
	/// The last `q` wins; empty `exclude` values are skipped; other
	/// parameters are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_autocomplete_core::AutocompleteRequest;
	///
	/// let request = AutocompleteRequest::from_query_string("q=ada+love&exclude=3&exclude=7").unwrap();
	/// assert_eq!(request.q, "ada love");
	/// assert_eq!(request.exclude, vec!["3", "7"]);
	/// ```
	pub fn from_query_string(query: &str) -> AutocompleteResult<Self> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
			.map_err(|e| AutocompleteError::InvalidRequest(e.to_string()))?;

		let mut request = Self::default();
		for (key, value) in pairs {
			match key.as_str() {
				"q" => request.q = value,
				"exclude" if !value.is_empty() => request.exclude.push(value),
				_ => {}
			}
		}
		Ok(request)
	}

	/// Decode the query component of a request URI
	pub fn from_uri(uri: &http::Uri) -> AutocompleteResult<Self> {
		Self::from_query_string(uri.query().unwrap_or(""))
	}

	/// Excluded identifiers as values for [`ChoiceSource::exclude_pk_in`](crate::ChoiceSource::exclude_pk_in)
	pub fn exclude_values(&self) -> Vec<Value> {
		self.exclude.iter().cloned().map(Value::String).collect()
	}
}

impl<B> TryFrom<&http::Request<B>> for AutocompleteRequest {
	type Error = AutocompleteError;

	fn try_from(request: &http::Request<B>) -> AutocompleteResult<Self> {
		Self::from_uri(request.uri())
	}
}
