//! Model-backed autocomplete
//!
//! `AutocompleteModel` considers its choices as a queryset. It narrows the
//! queryset to the selected values when a form is rendered, and to the
//! records matching the typed query when the widget asks for suggestions.

use crate::condition::SearchCondition;
use crate::config::{AutocompleteConfig, SplitWords};
use crate::error::{AutocompleteError, AutocompleteResult};
use crate::lookup::SearchField;
use crate::request::AutocompleteRequest;
use crate::source::{Choice, ChoiceSource, EvaluateChoices, same_choice};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rendered choice: identifier plus display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceItem {
	pub value: Value,
	pub label: String,
}

impl ChoiceItem {
	pub fn new(value: Value, label: impl Into<String>) -> Self {
		Self {
			value,
			label: label.into(),
		}
	}

	pub fn from_choice<C: Choice>(choice: &C) -> Self {
		Self::new(choice.choice_value(), choice.choice_label())
	}
}

/// Autocomplete which considers choices as a queryset
///
/// - `choices`: the queryset, required before any filtering
/// - `limit_choices`: maximum number of choices returned for a request
/// - `search_fields`: fields to search in, prefixed with `^`, `=` or `@` to
///   change the match kind
/// - `split_words`: split the query into words and require every word
///   ([`SplitWords::And`]) or any word ([`SplitWords::Or`]) to match at
///   least one search field
/// - `order_by`: ordering applied to choices, one field or a list
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{
///     AutocompleteConfig, AutocompleteModel, AutocompleteRequest, Choice,
///     EvaluateChoices, MemoryQuerySet,
/// };
/// use serde_json::{Value, json};
///
/// #[derive(Clone)]
/// struct Language(i64, &'static str);
///
/// impl Choice for Language {
///     fn choice_value(&self) -> Value { json!(self.0) }
///     fn choice_label(&self) -> String { self.1.to_string() }
///     fn field_value(&self, name: &str) -> Option<Value> {
///         (name == "name").then(|| json!(self.1))
///     }
/// }
///
/// let autocomplete = AutocompleteModel::new(
///     AutocompleteConfig::new().with_search_fields(["^name"]).with_order_by("name"),
/// )
/// .with_choices(MemoryQuerySet::new(vec![
///     Language(1, "Rust"),
///     Language(2, "Ruby"),
///     Language(3, "Go"),
/// ]));
///
/// let labels: Vec<String> = autocomplete
///     .choices_for_request(&AutocompleteRequest::new("ru"))
///     .unwrap()
///     .evaluate()
///     .unwrap()
///     .iter()
///     .map(|language| language.choice_label())
///     .collect();
/// assert_eq!(labels, vec!["Ruby", "Rust"]);
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteModel<S> {
	config: AutocompleteConfig,
	choices: Option<S>,
	values: Vec<Value>,
}

impl<S> AutocompleteModel<S> {
	pub fn new(config: AutocompleteConfig) -> Self {
		Self {
			config,
			choices: None,
			values: Vec::new(),
		}
	}

	/// Set the queryset choices are taken from
	pub fn with_choices(mut self, choices: S) -> Self {
		self.choices = Some(choices);
		self
	}

	/// Set the selected values, as submitted by the widget
	pub fn with_values<I, V>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		self.values = values.into_iter().map(Into::into).collect();
		self
	}

	pub fn config(&self) -> &AutocompleteConfig {
		&self.config
	}

	pub fn choices(&self) -> Option<&S> {
		self.choices.as_ref()
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn limit_choices(&self) -> usize {
		self.config.limit_choices
	}

	/// Identifier submitted for a choice
	pub fn choice_value<C: Choice>(&self, choice: &C) -> Value {
		choice.choice_value()
	}

	/// Label displayed for a choice
	pub fn choice_label<C: Choice>(&self, choice: &C) -> String {
		choice.choice_label()
	}

	/// Map a search field specifier to its match kind and field name
	pub fn construct_search(&self, field_spec: &str) -> SearchField {
		SearchField::parse(field_spec)
	}

	/// Condition matching `q` against `search_fields`, honoring `split_words`
	pub fn build_conditions(&self, q: &str, search_fields: &[String]) -> SearchCondition {
		let fields: Vec<SearchField> = search_fields
			.iter()
			.map(|spec| self.construct_search(spec))
			.collect();

		let conditions = match self.config.split_words {
			SplitWords::Disabled => fields.iter().fold(SearchCondition::empty(), |acc, field| {
				acc | SearchCondition::lookup(field.lookup(q))
			}),
			split => {
				let mut conditions = SearchCondition::empty();
				for word in q.split_whitespace() {
					let word_conditions =
						fields.iter().fold(SearchCondition::empty(), |acc, field| {
							acc | SearchCondition::lookup(field.lookup(word))
						});

					conditions = if split == SplitWords::Or {
						conditions | word_conditions
					} else {
						conditions & word_conditions
					};
				}
				conditions
			}
		};

		tracing::trace!(
			q,
			split_words = ?self.config.split_words,
			lookups = conditions.lookups().len(),
			"built autocomplete conditions"
		);
		conditions
	}

	fn require_choices(&self) -> AutocompleteResult<&S> {
		self.choices.as_ref().ok_or_else(|| {
			AutocompleteError::Configuration("choices should be a queryset".to_string())
		})
	}
}

impl<S: ChoiceSource + Clone> AutocompleteModel<S> {
	/// Apply `order_by` if it is set
	pub fn order_choices(&self, choices: S) -> S {
		match &self.config.order_by {
			Some(order_by) => choices.order_by(&order_by.fields()),
			None => choices,
		}
	}

	/// Ordered choices whose identifier is in the selected values
	pub fn choices_for_values(&self) -> AutocompleteResult<S> {
		let choices = self.require_choices()?.clone();
		Ok(self.order_choices(choices.filter_pk_in(&self.values)))
	}

	/// Choices matching the request query, minus excluded identifiers,
	/// ordered and cut to `limit_choices`
	pub fn choices_for_request(&self, request: &AutocompleteRequest) -> AutocompleteResult<S> {
		let choices = self.require_choices()?.clone();
		if self.config.search_fields.is_empty() {
			return Err(AutocompleteError::Configuration(
				"autocomplete.search_fields must be set".to_string(),
			));
		}

		let conditions = self.build_conditions(&request.q, &self.config.search_fields);

		tracing::debug!(
			q = %request.q,
			excluded = request.exclude.len(),
			limit = self.config.limit_choices,
			"filtering autocomplete choices"
		);

		let filtered = choices
			.filter(conditions)
			.exclude_pk_in(&request.exclude_values());
		Ok(self
			.order_choices(filtered)
			.slice(self.config.limit_choices))
	}
}

impl<S: EvaluateChoices + Clone> AutocompleteModel<S> {
	/// Return true if every selected value was found in `choices`
	pub fn validate_values(&self) -> AutocompleteResult<bool> {
		let found = self.choices_for_values()?.evaluate()?;

		for item in &found {
			let pk = item.choice_value();
			if !self.values.iter().any(|value| same_choice(&pk, value)) {
				tracing::debug!(value = %pk, "choice outside selected values");
				return Ok(false);
			}
		}
		for value in &self.values {
			if !found.iter().any(|item| same_choice(&item.choice_value(), value)) {
				tracing::debug!(%value, "selected value has no matching choice");
				return Ok(false);
			}
		}
		Ok(true)
	}

	/// Evaluate the request and render each choice as value/label
	pub fn autocomplete_choices(
		&self,
		request: &AutocompleteRequest,
	) -> AutocompleteResult<Vec<ChoiceItem>> {
		let rows = self.choices_for_request(request)?.evaluate()?;
		Ok(rows.iter().map(ChoiceItem::from_choice).collect())
	}

	/// Render the selected values as value/label, in configured order
	pub fn selected_choices(&self) -> AutocompleteResult<Vec<ChoiceItem>> {
		let rows = self.choices_for_values()?.evaluate()?;
		Ok(rows.iter().map(ChoiceItem::from_choice).collect())
	}
}
