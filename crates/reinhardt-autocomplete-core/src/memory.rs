//! In-memory choice source
//!
//! `MemoryQuerySet` evaluates conditions over a shared slice of records. It
//! backs tests, fixtures and small static choice lists.

use crate::condition::SearchCondition;
use crate::error::AutocompleteResult;
use crate::lookup::{Lookup, MatchKind};
use crate::source::{Choice, ChoiceSource, EvaluateChoices, OrderingField, same_choice, value_to_string};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// Lazy queryset over records held in memory
///
/// Operations are recorded and applied on [`evaluate`](EvaluateChoices::evaluate)
/// in a fixed order: identifier filters, conditions, exclusions, ordering,
/// then slicing.
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{
///     Choice, ChoiceSource, EvaluateChoices, MemoryQuerySet, OrderingField,
/// };
/// use serde_json::{Value, json};
///
/// #[derive(Clone)]
/// struct Fruit(i64, &'static str);
///
/// impl Choice for Fruit {
///     fn choice_value(&self) -> Value { json!(self.0) }
///     fn choice_label(&self) -> String { self.1.to_string() }
///     fn field_value(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(json!(self.1)),
///             _ => None,
///         }
///     }
/// }
///
/// let fruits = MemoryQuerySet::new(vec![Fruit(1, "pear"), Fruit(2, "apple")]);
/// let ordered = fruits.order_by(&[OrderingField::asc("name")]).evaluate().unwrap();
/// assert_eq!(ordered[0].1, "apple");
/// ```
#[derive(Debug)]
pub struct MemoryQuerySet<R> {
	records: Arc<[R]>,
	pk_filters: Vec<Vec<Value>>,
	conditions: Vec<SearchCondition>,
	excluded: Vec<Value>,
	ordering: Vec<OrderingField>,
	limit: Option<usize>,
}

impl<R> Clone for MemoryQuerySet<R> {
	fn clone(&self) -> Self {
		Self {
			records: Arc::clone(&self.records),
			pk_filters: self.pk_filters.clone(),
			conditions: self.conditions.clone(),
			excluded: self.excluded.clone(),
			ordering: self.ordering.clone(),
			limit: self.limit,
		}
	}
}

impl<R> MemoryQuerySet<R> {
	pub fn new(records: Vec<R>) -> Self {
		Self::from_shared(records.into())
	}

	/// Build over records shared with other querysets
	pub fn from_shared(records: Arc<[R]>) -> Self {
		Self {
			records,
			pk_filters: Vec::new(),
			conditions: Vec::new(),
			excluded: Vec::new(),
			ordering: Vec::new(),
			limit: None,
		}
	}

	/// Number of records before any filtering
	pub fn total(&self) -> usize {
		self.records.len()
	}

	pub fn conditions(&self) -> &[SearchCondition] {
		&self.conditions
	}

	pub fn ordering(&self) -> &[OrderingField] {
		&self.ordering
	}

	pub fn limit(&self) -> Option<usize> {
		self.limit
	}
}

impl<R: Choice> MemoryQuerySet<R> {
	fn keeps(&self, record: &R) -> bool {
		let pk = record.choice_value();

		if !self
			.pk_filters
			.iter()
			.all(|values| values.iter().any(|v| same_choice(&pk, v)))
		{
			return false;
		}
		if self.excluded.iter().any(|v| same_choice(&pk, v)) {
			return false;
		}
		self.conditions
			.iter()
			.all(|condition| condition.evaluate(&|lookup: &Lookup| matches_lookup(record, lookup)))
	}
}

impl<R> ChoiceSource for MemoryQuerySet<R> {
	fn filter(mut self, condition: SearchCondition) -> Self {
		if !condition.is_empty() {
			self.conditions.push(condition);
		}
		self
	}

	fn filter_pk_in(mut self, values: &[Value]) -> Self {
		self.pk_filters.push(values.to_vec());
		self
	}

	fn exclude_pk_in(mut self, values: &[Value]) -> Self {
		self.excluded.extend(values.iter().cloned());
		self
	}

	fn order_by(mut self, fields: &[OrderingField]) -> Self {
		self.ordering = fields.to_vec();
		self
	}

	fn slice(mut self, limit: usize) -> Self {
		self.limit = Some(self.limit.map_or(limit, |current| current.min(limit)));
		self
	}
}

impl<R: Choice + Clone> EvaluateChoices for MemoryQuerySet<R> {
	type Record = R;

	fn evaluate(&self) -> AutocompleteResult<Vec<R>> {
		let mut rows: Vec<R> = self
			.records
			.iter()
			.filter(|record| self.keeps(record))
			.cloned()
			.collect();

		if !self.ordering.is_empty() {
			// sort_by is stable, ties keep insertion order
			rows.sort_by(|a, b| compare_records(a, b, &self.ordering));
		}
		if let Some(limit) = self.limit {
			rows.truncate(limit);
		}

		tracing::trace!(
			total = self.records.len(),
			matched = rows.len(),
			"evaluated in-memory choices"
		);
		Ok(rows)
	}
}

/// Decide a single lookup against a record
pub fn matches_lookup<R: Choice>(record: &R, lookup: &Lookup) -> bool {
	let Some(raw) = record.field_value(&lookup.field) else {
		return false;
	};
	let Some(text) = value_to_string(&raw) else {
		return false;
	};
	let haystack = text.to_lowercase();
	let needle = lookup.value.to_lowercase();

	match lookup.kind {
		MatchKind::IContains => haystack.contains(&needle),
		MatchKind::IStartsWith => haystack.starts_with(&needle),
		MatchKind::IExact => haystack == needle,
		MatchKind::Search => {
			let tokens: Vec<&str> = search_tokens(&haystack).collect();
			let mut words = search_tokens(&needle).peekable();
			// a query without words matches nothing, like an empty tsquery
			words.peek().is_some() && words.all(|word| tokens.contains(&word))
		}
	}
}

fn search_tokens(text: &str) -> impl Iterator<Item = &str> {
	text.split(|c: char| !c.is_alphanumeric())
		.filter(|token| !token.is_empty())
}

fn compare_records<R: Choice>(a: &R, b: &R, ordering: &[OrderingField]) -> Ordering {
	for field in ordering {
		let left = a.field_value(&field.field);
		let right = b.field_value(&field.field);
		let mut result = compare_values(left.as_ref(), right.as_ref());
		if field.descending {
			result = result.reverse();
		}
		if result != Ordering::Equal {
			return result;
		}
	}
	Ordering::Equal
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
		(None | Some(Value::Null), _) => Ordering::Less,
		(_, None | Some(Value::Null)) => Ordering::Greater,
		(Some(Value::Number(x)), Some(Value::Number(y))) => {
			let x = x.as_f64().unwrap_or(f64::NAN);
			let y = y.as_f64().unwrap_or(f64::NAN);
			x.partial_cmp(&y).unwrap_or(Ordering::Equal)
		}
		(Some(x), Some(y)) => value_to_string(x).cmp(&value_to_string(y)),
	}
}
