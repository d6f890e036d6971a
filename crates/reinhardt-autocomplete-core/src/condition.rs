//! Composite search conditions
//!
//! `SearchCondition` is a tree of [`Lookup`]s joined with AND/OR/NOT. An empty
//! group places no constraint on the result, so conditions can be built up
//! incrementally from an empty starting point.

use crate::lookup::Lookup;
use std::ops::{BitAnd, BitOr};

/// Composite match condition supporting AND/OR logic
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{SearchCondition, SearchField};
///
/// // (name ICONTAINS 'ada' OR email ICONTAINS 'ada')
/// let condition = SearchCondition::empty()
///     | SearchCondition::lookup(SearchField::parse("name").lookup("ada"))
///     | SearchCondition::lookup(SearchField::parse("email").lookup("ada"));
///
/// assert!(matches!(condition, SearchCondition::Or(ref c) if c.len() == 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCondition {
	/// A single lookup
	Lookup(Lookup),
	/// All conditions must match
	And(Vec<SearchCondition>),
	/// Any condition must match
	Or(Vec<SearchCondition>),
	/// Negates the inner condition
	Not(Box<SearchCondition>),
}

impl SearchCondition {
	/// A condition without constraints
	pub fn empty() -> Self {
		Self::And(Vec::new())
	}

	pub fn lookup(lookup: Lookup) -> Self {
		Self::Lookup(lookup)
	}

	pub fn and(conditions: Vec<SearchCondition>) -> Self {
		Self::And(conditions)
	}

	pub fn or(conditions: Vec<SearchCondition>) -> Self {
		Self::Or(conditions)
	}

	// Named after Q's negation; builds a variant rather than a boolean.
	#[allow(clippy::should_implement_trait)]
	pub fn not(condition: SearchCondition) -> Self {
		Self::Not(Box::new(condition))
	}

	/// Check if this condition is empty (no actual lookups)
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Lookup(_) => false,
			Self::And(conditions) | Self::Or(conditions) => {
				conditions.is_empty() || conditions.iter().all(|c| c.is_empty())
			}
			Self::Not(condition) => condition.is_empty(),
		}
	}

	/// Every lookup in the tree, depth first
	pub fn lookups(&self) -> Vec<&Lookup> {
		let mut out = Vec::new();
		self.collect_lookups(&mut out);
		out
	}

	fn collect_lookups<'a>(&'a self, out: &mut Vec<&'a Lookup>) {
		match self {
			Self::Lookup(lookup) => out.push(lookup),
			Self::And(conditions) | Self::Or(conditions) => {
				for condition in conditions {
					condition.collect_lookups(out);
				}
			}
			Self::Not(condition) => condition.collect_lookups(out),
		}
	}

	/// Evaluate the tree with `matcher` deciding each lookup
	///
	/// Empty groups evaluate to `true`.
	pub fn evaluate<F>(&self, matcher: &F) -> bool
	where
		F: Fn(&Lookup) -> bool,
	{
		if self.is_empty() {
			return true;
		}
		match self {
			Self::Lookup(lookup) => matcher(lookup),
			Self::And(conditions) => conditions
				.iter()
				.filter(|c| !c.is_empty())
				.all(|c| c.evaluate(matcher)),
			Self::Or(conditions) => conditions
				.iter()
				.filter(|c| !c.is_empty())
				.any(|c| c.evaluate(matcher)),
			Self::Not(condition) => !condition.evaluate(matcher),
		}
	}
}

impl Default for SearchCondition {
	fn default() -> Self {
		Self::empty()
	}
}

impl BitOr for SearchCondition {
	type Output = SearchCondition;

	fn bitor(self, rhs: SearchCondition) -> SearchCondition {
		if self.is_empty() {
			return rhs;
		}
		if rhs.is_empty() {
			return self;
		}
		match self {
			SearchCondition::Or(mut conditions) => {
				conditions.push(rhs);
				SearchCondition::Or(conditions)
			}
			other => SearchCondition::Or(vec![other, rhs]),
		}
	}
}

impl BitAnd for SearchCondition {
	type Output = SearchCondition;

	fn bitand(self, rhs: SearchCondition) -> SearchCondition {
		if self.is_empty() {
			return rhs;
		}
		if rhs.is_empty() {
			return self;
		}
		match self {
			SearchCondition::And(mut conditions) => {
				conditions.push(rhs);
				SearchCondition::And(conditions)
			}
			other => SearchCondition::And(vec![other, rhs]),
		}
	}
}
