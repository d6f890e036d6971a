//! SQL-backed choice source
//!
//! `SqlQuerySet` compiles autocomplete operations into a sea-query
//! `SELECT` statement. Executing the statement is left to the caller's
//! database layer.

use crate::condition::SearchCondition;
use crate::lookup::{Lookup, MatchKind};
use crate::source::{ChoiceSource, OrderingField, value_to_string};
use sea_query::{
	Alias, Asterisk, Condition, ConditionalStatement, Expr, ExprTrait, Func, LikeExpr, Order,
	OrderedStatement, PostgresQueryBuilder, Query, QueryStatementWriter, SelectStatement, Values,
};
use serde_json::Value;

/// Column type of the primary key, used to bind identifier values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PkKind {
	/// Integer key; string identifiers that parse as `i64` are bound as integers
	#[default]
	Integer,
	/// Text key; identifiers are bound in their string form
	Text,
}

/// Queryset compiling to a `SELECT * FROM table ...` statement
///
/// Identifiers from requests arrive as strings. They are bound according to
/// the [`PkKind`] of the table, integer unless set with
/// [`with_pk_kind`](Self::with_pk_kind).
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_core::{ChoiceSource, SearchCondition, SearchField, SqlQuerySet};
/// use serde_json::json;
///
/// let qs = SqlQuerySet::new("cities", "id")
///     .filter(SearchCondition::lookup(SearchField::parse("^name").lookup("par")))
///     .exclude_pk_in(&[json!(3)])
///     .slice(20);
///
/// let sql = qs.to_sql();
/// assert!(sql.starts_with(r#"SELECT * FROM "cities""#));
/// assert!(sql.contains("LIMIT 20"));
/// ```
#[derive(Debug, Clone)]
pub struct SqlQuerySet {
	table: String,
	pk_column: String,
	pk_kind: PkKind,
	statement: SelectStatement,
	limit: Option<usize>,
}

impl SqlQuerySet {
	pub fn new(table: impl Into<String>, pk_column: impl Into<String>) -> Self {
		let table = table.into();
		let statement = Query::select()
			.column(Asterisk)
			.from(Alias::new(table.clone()))
			.to_owned();

		Self {
			table,
			pk_column: pk_column.into(),
			pk_kind: PkKind::default(),
			statement,
			limit: None,
		}
	}

	pub fn with_pk_kind(mut self, pk_kind: PkKind) -> Self {
		self.pk_kind = pk_kind;
		self
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn pk_column(&self) -> &str {
		&self.pk_column
	}

	pub fn pk_kind(&self) -> PkKind {
		self.pk_kind
	}

	pub fn statement(&self) -> &SelectStatement {
		&self.statement
	}

	/// Render the statement as PostgreSQL with inlined values
	pub fn to_sql(&self) -> String {
		self.statement.to_string(PostgresQueryBuilder)
	}

	/// Render the statement as PostgreSQL with bound values
	pub fn build(&self) -> (String, Values) {
		self.statement.build(PostgresQueryBuilder)
	}

	fn pk_values(&self, values: &[Value]) -> Vec<sea_query::Value> {
		values
			.iter()
			.filter_map(|value| self.pk_value(value))
			.collect()
	}

	fn pk_value(&self, value: &Value) -> Option<sea_query::Value> {
		match (self.pk_kind, value) {
			(_, Value::Null) => None,
			(PkKind::Integer, Value::Number(n)) => Some(
				n.as_i64()
					.map(sea_query::Value::from)
					.unwrap_or_else(|| n.to_string().into()),
			),
			(PkKind::Integer, other) => {
				let text = value_to_string(other)?;
				Some(match text.trim().parse::<i64>() {
					Ok(id) => id.into(),
					Err(_) => text.into(),
				})
			}
			(PkKind::Text, other) => value_to_string(other).map(sea_query::Value::from),
		}
	}
}

impl ChoiceSource for SqlQuerySet {
	fn filter(mut self, condition: SearchCondition) -> Self {
		if let Some(condition) = build_condition(&condition) {
			self.statement.cond_where(condition);
		}
		self
	}

	fn filter_pk_in(mut self, values: &[Value]) -> Self {
		let values = self.pk_values(values);
		if values.is_empty() {
			self.statement.and_where(Expr::cust("FALSE"));
		} else {
			let pk = Expr::col(Alias::new(self.pk_column.clone()));
			self.statement.and_where(pk.is_in(values));
		}
		self
	}

	fn exclude_pk_in(mut self, values: &[Value]) -> Self {
		let values = self.pk_values(values);
		if !values.is_empty() {
			let pk = Expr::col(Alias::new(self.pk_column.clone()));
			self.statement.and_where(pk.is_not_in(values));
		}
		self
	}

	fn order_by(mut self, fields: &[OrderingField]) -> Self {
		self.statement.clear_order_by();
		for field in fields {
			let order = if field.descending {
				Order::Desc
			} else {
				Order::Asc
			};
			self.statement.order_by(Alias::new(field.field.clone()), order);
		}
		self
	}

	fn slice(mut self, limit: usize) -> Self {
		let limit = self.limit.map_or(limit, |current| current.min(limit));
		self.limit = Some(limit);
		self.statement.limit(limit as u64);
		self
	}
}

fn escape_like(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());
	for c in value.chars() {
		if matches!(c, '%' | '_' | '\\') {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

fn lowered_column(field: &str) -> Expr {
	Expr::expr(Func::lower(Expr::col(Alias::new(field.to_string()))))
}

/// Build an expression from a single lookup
pub fn build_lookup_expr(lookup: &Lookup) -> Expr {
	let needle = lookup.value.to_lowercase();

	match lookup.kind {
		MatchKind::IContains => lowered_column(&lookup.field)
			.like(LikeExpr::new(format!("%{}%", escape_like(&needle))).escape('\\')),
		MatchKind::IStartsWith => lowered_column(&lookup.field)
			.like(LikeExpr::new(format!("{}%", escape_like(&needle))).escape('\\')),
		MatchKind::IExact => lowered_column(&lookup.field).eq(needle),
		MatchKind::Search => Expr::cust_with_values(
			format!(
				"to_tsvector(\"{}\") @@ plainto_tsquery(?)",
				lookup.field.replace('"', "\"\"")
			),
			[lookup.value.clone()],
		),
	}
}

/// Build a sea-query condition from a search condition tree
///
/// Returns `None` for empty trees so that no WHERE clause is emitted.
pub fn build_condition(condition: &SearchCondition) -> Option<Condition> {
	if condition.is_empty() {
		return None;
	}
	match condition {
		SearchCondition::Lookup(lookup) => Some(Condition::all().add(build_lookup_expr(lookup))),
		SearchCondition::And(conditions) => {
			let mut and_condition = Condition::all();
			for cond in conditions {
				if let Some(sub_cond) = build_condition(cond) {
					and_condition = and_condition.add(sub_cond);
				}
			}
			Some(and_condition)
		}
		SearchCondition::Or(conditions) => {
			let mut or_condition = Condition::any();
			for cond in conditions {
				if let Some(sub_cond) = build_condition(cond) {
					or_condition = or_condition.add(sub_cond);
				}
			}
			Some(or_condition)
		}
		SearchCondition::Not(inner) => build_condition(inner).map(|inner_cond| inner_cond.not()),
	}
}
