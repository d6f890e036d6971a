//! Integration tests for AutocompleteModel
//!
//! Exercises value lookup, request filtering and validation over an
//! in-memory choice source.

use reinhardt_autocomplete_core::{
	AutocompleteConfig, AutocompleteError, AutocompleteModel, AutocompleteRequest, Choice,
	ChoiceItem, EvaluateChoices, MemoryQuerySet, SplitWords,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Author {
	id: i64,
	first_name: &'static str,
	last_name: &'static str,
	email: &'static str,
}

impl Choice for Author {
	fn choice_value(&self) -> Value {
		json!(self.id)
	}

	fn choice_label(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	fn field_value(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(json!(self.id)),
			"first_name" => Some(json!(self.first_name)),
			"last_name" => Some(json!(self.last_name)),
			"email" => Some(json!(self.email)),
			_ => None,
		}
	}
}

fn author(
	id: i64,
	first_name: &'static str,
	last_name: &'static str,
	email: &'static str,
) -> Author {
	Author {
		id,
		first_name,
		last_name,
		email,
	}
}

#[fixture]
fn authors() -> MemoryQuerySet<Author> {
	MemoryQuerySet::new(vec![
		author(1, "Ursula", "Le Guin", "ursula@example.com"),
		author(2, "Octavia", "Butler", "obutler@example.com"),
		author(3, "Ted", "Chiang", "ted@example.org"),
		author(4, "Iain", "Banks", "iain.banks@example.org"),
		author(5, "Ann", "Leckie", "ann@example.com"),
	])
}

fn autocomplete(
	config: AutocompleteConfig,
	choices: MemoryQuerySet<Author>,
) -> AutocompleteModel<MemoryQuerySet<Author>> {
	AutocompleteModel::new(config).with_choices(choices)
}

fn request_ids(
	model: &AutocompleteModel<MemoryQuerySet<Author>>,
	request: &AutocompleteRequest,
) -> Vec<i64> {
	model
		.choices_for_request(request)
		.unwrap()
		.evaluate()
		.unwrap()
		.iter()
		.map(|a| a.id)
		.collect()
}

#[rstest]
fn test_choices_for_values_returns_selected_in_order(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(AutocompleteConfig::new().with_order_by("last_name"), authors)
		.with_values([json!(3), json!("1"), json!(4)]);

	// Act
	let rows = model.choices_for_values().unwrap().evaluate().unwrap();

	// Assert
	let names: Vec<&str> = rows.iter().map(|a| a.last_name).collect();
	assert_eq!(names, vec!["Banks", "Chiang", "Le Guin"]);
}

#[rstest]
fn test_choices_for_values_without_values_is_empty(authors: MemoryQuerySet<Author>) {
	let model = autocomplete(AutocompleteConfig::new(), authors);

	let rows = model.choices_for_values().unwrap().evaluate().unwrap();

	assert!(rows.is_empty());
}

#[rstest]
#[case("gui", vec![1])]
#[case("LE GUIN", vec![1])]
#[case("butler", vec![2])]
#[case("example.org", vec![3, 4])]
#[case("nobody", vec![])]
fn test_unsplit_query_matches_any_field(
	authors: MemoryQuerySet<Author>,
	#[case] q: &str,
	#[case] expected: Vec<i64>,
) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new().with_search_fields(["last_name", "email"]),
		authors,
	);

	// Act
	let ids = request_ids(&model, &AutocompleteRequest::new(q));

	// Assert
	assert_eq!(ids, expected);
}

#[rstest]
fn test_split_words_and_requires_every_word(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new()
			.with_search_fields(["first_name", "last_name"])
			.with_split_words(SplitWords::And),
		authors,
	);

	// Act
	let ids = request_ids(&model, &AutocompleteRequest::new("ann leckie"));

	// Assert
	assert_eq!(ids, vec![5]);
}

#[rstest]
fn test_split_words_or_accepts_any_word(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new()
			.with_search_fields(["first_name", "last_name"])
			.with_split_words(SplitWords::Or)
			.with_order_by("-id"),
		authors,
	);

	// Act
	let ids = request_ids(&model, &AutocompleteRequest::new("ted octavia"));

	// Assert
	assert_eq!(ids, vec![3, 2]);
}

#[rstest]
fn test_prefix_specifiers(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new().with_search_fields(["^last_name", "=email"]),
		authors,
	);

	// Act
	let starts_with = request_ids(&model, &AutocompleteRequest::new("b"));
	let exact = request_ids(&model, &AutocompleteRequest::new("TED@example.org"));
	let infix = request_ids(&model, &AutocompleteRequest::new("utle"));

	// Assert
	assert_eq!(starts_with, vec![2, 4]);
	assert_eq!(exact, vec![3]);
	assert!(infix.is_empty());
}

#[rstest]
fn test_request_excludes_and_limits(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new()
			.with_search_fields(["email"])
			.with_limit_choices(2)
			.with_order_by("id"),
		authors,
	);
	let request = AutocompleteRequest::from_query_string("q=example&exclude=2&exclude=3").unwrap();

	// Act
	let ids = request_ids(&model, &request);

	// Assert
	assert_eq!(ids, vec![1, 4]);
}

#[rstest]
fn test_empty_query_lists_first_choices(authors: MemoryQuerySet<Author>) {
	let model = autocomplete(
		AutocompleteConfig::new()
			.with_search_fields(["last_name"])
			.with_limit_choices(3),
		authors,
	);

	let ids = request_ids(&model, &AutocompleteRequest::default());

	assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[case(vec![json!(1), json!(2)], true)]
#[case(vec![json!("1"), json!("5")], true)]
#[case(vec![json!(1), json!(99)], false)]
#[case(vec![json!("abc")], false)]
#[case(vec![], true)]
fn test_validate_values(
	authors: MemoryQuerySet<Author>,
	#[case] values: Vec<Value>,
	#[case] expected: bool,
) {
	// Arrange
	let model = autocomplete(AutocompleteConfig::new(), authors).with_values(values);

	// Act
	let valid = model.validate_values().unwrap();

	// Assert
	assert_eq!(valid, expected);
}

#[rstest]
fn test_validate_values_without_choices_fails() {
	let model: AutocompleteModel<MemoryQuerySet<Author>> =
		AutocompleteModel::new(AutocompleteConfig::new()).with_values([json!(1)]);

	let result = model.validate_values();

	assert!(matches!(result, Err(AutocompleteError::Configuration(_))));
}

#[rstest]
fn test_autocomplete_choices_render_value_and_label(authors: MemoryQuerySet<Author>) {
	// Arrange
	let model = autocomplete(
		AutocompleteConfig::new().with_search_fields(["^first_name"]),
		authors,
	);

	// Act
	let items = model
		.autocomplete_choices(&AutocompleteRequest::new("oct"))
		.unwrap();

	// Assert
	assert_eq!(items, vec![ChoiceItem::new(json!(2), "Octavia Butler")]);
	assert_eq!(
		serde_json::to_value(&items).unwrap(),
		json!([{"value": 2, "label": "Octavia Butler"}])
	);
}

#[rstest]
fn test_config_loaded_from_toml(authors: MemoryQuerySet<Author>) {
	// Arrange
	let config = AutocompleteConfig::from_toml_str(
		r#"
		limit_choices = 1
		search_fields = ["^first_name", "last_name"]
		split_words = "or"
		order_by = ["-last_name"]
		"#,
	)
	.unwrap();
	let model = autocomplete(config, authors);

	// Act
	let ids = request_ids(&model, &AutocompleteRequest::new("i l"));

	// Assert
	// every author matches one of the words; the highest last name wins
	assert_eq!(ids, vec![5]);
}
