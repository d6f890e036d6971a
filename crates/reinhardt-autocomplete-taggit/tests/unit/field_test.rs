//! Unit tests for TagField
//!
//! Tests cleaning of text and list input, required handling and error
//! messages for both parsing strategies.

use reinhardt_autocomplete_taggit::{
	CommaTagParser, INVALID_TAG_LIST_MESSAGE, MAX_TAG_LENGTH, TagField, TaggitError,
};
use rstest::rstest;
use serde_json::{Value, json};

/// Test text input is parsed with the taggit strategy
#[rstest]
#[case(json!("python rust"), vec!["python", "rust"])]
#[case(json!("rust, \"web development\""), vec!["rust", "web development"])]
#[case(json!(["rust", " go ", "rust", ""]), vec!["rust", "go"])]
fn test_clean_taggit(#[case] value: Value, #[case] expected: Vec<&str>) {
	// Arrange
	let field = TagField::new();

	// Act
	let names = field.clean(Some(&value)).unwrap();

	// Assert
	assert_eq!(names, expected);
}

/// Test text input is parsed with the comma strategy
#[rstest]
#[case(json!("python rust"), vec!["python rust"])]
#[case(json!("b, a, b"), vec!["b", "a"])]
fn test_clean_comma(#[case] value: Value, #[case] expected: Vec<&str>) {
	// Arrange
	let field = TagField::with_parser(CommaTagParser);

	// Act
	let names = field.clean(Some(&value)).unwrap();

	// Assert
	assert_eq!(names, expected);
}

/// Test empty input on a required field
#[rstest]
#[case(None)]
#[case(Some(json!(null)))]
#[case(Some(json!("   ")))]
#[case(Some(json!(",,,")))]
#[case(Some(json!([])))]
fn test_required_field_rejects_empty(#[case] value: Option<Value>) {
	// Arrange
	let field = TagField::new();

	// Act
	let result = field.clean(value.as_ref());

	// Assert
	assert!(matches!(result, Err(TaggitError::Required)));
	assert_eq!(TaggitError::Required.to_string(), "This field is required.");
}

/// Test empty input on an optional field
#[rstest]
fn test_optional_field_accepts_empty() {
	let field = TagField::new().required(false);

	let names = field.clean(None).unwrap();

	assert!(names.is_empty());
	assert!(!field.is_required());
}

/// Test malformed input surfaces the comma-separated list message
#[rstest]
#[case(TagField::new().clean(Some(&json!(5))))]
#[case(TagField::new().clean(Some(&json!({"tags": "rust"}))))]
#[case(TagField::new().clean(Some(&json!(["rust", 3]))))]
#[case(TagField::with_parser(CommaTagParser).clean(Some(&json!("\"rust"))))]
fn test_malformed_input(#[case] result: Result<Vec<String>, TaggitError>) {
	match result {
		Err(TaggitError::Validation(message)) => assert_eq!(message, INVALID_TAG_LIST_MESSAGE),
		other => panic!("Expected validation error, got {:?}", other),
	}
}

/// Test tag names over the maximum length
#[rstest]
fn test_list_input_checks_length() {
	let long_name = "t".repeat(MAX_TAG_LENGTH + 5);

	let result = TagField::new().clean(Some(&json!([long_name])));

	assert!(matches!(
		result,
		Err(TaggitError::TagNameTooLong { len, .. }) if len == MAX_TAG_LENGTH + 5
	));
}

/// Test prepare_value and has_changed
#[rstest]
fn test_prepare_value_and_has_changed() {
	// Arrange
	let field = TagField::new();
	let initial = vec!["web development".to_string(), "rust".to_string()];

	// Act
	let prepared = field.prepare_value(&initial);

	// Assert
	assert_eq!(prepared, "\"web development\", rust");
	assert!(!field.has_changed(&initial, Some(&json!(prepared))));
	assert!(field.has_changed(&initial, Some(&json!("rust"))));
	assert!(field.has_changed(&initial, Some(&json!(42))));
}
