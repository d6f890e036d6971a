//! Unit tests for Tag records
//!
//! Tests constructors, slug generation and choice accessors.

use reinhardt_autocomplete_core::Choice;
use reinhardt_autocomplete_taggit::{Tag, TaggedItem};
use rstest::rstest;
use serde_json::json;

/// Test Tag::new() keeps the explicit slug
#[rstest]
#[case("rust", "rust")]
#[case("Rust Programming", "rust-prog")]
fn test_tag_new_constructor(#[case] name: &str, #[case] slug: &str) {
	// Arrange & Act
	let tag = Tag::new(name, slug);

	// Assert
	assert_eq!(tag.name, name);
	assert_eq!(tag.slug, slug);
	assert!(tag.id.is_none());
	assert!(tag.created_at.timestamp() > 0);
}

/// Test Tag::from_name() slugifies the name
#[rstest]
#[case("Rust Programming", "rust-programming")]
#[case("web  development!", "web-development")]
#[case("Café", "cafe")]
fn test_tag_from_name_slug(#[case] name: &str, #[case] expected_slug: &str) {
	// Arrange & Act
	let tag = Tag::from_name(name);

	// Assert
	assert_eq!(tag.slug, expected_slug);
}

/// Test Tag choice accessors
#[rstest]
fn test_tag_as_choice() {
	// Arrange
	let saved = Tag::from_name("rust").with_id(7);
	let unsaved = Tag::from_name("go");

	// Act & Assert
	assert_eq!(saved.choice_value(), json!(7));
	assert_eq!(saved.choice_label(), "rust");
	assert_eq!(saved.field_value("slug"), Some(json!("rust")));
	assert_eq!(saved.field_value("missing"), None);
	assert_eq!(unsaved.choice_value(), json!(null));
}

/// Test TaggedItem keeps its tag
#[rstest]
fn test_tagged_item_new() {
	// Arrange & Act
	let item = TaggedItem::new(Tag::from_name("rust").with_id(1), "Article", 42);

	// Assert
	assert_eq!(item.tag.id, Some(1));
	assert_eq!(item.content_type, "Article");
	assert_eq!(item.object_id, 42);
	assert!(item.id.is_none());
}
