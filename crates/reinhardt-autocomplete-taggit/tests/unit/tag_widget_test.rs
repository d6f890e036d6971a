//! Unit tests for TagWidget
//!
//! Tests rendering of text, tags, tag ids and tagged items through an
//! autocomplete over Tag records.

use reinhardt_autocomplete_core::{AutocompleteConfig, AutocompleteModel, MemoryQuerySet};
use reinhardt_autocomplete_taggit::{
	CommaTagParser, Tag, TagField, TagValue, TagWidget, TaggedItem,
};
use reinhardt_autocomplete_widgets::{Attrs, Widget};
use rstest::{fixture, rstest};
use serde_json::json;

type TagAutocomplete = AutocompleteModel<MemoryQuerySet<Tag>>;

#[fixture]
fn tag_autocomplete() -> TagAutocomplete {
	AutocompleteModel::new(
		AutocompleteConfig::new()
			.with_search_fields(["^name"])
			.with_order_by("name"),
	)
	.with_choices(MemoryQuerySet::new(vec![
		Tag::from_name("rust").with_id(1),
		Tag::from_name("web development").with_id(2),
		Tag::from_name("async").with_id(3),
	]))
}

/// Test text values are rendered unchanged
#[rstest]
fn test_render_text_value(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagWidget::new("TagAutocomplete", tag_autocomplete);

	// Act
	let html = widget.render("tags", Some(&json!("rust, go")), &Attrs::new());

	// Assert
	assert!(html.contains(r#"value="rust, go""#));
	assert!(html.contains(r#"data-autocomplete-url="/autocomplete/TagAutocomplete/""#));
}

/// Test tag ids are resolved through the autocomplete
#[rstest]
fn test_render_tag_ids(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagWidget::new("TagAutocomplete", tag_autocomplete);

	// Act
	let html = widget.render("tags", Some(&json!([2, 3, 99])), &Attrs::new());

	// Assert
	assert!(html.contains(r#"value="&quot;web development&quot;, async""#));
}

/// Test tagged items render the names of the tags they carry
#[rstest]
fn test_format_tagged_items(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagWidget::new("TagAutocomplete", tag_autocomplete);
	let items = vec![
		TaggedItem::new(Tag::from_name("rust").with_id(1), "Article", 5),
		TaggedItem::new(Tag::from_name("async").with_id(3), "Article", 5),
	];

	// Act
	let text = widget.format_value(&TagValue::TaggedItems(items)).unwrap();

	// Assert
	assert_eq!(text, "async, rust");
}

/// Test tags render with the configured parser
#[rstest]
fn test_format_tags_with_comma_parser(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagField::with_parser(CommaTagParser).widget("TagAutocomplete", tag_autocomplete);
	let tags = vec![Tag::from_name("web development"), Tag::from_name("a, b")];

	// Act
	let text = widget.format_value(&TagValue::Tags(tags)).unwrap();

	// Assert
	assert_eq!(text, "web development, \"a, b\"");
}

/// Test tagged items keep tags that were never saved
#[rstest]
fn test_format_tagged_items_without_tag_id(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagWidget::new("TagAutocomplete", tag_autocomplete);
	let items = vec![
		TaggedItem::new(Tag::from_name("web dev"), "Article", 5),
		TaggedItem::new(Tag::from_name("rust").with_id(1), "Article", 5),
	];

	// Act
	let text = widget.format_value(&TagValue::TaggedItems(items)).unwrap();

	// Assert
	assert_eq!(text, "\"web dev\", rust");
}

/// Test unreadable values render an empty edit string
#[rstest]
fn test_render_unreadable_value(tag_autocomplete: TagAutocomplete) {
	// Arrange
	let widget = TagWidget::new("TagAutocomplete", tag_autocomplete);

	// Act
	let html = widget.render("tags", Some(&json!(17)), &Attrs::new());

	// Assert
	assert!(html.contains(r#"name="tags" value="""#), "{}", html);
	assert!(!html.contains("17"));
}

/// Test ids that cannot be resolved are not rendered as tag names
#[rstest]
fn test_render_tag_ids_without_choices() {
	// Arrange
	let tags: TagAutocomplete =
		AutocompleteModel::new(AutocompleteConfig::new().with_search_fields(["name"]));
	let widget = TagWidget::new("TagAutocomplete", tags);

	// Act
	let html = widget.render("tags", Some(&json!([3, 1])), &Attrs::new());
	let result = widget.render_value("tags", &TagValue::TagIds(vec![3, 1]), &Attrs::new());

	// Assert
	assert!(html.contains(r#"name="tags" value="""#), "{}", html);
	assert!(!html.contains("3,1"));
	assert!(result.is_err());
}
