//! Tag records
//!
//! - `Tag`: a tag with a normalized, URL-friendly slug
//! - `TaggedItem`: a tag applied to an object of some content type

use chrono::{DateTime, Utc};
use reinhardt_autocomplete_core::Choice;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A tag offered as an autocomplete choice
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_taggit::Tag;
///
/// let tag = Tag::from_name("Rust Programming");
/// assert_eq!(tag.slug, "rust-programming");
/// assert!(tag.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	#[serde(default)]
	pub id: Option<i64>,
	pub name: String,
	#[serde(default)]
	pub slug: String,
	#[serde(default = "Utc::now")]
	pub created_at: DateTime<Utc>,
}

impl Tag {
	pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
		Self {
			id: None,
			name: name.into(),
			slug: slug.into(),
			created_at: Utc::now(),
		}
	}

	/// Create a tag whose slug is derived from its name
	pub fn from_name(name: impl Into<String>) -> Self {
		let name = name.into();
		let slug = slug::slugify(&name);
		Self::new(name, slug)
	}

	pub fn with_id(mut self, id: i64) -> Self {
		self.id = Some(id);
		self
	}
}

impl Choice for Tag {
	fn choice_value(&self) -> Value {
		self.id.map_or(Value::Null, |id| json!(id))
	}

	fn choice_label(&self) -> String {
		self.name.clone()
	}

	fn field_value(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(self.choice_value()),
			"name" => Some(json!(self.name)),
			"slug" => Some(json!(self.slug)),
			"created_at" => Some(json!(self.created_at.to_rfc3339())),
			_ => None,
		}
	}
}

/// A tag applied to one object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedItem {
	#[serde(default)]
	pub id: Option<i64>,
	pub tag: Tag,
	pub content_type: String,
	pub object_id: i64,
}

impl TaggedItem {
	pub fn new(tag: Tag, content_type: impl Into<String>, object_id: i64) -> Self {
		Self {
			id: None,
			tag,
			content_type: content_type.into(),
			object_id,
		}
	}
}
