//! # Reinhardt Autocomplete
//!
//! Model-backed autocomplete for Reinhardt forms, inspired by
//! django-autocomplete-light.
//!
//! An autocomplete turns a choice source (a queryset) into a searchable,
//! size-limited list of choices. The widget side renders a text input bound
//! to the autocomplete and the fragments returned for each request.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All adapters enabled
//! - `widgets` - Text widget and response rendering
//! - `taggit` - Tag parsing, tag widget and tag field
//! - `sql` - `SqlQuerySet` compiling to sea-query statements
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_autocomplete::prelude::*;
//! use serde_json::{Value, json};
//!
//! #[derive(Clone)]
//! struct Book {
//!     id: i64,
//!     title: &'static str,
//! }
//!
//! impl Choice for Book {
//!     fn choice_value(&self) -> Value {
//!         json!(self.id)
//!     }
//!
//!     fn choice_label(&self) -> String {
//!         self.title.to_string()
//!     }
//!
//!     fn field_value(&self, name: &str) -> Option<Value> {
//!         (name == "title").then(|| json!(self.title))
//!     }
//! }
//!
//! let autocomplete = AutocompleteModel::new(
//!     AutocompleteConfig::new()
//!         .with_search_fields(["title"])
//!         .with_split_words(SplitWords::And),
//! )
//! .with_choices(MemoryQuerySet::new(vec![
//!     Book { id: 1, title: "The Dispossessed" },
//!     Book { id: 2, title: "The Left Hand of Darkness" },
//! ]));
//!
//! let items = autocomplete
//!     .autocomplete_choices(&AutocompleteRequest::new("hand dark"))
//!     .unwrap();
//! assert_eq!(items, vec![ChoiceItem::new(json!(2), "The Left Hand of Darkness")]);
//! ```

pub mod core;
pub mod taggit;
pub mod widgets;

pub use reinhardt_autocomplete_core::{
	AutocompleteConfig, AutocompleteError, AutocompleteModel, AutocompleteRequest,
	AutocompleteResult, Choice, ChoiceItem, ChoiceSource, EvaluateChoices, MatchKind,
	MemoryQuerySet, SearchCondition, SearchField, SplitWords,
};

#[cfg(feature = "sql")]
pub use reinhardt_autocomplete_core::{PkKind, SqlQuerySet};

/// Prelude module for convenient imports
pub mod prelude {
	pub use reinhardt_autocomplete_core::prelude::*;
	pub use reinhardt_autocomplete_core::{MemoryQuerySet, SearchCondition, SearchField};

	#[cfg(feature = "sql")]
	pub use reinhardt_autocomplete_core::SqlQuerySet;

	#[cfg(feature = "widgets")]
	pub use reinhardt_autocomplete_widgets::{Attrs, TextWidget, Widget, autocomplete_html};

	#[cfg(feature = "taggit")]
	pub use reinhardt_autocomplete_taggit::prelude::*;
}
