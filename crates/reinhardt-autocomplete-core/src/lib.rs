//! # reinhardt-autocomplete-core
//!
//! Model-backed autocomplete: turns a choice source into a searchable,
//! size-limited list of choices.
//!
//! ## Features
//!
//! - `AutocompleteModel`: narrows a choice source to the selected values or
//!   to the records matching a typed query
//! - Search field specifiers with `^` (starts-with), `=` (exact) and `@`
//!   (full-text) prefixes
//! - Multi-word queries combined with AND or OR semantics
//! - `MemoryQuerySet` for in-process records, `SqlQuerySet` (feature `sql`)
//!   compiling to sea-query statements
//! - TOML-loadable `AutocompleteConfig`
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_autocomplete_core::{
//!     AutocompleteConfig, AutocompleteModel, AutocompleteRequest, Choice, MemoryQuerySet,
//! };
//! use serde_json::{Value, json};
//!
//! #[derive(Clone)]
//! struct Country {
//!     code: &'static str,
//!     name: &'static str,
//! }
//!
//! impl Choice for Country {
//!     fn choice_value(&self) -> Value {
//!         json!(self.code)
//!     }
//!
//!     fn choice_label(&self) -> String {
//!         self.name.to_string()
//!     }
//!
//!     fn field_value(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "code" => Some(json!(self.code)),
//!             "name" => Some(json!(self.name)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let countries = MemoryQuerySet::new(vec![
//!     Country { code: "fr", name: "France" },
//!     Country { code: "fi", name: "Finland" },
//!     Country { code: "de", name: "Germany" },
//! ]);
//!
//! let autocomplete = AutocompleteModel::new(
//!     AutocompleteConfig::new()
//!         .with_search_fields(["=code", "^name"])
//!         .with_order_by("name"),
//! )
//! .with_choices(countries);
//!
//! let request = AutocompleteRequest::from_query_string("q=f&exclude=fi").unwrap();
//! let items = autocomplete.autocomplete_choices(&request).unwrap();
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].label, "France");
//! ```

pub mod condition;
pub mod config;
pub mod error;
pub mod lookup;
pub mod memory;
pub mod model;
pub mod request;
pub mod source;
#[cfg(feature = "sql")]
pub mod sql;

pub use condition::SearchCondition;
pub use config::{AutocompleteConfig, DEFAULT_LIMIT_CHOICES, OrderBy, SplitWords};
pub use error::{AutocompleteError, AutocompleteResult};
pub use lookup::{Lookup, MatchKind, SearchField};
pub use memory::MemoryQuerySet;
pub use model::{AutocompleteModel, ChoiceItem};
pub use request::AutocompleteRequest;
pub use source::{Choice, ChoiceSource, EvaluateChoices, OrderingField, same_choice, value_to_string};
#[cfg(feature = "sql")]
pub use sql::{PkKind, SqlQuerySet};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::config::{AutocompleteConfig, SplitWords};
	pub use crate::error::{AutocompleteError, AutocompleteResult};
	pub use crate::model::{AutocompleteModel, ChoiceItem};
	pub use crate::request::AutocompleteRequest;
	pub use crate::source::{Choice, ChoiceSource, EvaluateChoices};
}
