//! # reinhardt-autocomplete-taggit
//!
//! Tag adapters for autocompletes, inspired by django-taggit.
//!
//! ## Features
//!
//! - `Tag` and `TaggedItem` records usable as autocomplete choices
//! - `TagParser` strategies: `TaggitTagParser` (django-taggit compatible) and
//!   `CommaTagParser` (strict comma-separated)
//! - `TagWidget`: autocomplete text input showing tags as an edit string
//! - `TagField`: cleans submitted tag input into tag names
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_autocomplete_taggit::{CommaTagParser, TagField, TaggitError};
//! use serde_json::json;
//!
//! let field = TagField::with_parser(CommaTagParser);
//!
//! let names = field.clean(Some(&json!("rust, web development"))).unwrap();
//! assert_eq!(names, vec!["rust", "web development"]);
//!
//! let error = field.clean(Some(&json!("rust, \"web"))).unwrap_err();
//! assert_eq!(error.to_string(), "Please provide a comma-separated list of tags.");
//! ```

pub mod error;
pub mod field;
pub mod parser;
pub mod tag;
pub mod widget;

pub use error::{INVALID_TAG_LIST_MESSAGE, TaggitError, TaggitResult};
pub use field::TagField;
pub use parser::{CommaTagParser, MAX_TAG_LENGTH, TagParser, TaggitTagParser};
pub use tag::{Tag, TaggedItem};
pub use widget::{TagLookup, TagValue, TagWidget};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::error::{TaggitError, TaggitResult};
	pub use crate::field::TagField;
	pub use crate::parser::{CommaTagParser, TagParser, TaggitTagParser};
	pub use crate::tag::{Tag, TaggedItem};
	pub use crate::widget::{TagLookup, TagValue, TagWidget};
}
