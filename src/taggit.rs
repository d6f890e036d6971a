//! Tagging module.
//!
//! This module provides tag parsing strategies, the tag widget and the tag
//! form field.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "taggit")]
//! use reinhardt_autocomplete::taggit::{TagField, TagWidget, TaggitTagParser};
//! ```

#[cfg(feature = "taggit")]
pub use reinhardt_autocomplete_taggit::*;
