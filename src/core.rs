//! Choice query builder module.
//!
//! This module provides `AutocompleteModel`, search field specifiers,
//! search conditions and the choice sources they run against.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reinhardt_autocomplete::core::{AutocompleteConfig, AutocompleteModel, MemoryQuerySet};
//! ```

pub use reinhardt_autocomplete_core::*;
