//! Widgets module.
//!
//! This module provides the autocomplete text input and the HTML/JSON
//! rendering of autocomplete responses.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "widgets")]
//! use reinhardt_autocomplete::widgets::{Attrs, TextWidget, Widget};
//! ```

#[cfg(feature = "widgets")]
pub use reinhardt_autocomplete_widgets::*;
