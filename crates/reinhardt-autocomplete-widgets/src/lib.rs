//! # reinhardt-autocomplete-widgets
//!
//! HTML side of autocompletes: the text input the client-side script binds
//! to, and the HTML or JSON fragments returned for a request.
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_autocomplete_widgets::{Attrs, TextWidget, Widget};
//!
//! let widget = TextWidget::new("PersonAutocomplete");
//! let html = widget.render("author", None, &Attrs::new().with("placeholder", "Name"));
//!
//! assert!(html.contains(r#"class="autocomplete-light-text-widget""#));
//! assert!(html.contains(r#"placeholder="Name""#));
//! ```

pub mod choice_html;
pub mod text_widget;
pub mod widget;

pub use choice_html::{EMPTY_CHOICES_HTML, autocomplete_html, autocomplete_json, choice_html};
pub use text_widget::{TEXT_WIDGET_CLASS, TextWidget};
pub use widget::{Attrs, Widget, value_to_text};
