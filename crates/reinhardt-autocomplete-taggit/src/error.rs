use reinhardt_autocomplete_core::AutocompleteError;
use thiserror::Error;

/// Message shown to form users when tag input cannot be parsed
pub const INVALID_TAG_LIST_MESSAGE: &str = "Please provide a comma-separated list of tags.";

/// Errors that can occur while parsing, cleaning or rendering tags
#[derive(Debug, Error)]
pub enum TaggitError {
	/// Input is not a usable tag list
	#[error("{0}")]
	Validation(String),

	/// Tag name exceeds maximum length
	#[error("Tag name too long: maximum {max} characters, got {len}")]
	TagNameTooLong { max: usize, len: usize },

	/// A required tag field was left empty
	#[error("This field is required.")]
	Required,

	/// Resolving tags through an autocomplete failed
	#[error("Tag lookup failed: {0}")]
	Lookup(#[from] AutocompleteError),
}

impl TaggitError {
	/// The validation error raised for malformed tag input
	pub fn invalid_tag_list() -> Self {
		Self::Validation(INVALID_TAG_LIST_MESSAGE.to_string())
	}
}

/// Result type for taggit operations
pub type TaggitResult<T> = std::result::Result<T, TaggitError>;
