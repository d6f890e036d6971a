use thiserror::Error;

/// Errors raised while configuring or running an autocomplete
#[derive(Debug, Error)]
pub enum AutocompleteError {
	/// The autocomplete is missing something it needs before it can filter
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// A search field specifier could not be parsed
	#[error("Invalid search field: {0}")]
	InvalidSearchField(String),

	/// Query parameters could not be decoded
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	/// Configuration file could not be parsed
	#[error("Failed to parse autocomplete configuration: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type for autocomplete operations
pub type AutocompleteResult<T> = std::result::Result<T, AutocompleteError>;
