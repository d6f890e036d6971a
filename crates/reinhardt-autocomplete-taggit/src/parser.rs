//! Tag string parsing strategies
//!
//! A tag field accepts free text such as `rust, "web development", async`.
//! Two strategies are provided behind [`TagParser`]:
//!
//! - [`TaggitTagParser`] follows django-taggit: without commas or quotes the
//!   input is split on spaces, and the result is deduplicated and sorted.
//! - [`CommaTagParser`] only ever splits on commas, keeps the order tags were
//!   typed in, and rejects an unterminated quote.

use crate::error::{TaggitError, TaggitResult};
use std::collections::BTreeSet;

/// Longest accepted tag name, in characters
pub const MAX_TAG_LENGTH: usize = 100;

/// Converts between a tag edit string and tag names
pub trait TagParser: Send + Sync {
	/// Parse user input into tag names
	fn parse(&self, input: &str) -> TaggitResult<Vec<String>>;

	/// Render tag names back into a string `parse` accepts
	fn edit_string(&self, names: &[String]) -> String;
}

pub(crate) fn check_lengths(names: &[String]) -> TaggitResult<()> {
	for name in names {
		let len = name.chars().count();
		if len > MAX_TAG_LENGTH {
			return Err(TaggitError::TagNameTooLong {
				max: MAX_TAG_LENGTH,
				len,
			});
		}
	}
	Ok(())
}

fn split_strip(chunk: &str, delimiter: char) -> impl Iterator<Item = String> + '_ {
	chunk
		.split(delimiter)
		.map(str::trim)
		.filter(|word| !word.is_empty())
		.map(str::to_string)
}

/// django-taggit compatible parser
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_taggit::{TagParser, TaggitTagParser};
///
/// let parser = TaggitTagParser;
///
/// assert_eq!(parser.parse("python rust").unwrap(), vec!["python", "rust"]);
/// assert_eq!(
///     parser.parse(r#""web development", rust"#).unwrap(),
///     vec!["rust", "web development"]
/// );
/// assert_eq!(
///     parser.edit_string(&["rust".to_string(), "web development".to_string()]),
///     r#""web development", rust"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggitTagParser;

impl TagParser for TaggitTagParser {
	fn parse(&self, input: &str) -> TaggitResult<Vec<String>> {
		if input.is_empty() {
			return Ok(Vec::new());
		}

		let mut words: BTreeSet<String> = BTreeSet::new();

		if !input.contains(',') && !input.contains('"') {
			words.extend(split_strip(input, ' '));
		} else {
			let mut buffer = String::new();
			let mut to_be_split: Vec<String> = Vec::new();
			let mut saw_loose_comma = false;
			let mut open_quote = false;
			let mut chars = input.chars();

			while let Some(c) = chars.next() {
				if c == '"' {
					if !buffer.is_empty() {
						to_be_split.push(std::mem::take(&mut buffer));
					}
					open_quote = true;
					for quoted in chars.by_ref() {
						if quoted == '"' {
							open_quote = false;
							break;
						}
						buffer.push(quoted);
					}
					if open_quote {
						// input ended inside the quotes
						break;
					}
					let word = buffer.trim();
					if !word.is_empty() {
						words.insert(word.to_string());
					}
					buffer.clear();
				} else {
					if c == ',' {
						saw_loose_comma = true;
					}
					buffer.push(c);
				}
			}

			if !buffer.is_empty() {
				if open_quote && buffer.contains(',') {
					saw_loose_comma = true;
				}
				to_be_split.push(buffer);
			}

			let delimiter = if saw_loose_comma { ',' } else { ' ' };
			for chunk in &to_be_split {
				words.extend(split_strip(chunk, delimiter));
			}
		}

		let names: Vec<String> = words.into_iter().collect();
		check_lengths(&names)?;
		Ok(names)
	}

	fn edit_string(&self, names: &[String]) -> String {
		let mut quoted: Vec<String> = names
			.iter()
			.map(|name| {
				if name.contains(',') || name.contains(' ') {
					format!("\"{}\"", name)
				} else {
					name.clone()
				}
			})
			.collect();
		quoted.sort();
		quoted.join(", ")
	}
}

fn push_name(current: &mut String, names: &mut Vec<String>) {
	let name = current.trim().to_string();
	current.clear();
	if !name.is_empty() && !names.contains(&name) {
		names.push(name);
	}
}

/// Strict comma-separated parser
///
/// Commas inside double quotes are part of the tag name. Duplicates are
/// dropped, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use reinhardt_autocomplete_taggit::{CommaTagParser, TagParser};
///
/// let parser = CommaTagParser;
///
/// assert_eq!(
///     parser.parse(r#"rust, "a, b", go, rust"#).unwrap(),
///     vec!["rust", "a, b", "go"]
/// );
/// assert!(parser.parse(r#"rust, "open"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaTagParser;

impl TagParser for CommaTagParser {
	fn parse(&self, input: &str) -> TaggitResult<Vec<String>> {
		let mut names: Vec<String> = Vec::new();
		let mut current = String::new();
		let mut in_quotes = false;

		for c in input.chars() {
			match c {
				'"' => in_quotes = !in_quotes,
				',' if !in_quotes => push_name(&mut current, &mut names),
				_ => current.push(c),
			}
		}
		if in_quotes {
			tracing::debug!(input, "unterminated quote in tag input");
			return Err(TaggitError::invalid_tag_list());
		}
		push_name(&mut current, &mut names);

		check_lengths(&names)?;
		Ok(names)
	}

	fn edit_string(&self, names: &[String]) -> String {
		names
			.iter()
			.map(|name| {
				if name.contains(',') {
					format!("\"{}\"", name)
				} else {
					name.clone()
				}
			})
			.collect::<Vec<_>>()
			.join(", ")
	}
}
