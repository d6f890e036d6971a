//! Tag parser property-based tests
//!
//! Properties shared by both parsing strategies.

use proptest::prelude::*;
use reinhardt_autocomplete_taggit::{CommaTagParser, TagParser, TaggitTagParser};

proptest! {
	/// Test: taggit parser output is sorted, unique and trimmed
	///
	/// Category: Property
	#[test]
	fn prop_taggit_output_sorted_unique(input in "[a-c ,\"]{0,24}") {
		let names = TaggitTagParser.parse(&input).unwrap();

		let mut expected = names.clone();
		expected.sort();
		expected.dedup();
		prop_assert_eq!(&names, &expected);
		for name in &names {
			prop_assert!(!name.is_empty());
			prop_assert_eq!(name.trim(), name.as_str());
		}
	}

	/// Test: edit strings parse back to the same names
	///
	/// Category: Property
	#[test]
	fn prop_edit_string_reparses(names in prop::collection::btree_set("[a-c]{1,3}( [a-c]{1,3})?", 0..6)) {
		let names: Vec<String> = names.into_iter().collect();

		let taggit = TaggitTagParser.parse(&TaggitTagParser.edit_string(&names)).unwrap();
		let comma = CommaTagParser.parse(&CommaTagParser.edit_string(&names)).unwrap();

		prop_assert_eq!(taggit, names.clone());
		prop_assert_eq!(comma, names);
	}
}
