// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Textual hints attached to a transformer, e.g.
//!
//! ```text
//! # schema: *, total:int
//! # input_has: price, quantity
//! ```
//!
//! One `key: value` pair per line. Comment markers are stripped, keys are
//! case-insensitive, unknown keys are ignored and the last occurrence of a
//! key wins.

use crate::validation::{INPUT_HAS, INPUT_IS};

pub const SCHEMA: &str = "schema";

const KEYS: [&str; 3] = [SCHEMA, INPUT_HAS, INPUT_IS];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
	entries: Vec<(String, String)>,
}

impl Hints {
	pub fn parse(text: &str) -> Self {
		let mut entries: Vec<(String, String)> = Vec::new();

		for line in text.lines() {
			let mut line = line.trim();
			let uncommented = line.trim_start_matches(['/', '#']);
			if uncommented.len() < line.len() {
				line = uncommented.strip_prefix('!').unwrap_or(uncommented).trim();
			}

			let Some((key, value)) = line.split_once(':') else {
				continue;
			};
			let key = key.trim().to_lowercase();
			if !KEYS.contains(&key.as_str()) {
				continue;
			}

			let value = value.trim().to_string();
			match entries.iter_mut().find(|(k, _)| *k == key) {
				Some(entry) => entry.1 = value,
				None => entries.push((key, value)),
			}
		}

		Self {
			entries,
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	pub fn schema(&self) -> Option<&str> {
		self.get(SCHEMA)
	}

	/// Validation rule pairs, in the order they were first declared.
	pub fn validation(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().filter(|(k, _)| k != SCHEMA).map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn entries(&self) -> &[(String, String)] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_comment_markers_stripped() {
		let hints = Hints::parse(
			r#"
			# schema: *, b:int
			// input_has: a, b
			/// input_is: a:int
			"#,
		);
		assert_eq!(hints.schema(), Some("*, b:int"));
		assert_eq!(hints.validation().collect::<Vec<_>>(), vec![("input_has", "a, b"), ("input_is", "a:int")]);
	}

	#[test]
	fn test_repeated_comment_markers_stripped() {
		let hints = Hints::parse("//// schema: *\n//! input_has: a\n## input_is: a:int");
		assert_eq!(hints.schema(), Some("*"));
		assert_eq!(hints.get("input_has"), Some("a"));
		assert_eq!(hints.get("input_is"), Some("a:int"));
	}

	#[test]
	fn test_keys_case_insensitive_last_wins() {
		let hints = Hints::parse("SCHEMA: a:int\nSchema : b:int");
		assert_eq!(hints.schema(), Some("b:int"));
		assert_eq!(hints.entries().len(), 1);
	}

	#[test]
	fn test_unknown_keys_ignored() {
		let hints = Hints::parse("author: someone\nno pair here\n//! note: x");
		assert!(hints.is_empty());
	}

	#[test]
	fn test_plain_lines() {
		let hints = Hints::parse("input_has: a");
		assert_eq!(hints.get("input_has"), Some("a"));
	}
}
