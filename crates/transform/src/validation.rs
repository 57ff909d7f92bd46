// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Preconditions on the input schema, checked before any execution.

use std::fmt::{self, Display, Formatter};

use reifydb_type::Schema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const INPUT_HAS: &str = "input_has";
pub const INPUT_IS: &str = "input_is";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationRule {
	/// Required columns, sorted and deduplicated. Extra input columns are fine.
	InputHas(Vec<String>),
	/// The input schema must equal this one exactly, order included.
	InputIs(Schema),
}

impl ValidationRule {
	pub fn name(&self) -> &'static str {
		match self {
			ValidationRule::InputHas(_) => INPUT_HAS,
			ValidationRule::InputIs(_) => INPUT_IS,
		}
	}

	pub fn parse(name: &str, value: &str) -> Result<Self> {
		let name = name.trim().to_lowercase();
		let invalid = |reason: &str| Error::InvalidValidationRule {
			rule: name.clone(),
			reason: reason.to_string(),
		};

		match name.as_str() {
			INPUT_HAS => {
				let mut columns = Vec::new();
				for column in value.split(',') {
					let column = column.trim();
					if column.is_empty() {
						return Err(invalid("empty column name"));
					}
					columns.push(column.to_string());
				}
				columns.sort();
				columns.dedup();
				Ok(ValidationRule::InputHas(columns))
			}
			INPUT_IS => {
				let schema = Schema::parse(value)?;
				if schema.is_empty() {
					return Err(invalid("schema is empty"));
				}
				Ok(ValidationRule::InputIs(schema))
			}
			_ => Err(invalid("unknown rule")),
		}
	}

	pub fn check(&self, input: &Schema) -> Result<()> {
		match self {
			ValidationRule::InputHas(columns) => {
				let missing: Vec<&str> =
					columns.iter().map(String::as_str).filter(|c| !input.contains(c)).collect();
				if missing.is_empty() {
					Ok(())
				} else {
					Err(Error::ValidationFailed {
						rule: INPUT_HAS.to_string(),
						reason: format!("missing {} in [{input}]", missing.join(", ")),
					})
				}
			}
			ValidationRule::InputIs(expected) => {
				if expected == input {
					Ok(())
				} else {
					Err(Error::ValidationFailed {
						rule: INPUT_IS.to_string(),
						reason: format!("expected [{expected}], got [{input}]"),
					})
				}
			}
		}
	}
}

impl Display for ValidationRule {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ValidationRule::InputHas(columns) => write!(f, "{INPUT_HAS}: {}", columns.join(",")),
			ValidationRule::InputIs(schema) => write!(f, "{INPUT_IS}: {schema}"),
		}
	}
}

/// At most one rule per name, kept in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationRules {
	rules: Vec<ValidationRule>,
}

impl ValidationRules {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse `(name, value)` pairs. A later pair replaces an earlier one of the same name.
	pub fn parse<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
		let mut rules = Self::new();
		for (name, value) in pairs {
			rules.insert(ValidationRule::parse(name, value)?);
		}
		Ok(rules)
	}

	pub fn insert(&mut self, rule: ValidationRule) {
		match self.rules.binary_search_by(|r| r.name().cmp(rule.name())) {
			Ok(idx) => self.rules[idx] = rule,
			Err(idx) => self.rules.insert(idx, rule),
		}
	}

	pub fn with(mut self, rule: ValidationRule) -> Self {
		self.insert(rule);
		self
	}

	/// Rules of both sets; where both name the same rule, `other`'s wins.
	pub fn merge(mut self, other: ValidationRules) -> Self {
		for rule in other.rules {
			self.insert(rule);
		}
		self
	}

	pub fn get(&self, name: &str) -> Option<&ValidationRule> {
		self.rules.iter().find(|r| r.name() == name)
	}

	pub fn input_has(&self) -> Option<&[String]> {
		self.rules.iter().find_map(|r| match r {
			ValidationRule::InputHas(columns) => Some(columns.as_slice()),
			_ => None,
		})
	}

	pub fn input_is(&self) -> Option<&Schema> {
		self.rules.iter().find_map(|r| match r {
			ValidationRule::InputIs(schema) => Some(schema),
			_ => None,
		})
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
		self.rules.iter()
	}

	/// Check every rule, failing on the first violation.
	pub fn validate(&self, input: &Schema) -> Result<()> {
		self.rules.iter().try_for_each(|rule| rule.check(input))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn schema(text: &str) -> Schema {
		Schema::parse(text).unwrap()
	}

	#[test]
	fn test_input_has_is_normalized() {
		let rule = ValidationRule::parse(" Input_Has ", " b , a,b ").unwrap();
		assert_eq!(rule, ValidationRule::InputHas(vec!["a".to_string(), "b".to_string()]));
	}

	#[test]
	fn test_input_has_ignores_extra_columns() {
		let rules = ValidationRules::parse([("input_has", "a, b")]).unwrap();
		assert!(rules.validate(&schema("c:int,b:str,a:int")).is_ok());

		let err = rules.validate(&schema("a:int")).unwrap_err();
		assert!(matches!(err, Error::ValidationFailed { ref rule, .. } if rule == "input_has"));
	}

	#[test]
	fn test_input_is_exact() {
		let rules = ValidationRules::parse([("input_is", "a:int, b:int")]).unwrap();
		assert!(rules.validate(&schema("a:int,b:int")).is_ok());
		assert!(rules.validate(&schema("b:int,a:int")).is_err());
		assert!(rules.validate(&schema("a:int,b:int,c:int")).is_err());
	}

	#[test]
	fn test_one_rule_per_name() {
		let rules = ValidationRules::parse([("input_has", "a"), ("input_is", "a:int"), ("input_has", "b")]).unwrap();
		assert_eq!(rules.len(), 2);
		assert_eq!(rules.input_has(), Some(&["b".to_string()][..]));
		assert_eq!(rules.iter().map(ValidationRule::name).collect::<Vec<_>>(), vec![INPUT_HAS, INPUT_IS]);
	}

	#[test]
	fn test_merge_overrides_by_name() {
		let text = ValidationRules::parse([("input_has", "a, b"), ("input_is", "a:int,b:int")]).unwrap();
		let attached = ValidationRules::parse([("input_has", "a")]).unwrap();

		let merged = text.merge(attached);
		assert_eq!(merged.len(), 2);
		assert_eq!(merged.input_has(), Some(&["a".to_string()][..]));
		assert_eq!(merged.input_is(), Some(&schema("a:int,b:int")));
	}

	#[test]
	fn test_invalid_rules() {
		assert!(matches!(ValidationRule::parse("input_like", "a"), Err(Error::InvalidValidationRule { .. })));
		assert!(matches!(ValidationRule::parse("input_has", "a,,b"), Err(Error::InvalidValidationRule { .. })));
		assert!(matches!(ValidationRule::parse("input_is", " "), Err(Error::InvalidValidationRule { .. })));
		assert!(matches!(ValidationRule::parse("input_is", "a:nope"), Err(Error::Type(_))));
	}
}
