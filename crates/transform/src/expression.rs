// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Output schema expressions.
//!
//! An expression is a comma separated list of fragments:
//!
//! - `name:type` declares a typed output column
//! - `name` keeps the input column `name` with its input type
//! - `*` splices in every input column not named elsewhere
//!
//! At most one wildcard is allowed. Expressions are normalized so that
//! equivalent inputs (text, schema values, fragment lists) compare equal
//! and render to the same canonical text.

use std::fmt::{self, Display, Formatter};

use reifydb_type::{Column, Schema};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A user supplied schema, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaHint {
	Text(String),
	Schema(Schema),
	Fragments(Vec<SchemaFragment>),
}

impl From<&str> for SchemaHint {
	fn from(value: &str) -> Self {
		SchemaHint::Text(value.to_string())
	}
}

impl From<String> for SchemaHint {
	fn from(value: String) -> Self {
		SchemaHint::Text(value)
	}
}

impl From<Schema> for SchemaHint {
	fn from(value: Schema) -> Self {
		SchemaHint::Schema(value)
	}
}

impl From<Vec<SchemaFragment>> for SchemaHint {
	fn from(value: Vec<SchemaFragment>) -> Self {
		SchemaHint::Fragments(value)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaFragment {
	Wildcard,
	/// Placeholder that contributes nothing.
	Skip,
	Text(String),
	Schema(Schema),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
	Wildcard,
	Typed(Column),
	/// Keep an input column with its input type.
	Keep(String),
}

impl Part {
	pub fn name(&self) -> Option<&str> {
		match self {
			Part::Wildcard => None,
			Part::Typed(column) => Some(&column.name),
			Part::Keep(name) => Some(name),
		}
	}
}

impl Display for Part {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Part::Wildcard => f.write_str("*"),
			Part::Typed(column) => Display::fmt(column, f),
			Part::Keep(name) => f.write_str(name),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaExpression {
	Concrete(Schema),
	Wildcard,
	WildcardMerge(Vec<Part>),
	/// Only the transformer instance knows its output schema.
	Deferred,
}

impl SchemaExpression {
	pub fn parse(text: &str) -> Result<Self> {
		Self::normalize(text, parse_parts(text)?)
	}

	pub fn from_hint(hint: &SchemaHint) -> Result<Self> {
		match hint {
			SchemaHint::Text(text) => Self::parse(text),
			SchemaHint::Schema(schema) => Ok(SchemaExpression::Concrete(schema.clone())),
			SchemaHint::Fragments(fragments) => {
				let mut parts = Vec::new();
				for fragment in fragments {
					match fragment {
						SchemaFragment::Wildcard => parts.push(Part::Wildcard),
						SchemaFragment::Skip => {}
						SchemaFragment::Text(text) => parts.extend(parse_parts(text)?),
						SchemaFragment::Schema(schema) => {
							parts.extend(schema.columns().iter().cloned().map(Part::Typed))
						}
					}
				}
				let text = parts.iter().map(Part::to_string).collect::<Vec<_>>().join(",");
				Self::normalize(&text, parts)
			}
		}
	}

	pub fn is_deferred(&self) -> bool {
		matches!(self, SchemaExpression::Deferred)
	}

	fn normalize(text: &str, parts: Vec<Part>) -> Result<Self> {
		if parts.is_empty() {
			return Err(Error::InvalidSchemaExpression {
				expression: text.to_string(),
				reason: "expression is empty".to_string(),
			});
		}

		let wildcards = parts.iter().filter(|p| matches!(p, Part::Wildcard)).count();
		if wildcards > 1 {
			return Err(Error::InvalidSchemaExpression {
				expression: text.to_string(),
				reason: format!("wildcard appears {wildcards} times"),
			});
		}

		if wildcards == 1 && parts.len() == 1 {
			return Ok(SchemaExpression::Wildcard);
		}

		if wildcards == 0 {
			let columns: Option<Vec<Column>> = parts
				.iter()
				.map(|p| match p {
					Part::Typed(column) => Some(column.clone()),
					_ => None,
				})
				.collect();
			// duplicates are left for the resolver to report
			if let Some(schema) = columns.and_then(|columns| Schema::new(columns).ok()) {
				return Ok(SchemaExpression::Concrete(schema));
			}
		}

		Ok(SchemaExpression::WildcardMerge(parts))
	}
}

fn parse_parts(text: &str) -> Result<Vec<Part>> {
	if text.trim().is_empty() {
		return Ok(vec![]);
	}

	text.split(',')
		.map(|fragment| {
			let fragment = fragment.trim();
			if fragment == "*" {
				Ok(Part::Wildcard)
			} else if fragment.contains(':') {
				Ok(Part::Typed(fragment.parse::<Column>()?))
			} else if fragment.is_empty() {
				Err(Error::InvalidSchemaExpression {
					expression: text.to_string(),
					reason: "empty fragment".to_string(),
				})
			} else {
				Ok(Part::Keep(fragment.to_string()))
			}
		})
		.collect()
}

impl Display for SchemaExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			SchemaExpression::Concrete(schema) => Display::fmt(schema, f),
			SchemaExpression::Wildcard => f.write_str("*"),
			SchemaExpression::WildcardMerge(parts) => {
				for (idx, part) in parts.iter().enumerate() {
					if idx > 0 {
						f.write_str(",")?;
					}
					Display::fmt(part, f)?;
				}
				Ok(())
			}
			SchemaExpression::Deferred => f.write_str("<deferred>"),
		}
	}
}
