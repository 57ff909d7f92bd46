// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use reifydb_type::Schema;
use tracing::instrument;

use crate::{
	Error, Result,
	expression::{Part, SchemaExpression},
};

/// Resolve `expression` against a concrete input schema.
#[instrument(name = "transform::resolve", level = "trace", skip_all, fields(expression = %expression, input = %input))]
pub fn resolve(expression: &SchemaExpression, input: &Schema) -> Result<Schema> {
	match expression {
		SchemaExpression::Concrete(schema) => Ok(schema.clone()),
		SchemaExpression::Wildcard => Ok(input.clone()),
		SchemaExpression::WildcardMerge(parts) => merge(parts, input),
		SchemaExpression::Deferred => Err(Error::SchemaResolution {
			reason: "output schema is computed by the transformer instance".to_string(),
		}),
	}
}

fn merge(parts: &[Part], input: &Schema) -> Result<Schema> {
	let mut explicit = HashSet::new();
	for name in parts.iter().filter_map(Part::name) {
		if !explicit.insert(name) {
			return Err(Error::ConflictingSchema {
				column: name.to_string(),
			});
		}
	}

	let mut columns = Vec::new();
	for part in parts {
		match part {
			Part::Wildcard => {
				columns.extend(input.exclude(explicit.iter().copied()));
			}
			Part::Typed(column) => columns.push(column.clone()),
			Part::Keep(name) => {
				let column = input.find(name).ok_or_else(|| Error::SchemaResolution {
					reason: format!("column '{name}' is not in the input schema [{input}]"),
				})?;
				columns.push(column.clone());
			}
		}
	}

	Ok(Schema::new(columns)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn schema(text: &str) -> Schema {
		Schema::parse(text).unwrap()
	}

	fn resolve_text(expression: &str, input: &str) -> Result<Schema> {
		resolve(&SchemaExpression::parse(expression).unwrap(), &schema(input))
	}

	#[test]
	fn test_wildcard_then_column() {
		assert_eq!(resolve_text("*,b:int", "a:int").unwrap(), schema("a:int,b:int"));
	}

	#[test]
	fn test_column_then_wildcard() {
		assert_eq!(resolve_text("b:int,*", "a:int").unwrap(), schema("b:int,a:int"));
	}

	#[test]
	fn test_concrete_ignores_input() {
		assert_eq!(resolve_text("a:int,b:int", "x:str").unwrap(), schema("a:int,b:int"));
		assert_eq!(resolve_text("a:int,b:int", "").unwrap(), schema("a:int,b:int"));
	}

	#[test]
	fn test_wildcard_passes_input() {
		assert_eq!(resolve_text("*", "a:int,b:str").unwrap(), schema("a:int,b:str"));
	}

	#[test]
	fn test_explicit_column_overrides_wildcard_type() {
		assert_eq!(resolve_text("*,b:int", "a:int,b:str,c:int").unwrap(), schema("a:int,c:int,b:int"));
	}

	#[test]
	fn test_keep_uses_input_type() {
		assert_eq!(resolve_text("b,x:int", "a:int,b:str").unwrap(), schema("b:str,x:int"));
	}

	#[test]
	fn test_keep_missing_column() {
		assert!(matches!(resolve_text("b,x:int", "a:int"), Err(Error::SchemaResolution { .. })));
	}

	#[test]
	fn test_conflicting_columns() {
		assert_eq!(
			resolve_text("*,a:int,a:str", "x:int").unwrap_err(),
			Error::ConflictingSchema {
				column: "a".to_string()
			}
		);
	}

	#[test]
	fn test_deferred() {
		assert!(matches!(
			resolve(&SchemaExpression::Deferred, &Schema::empty()),
			Err(Error::SchemaResolution { .. })
		));
	}
}
