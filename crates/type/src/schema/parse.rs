// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Error, Result, schema::Column, value::Type};

pub(crate) fn parse_columns(text: &str) -> Result<Vec<Column>> {
	if text.trim().is_empty() {
		return Ok(vec![]);
	}
	text.split(',').map(parse_column).collect()
}

/// Parse a single `name:type` definition.
pub(crate) fn parse_column(definition: &str) -> Result<Column> {
	let Some((name, ty)) = definition.split_once(':') else {
		return Err(Error::InvalidColumn {
			definition: definition.trim().to_string(),
			reason: "expected <name>:<type>".to_string(),
		});
	};

	let name = name.trim();
	if name.is_empty() {
		return Err(Error::InvalidColumn {
			definition: definition.trim().to_string(),
			reason: "column name is empty".to_string(),
		});
	}

	Ok(Column::new(name, ty.parse::<Type>()?))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_column_trims() {
		assert_eq!(parse_column(" b :int ").unwrap(), Column::new("b", Type::Int4));
	}

	#[test]
	fn test_missing_type() {
		assert!(matches!(parse_column("b"), Err(Error::InvalidColumn { .. })));
	}

	#[test]
	fn test_missing_name() {
		assert!(matches!(parse_column(":int"), Err(Error::InvalidColumn { .. })));
	}

	#[test]
	fn test_unknown_type() {
		assert!(matches!(parse_column("a:whatever"), Err(Error::UnknownType { .. })));
	}
}
