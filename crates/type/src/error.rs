// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("unknown type '{name}'")]
	UnknownType {
		name: String,
	},

	#[error("invalid column definition '{definition}': {reason}")]
	InvalidColumn {
		definition: String,
		reason: String,
	},

	#[error("duplicate column '{name}'")]
	DuplicateColumn {
		name: String,
	},

	#[error("column '{name}' is {existing}, cannot merge with {incoming}")]
	IncompatibleColumn {
		name: String,
		existing: Type,
		incoming: Type,
	},

	#[error("row {index} has {actual} values, expected {expected}")]
	RowWidth {
		index: usize,
		expected: usize,
		actual: usize,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
