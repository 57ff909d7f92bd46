// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{container::ContainerKind, operator::OperatorState};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("transformer '{name}' has an unsupported signature: {reason}")]
	UnsupportedSignature {
		name: String,
		reason: String,
	},

	#[error("transformer '{name}' declares no output schema")]
	MissingOutputSchema {
		name: String,
	},

	#[error("cannot resolve output schema: {reason}")]
	SchemaResolution {
		reason: String,
	},

	#[error("column '{column}' is declared more than once in the output schema")]
	ConflictingSchema {
		column: String,
	},

	#[error("validation rule '{rule}' failed: {reason}")]
	ValidationFailed {
		rule: String,
		reason: String,
	},

	#[error("alias '{alias}' is already registered")]
	DuplicateAlias {
		alias: String,
	},

	#[error("'{alias}' cannot be converted to a transformer")]
	InterfacelessResolution {
		alias: String,
	},

	#[error("operator '{name}' is {state}: {reason}")]
	NotReady {
		name: String,
		state: OperatorState,
		reason: String,
	},

	#[error("invalid schema expression '{expression}': {reason}")]
	InvalidSchemaExpression {
		expression: String,
		reason: String,
	},

	#[error("invalid validation rule '{rule}': {reason}")]
	InvalidValidationRule {
		rule: String,
		reason: String,
	},

	#[error("operator '{name}' was resolved against [{expected}], got [{actual}]")]
	InputSchemaChanged {
		name: String,
		expected: String,
		actual: String,
	},

	#[error("expected {expected}, got {actual}")]
	ContainerMismatch {
		expected: ContainerKind,
		actual: ContainerKind,
	},

	#[error("alias chain starting at '{alias}' exceeds {depth} hops")]
	AliasCycle {
		alias: String,
		depth: usize,
	},

	#[error("transformer execution failed: {reason}")]
	Execution {
		reason: String,
	},

	#[error("cannot encode identity of '{name}': {reason}")]
	Identity {
		name: String,
		reason: String,
	},

	#[error(transparent)]
	Type(#[from] reifydb_type::Error),
}

impl Error {
	/// Failure raised from inside a user transformer.
	pub fn execution(reason: impl Into<String>) -> Self {
		Error::Execution {
			reason: reason.into(),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Error::UnsupportedSignature {
				..
			} => "TRANSFORM_001",
			Error::MissingOutputSchema {
				..
			} => "TRANSFORM_002",
			Error::SchemaResolution {
				..
			} => "TRANSFORM_003",
			Error::ConflictingSchema {
				..
			} => "TRANSFORM_004",
			Error::ValidationFailed {
				..
			} => "TRANSFORM_005",
			Error::DuplicateAlias {
				..
			} => "TRANSFORM_006",
			Error::InterfacelessResolution {
				..
			} => "TRANSFORM_007",
			Error::NotReady {
				..
			} => "TRANSFORM_008",
			Error::InvalidSchemaExpression {
				..
			} => "TRANSFORM_009",
			Error::InvalidValidationRule {
				..
			} => "TRANSFORM_010",
			Error::InputSchemaChanged {
				..
			} => "TRANSFORM_011",
			Error::ContainerMismatch {
				..
			} => "TRANSFORM_012",
			Error::AliasCycle {
				..
			} => "TRANSFORM_013",
			Error::Execution {
				..
			} => "TRANSFORM_014",
			Error::Type(_) => "TRANSFORM_015",
			Error::Identity {
				..
			} => "TRANSFORM_016",
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
