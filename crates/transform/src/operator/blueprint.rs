// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use crate::{
	Result,
	candidate::{AnnotationConverter, Candidates},
	expression::SchemaExpression,
	identity::{IdentityDigest, SourceKind, digest},
	inspect::{Description, inspect_class, inspect_function},
	source::{Factory, FnBody, Params, TransformFn, TransformerClass},
};

#[derive(Clone)]
pub(crate) enum Callable {
	Function(FnBody),
	Class(Factory),
}

/// Immutable configuration an operator is built from.
///
/// Cloning a blueprint copies configuration only; operators built from the
/// clone share no mutable state with operators built from the original.
#[derive(Clone)]
pub struct Blueprint {
	name: String,
	kind: SourceKind,
	description: Description,
	params: Params,
	pub(crate) callable: Callable,
	digest: IdentityDigest,
}

impl Blueprint {
	pub(crate) fn from_function(
		function: &TransformFn,
		hint: Option<&SchemaExpression>,
		annotations: &Candidates<AnnotationConverter>,
	) -> Result<Self> {
		let description = inspect_function(function, hint, annotations)?;
		Self::new(
			function.name(),
			SourceKind::Function,
			description,
			function.params().clone(),
			Callable::Function(function.body().clone()),
		)
	}

	pub(crate) fn from_class(class: &TransformerClass, hint: Option<&SchemaExpression>) -> Result<Self> {
		let description = inspect_class(class, hint)?;
		Self::new(
			class.name(),
			SourceKind::Class,
			description,
			class.params().clone(),
			Callable::Class(class.factory().clone()),
		)
	}

	fn new(name: &str, kind: SourceKind, description: Description, params: Params, callable: Callable) -> Result<Self> {
		let digest = digest(kind, name, &description, &params)?;
		Ok(Self {
			name: name.to_string(),
			kind,
			description,
			params,
			callable,
			digest,
		})
	}

	/// The same configuration with `schema` replacing the output schema.
	pub fn with_schema(&self, schema: SchemaExpression) -> Result<Self> {
		let mut description = self.description.clone();
		description.schema = schema;
		Self::new(&self.name, self.kind, description, self.params.clone(), self.callable.clone())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> SourceKind {
		self.kind
	}

	pub fn description(&self) -> &Description {
		&self.description
	}

	pub fn params(&self) -> &Params {
		&self.params
	}

	pub fn identity(&self) -> IdentityDigest {
		self.digest
	}
}

impl Debug for Blueprint {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Blueprint")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("description", &self.description)
			.field("params", &self.params)
			.finish_non_exhaustive()
	}
}
