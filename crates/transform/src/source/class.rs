// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_type::{Frame, Schema, Value};

use super::{Metadata, Params, TransformContext};
use crate::{Result, expression::SchemaHint, validation::ValidationRules};

/// A stateful transformer. Every operator gets its own instance.
pub trait Transformer: Send {
	/// Output schema for `input`; consulted only when no schema is declared.
	fn output_schema(&self, input: &Schema) -> Result<Schema>;

	/// Rules declared by the type itself. When non-empty they replace any
	/// rules given as attributes or textual hints.
	fn validation_rules(&self) -> ValidationRules {
		ValidationRules::default()
	}

	fn transform(&mut self, frame: Frame, ctx: &TransformContext<'_>) -> Result<Frame>;
}

pub type Factory = Arc<dyn Fn(&Params) -> Result<Box<dyn Transformer>> + Send + Sync>;

/// A named way to create [`Transformer`] instances.
#[derive(Clone)]
pub struct TransformerClass {
	name: String,
	factory: Factory,
	params: Params,
	pub(crate) meta: Metadata,
}

impl TransformerClass {
	pub fn new(
		name: impl Into<String>,
		factory: impl Fn(&Params) -> Result<Box<dyn Transformer>> + Send + Sync + 'static,
	) -> Self {
		Self {
			name: name.into(),
			factory: Arc::new(factory),
			params: Params::new(),
			meta: Metadata::default(),
		}
	}

	/// A class for a transformer without constructor parameters.
	pub fn of<T: Transformer + Default + 'static>(name: impl Into<String>) -> Self {
		Self::new(name, |_| Ok(Box::new(T::default())))
	}

	/// Bind a constructor parameter.
	pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.params.insert(name.into(), value.into());
		self
	}

	pub fn with_schema(mut self, schema: impl Into<SchemaHint>) -> Self {
		self.meta.schema = Some(schema.into());
		self
	}

	pub fn with_validation(mut self, rule: impl Into<String>, value: impl Into<String>) -> Self {
		self.meta.validation.push((rule.into(), value.into()));
		self
	}

	pub fn with_hints(mut self, text: impl Into<String>) -> Self {
		self.meta.hints = Some(text.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn params(&self) -> &Params {
		&self.params
	}

	pub fn factory(&self) -> &Factory {
		&self.factory
	}

	pub fn instantiate(&self) -> Result<Box<dyn Transformer>> {
		(self.factory)(&self.params)
	}
}
