// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The uniform operator handed to execution engines.
//!
//! An engine drives an operator through a fixed sequence: resolve the
//! output schema for its input schema, optionally validate, then execute
//! exactly once. Streams returned by [`TransformOperator::execute`] are lazy
//! and mark the operator done once drained.

mod blueprint;
mod state;

use std::{
	collections::HashMap,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

pub use blueprint::Blueprint;
pub(crate) use blueprint::Callable;
use reifydb_type::{Frame, Schema, Value};
pub use state::OperatorState;
use state::{Finishing, Lifecycle};
use tracing::{debug, instrument};

use crate::{
	Error, Result,
	container::Data,
	expression::SchemaExpression,
	identity::IdentityDigest,
	inspect::Description,
	resolve::resolve,
	source::{Callback, TransformContext, Transformer},
};

pub struct TransformOperator {
	blueprint: Blueprint,
	lifecycle: Lifecycle,
	/// (input, output) of the first successful resolution.
	resolved: Option<(Schema, Schema)>,
	instance: Option<Box<dyn Transformer>>,
	callback: Option<Callback>,
	attributes: HashMap<String, Value>,
}

impl TransformOperator {
	pub(crate) fn new(blueprint: Blueprint) -> Self {
		Self {
			blueprint,
			lifecycle: Lifecycle::default(),
			resolved: None,
			instance: None,
			callback: None,
			attributes: HashMap::new(),
		}
	}

	pub fn name(&self) -> &str {
		self.blueprint.name()
	}

	pub fn blueprint(&self) -> &Blueprint {
		&self.blueprint
	}

	pub fn description(&self) -> &Description {
		self.blueprint.description()
	}

	pub fn state(&self) -> OperatorState {
		self.lifecycle.get()
	}

	pub fn identity(&self) -> IdentityDigest {
		self.blueprint.identity()
	}

	/// Output schema for `input`. Computed once; later calls must pass the same input.
	#[instrument(name = "transform::operator::output_schema", level = "debug", skip_all, fields(name = self.blueprint.name(), input = %input))]
	pub fn output_schema(&mut self, input: &Schema) -> Result<Schema> {
		if let Some((expected, output)) = &self.resolved {
			if expected == input {
				return Ok(output.clone());
			}
			return Err(Error::InputSchemaChanged {
				name: self.name().to_string(),
				expected: expected.to_string(),
				actual: input.to_string(),
			});
		}

		let output = match self.blueprint.description().schema.clone() {
			SchemaExpression::Deferred => self.instance()?.output_schema(input)?,
			expression => resolve(&expression, input)?,
		};

		debug!(output = %output, "resolved output schema");
		self.resolved = Some((input.clone(), output.clone()));
		self.lifecycle.advance(OperatorState::SchemaResolved);
		Ok(output)
	}

	/// Check the validation rules against `input` without executing anything.
	///
	/// Only a successful check of the resolved input schema marks the
	/// operator validated.
	#[instrument(name = "transform::operator::validate", level = "debug", skip_all, fields(name = self.blueprint.name(), input = %input))]
	pub fn validate(&mut self, input: &Schema) -> Result<()> {
		self.blueprint.description().validation.validate(input)?;
		let resolved = self.resolved.as_ref().is_some_and(|(expected, _)| expected == input);
		if resolved && self.state() == OperatorState::SchemaResolved {
			self.lifecycle.advance(OperatorState::Validated);
		}
		Ok(())
	}

	/// Run the transformer over `data`.
	///
	/// `data` may come in any container kind; it is converted to the kind
	/// the transformer declares using the resolved input schema.
	#[instrument(name = "transform::operator::execute", level = "debug", skip_all, fields(name = self.blueprint.name(), kind = %data.kind()))]
	pub fn execute(&mut self, data: Data) -> Result<Data> {
		let Some((input, _)) = self.resolved.clone() else {
			return Err(self.not_ready("output schema has not been resolved"));
		};
		if self.state() >= OperatorState::Executing {
			return Err(self.not_ready("operator has already executed"));
		}
		if let Data::Frame(frame) = &data {
			if frame.schema() != &input {
				return Err(Error::InputSchemaChanged {
					name: self.name().to_string(),
					expected: input.to_string(),
					actual: frame.schema().to_string(),
				});
			}
		}
		if self.state() != OperatorState::Validated {
			self.validate(&input)?;
		}

		self.lifecycle.advance(OperatorState::Executing);
		let result = self.run(data, &input);
		if result.is_err() {
			self.lifecycle.advance(OperatorState::Done);
		}
		let output = result?;

		let expected = self.blueprint.description().output;
		if output.kind() != expected {
			self.lifecycle.advance(OperatorState::Done);
			return Err(Error::ContainerMismatch {
				expected,
				actual: output.kind(),
			});
		}

		let lifecycle = self.lifecycle.clone();
		Ok(match output {
			Data::Frame(frame) => {
				lifecycle.advance(OperatorState::Done);
				Data::Frame(frame)
			}
			Data::Records(records) => Data::Records(Box::new(Finishing::new(records, lifecycle))),
			Data::Rows(rows) => Data::Rows(Box::new(Finishing::new(rows, lifecycle))),
			Data::Frames(frames) => Data::Frames(Box::new(Finishing::new(frames, lifecycle))),
		})
	}

	/// Resolve, execute and materialize in one step.
	pub fn execute_frame(&mut self, frame: Frame) -> Result<Frame> {
		let output = self.output_schema(frame.schema())?;
		self.execute(Data::Frame(frame))?.into_frame(&output)
	}

	fn run(&mut self, data: Data, input: &Schema) -> Result<Data> {
		let data = data.convert(self.blueprint.description().input, input)?;
		if matches!(self.blueprint.callable, Callable::Class(_)) {
			self.instance()?;
		}

		let ctx = TransformContext::new(self.blueprint.params(), self.callback.as_ref());
		match (&self.blueprint.callable, self.instance.as_mut()) {
			(Callable::Function(body), _) => body(data, &ctx),
			(Callable::Class(_), Some(instance)) => Ok(Data::Frame(instance.transform(data.into_frame(input)?, &ctx)?)),
			(Callable::Class(_), None) => Err(Error::execution("transformer was not instantiated")),
		}
	}

	/// This operator's own transformer instance, created on first use.
	fn instance(&mut self) -> Result<&mut Box<dyn Transformer>> {
		if self.instance.is_none() {
			let Callable::Class(factory) = &self.blueprint.callable else {
				return Err(Error::SchemaResolution {
					reason: format!("function '{}' has no transformer instance", self.name()),
				});
			};
			self.instance = Some(factory(self.blueprint.params())?);
		}
		self.instance.as_mut().ok_or_else(|| Error::execution("transformer was not instantiated"))
	}

	fn not_ready(&self, reason: &str) -> Error {
		Error::NotReady {
			name: self.name().to_string(),
			state: self.state(),
			reason: reason.to_string(),
		}
	}

	/// Install the callback handed to transformers that accept one.
	pub fn set_callback(&mut self, callback: impl Fn(Value) -> Result<Value> + Send + Sync + 'static) {
		self.callback = Some(Arc::new(callback));
	}

	/// Attach an ad hoc value to this operator only.
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.attributes.insert(key.into(), value.into());
	}

	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.get(key)
	}
}

impl Debug for TransformOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("TransformOperator")
			.field("name", &self.name())
			.field("state", &self.state())
			.field("identity", &self.identity().to_string())
			.finish_non_exhaustive()
	}
}
