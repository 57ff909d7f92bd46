// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_type::Value;
use serde::{Deserialize, Serialize};

use super::{Metadata, Params};
use crate::{
	Error, Result,
	container::{Container, ContainerKind, Data},
	expression::SchemaHint,
};

/// Declared type of a parameter or of the return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
	Records,
	Rows,
	Frame,
	Frames,
	Callback,
	/// An engine specific annotation, mapped by annotation converters.
	Native(String),
}

impl From<ContainerKind> for ParamType {
	fn from(value: ContainerKind) -> Self {
		match value {
			ContainerKind::Records => ParamType::Records,
			ContainerKind::Rows => ParamType::Rows,
			ContainerKind::Frame => ParamType::Frame,
			ContainerKind::Frames => ParamType::Frames,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
	pub name: String,
	pub ty: ParamType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	pub params: Vec<Param>,
	pub output: ParamType,
}

impl Signature {
	pub fn new(output: ParamType) -> Self {
		Self {
			params: vec![],
			output,
		}
	}

	pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
		self.params.push(Param {
			name: name.into(),
			ty,
		});
		self
	}
}

pub type Callback = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// What a running transformer can see besides its data.
pub struct TransformContext<'a> {
	params: &'a Params,
	callback: Option<&'a Callback>,
}

impl<'a> TransformContext<'a> {
	pub fn new(params: &'a Params, callback: Option<&'a Callback>) -> Self {
		Self {
			params,
			callback,
		}
	}

	pub fn params(&self) -> &Params {
		self.params
	}

	pub fn param(&self, name: &str) -> Option<&Value> {
		self.params.get(name)
	}

	pub fn has_callback(&self) -> bool {
		self.callback.is_some()
	}

	pub fn call(&self, value: Value) -> Result<Value> {
		match self.callback {
			Some(callback) => callback(value),
			None => Err(Error::execution("no callback installed")),
		}
	}
}

pub type FnBody = Arc<dyn Fn(Data, &TransformContext<'_>) -> Result<Data> + Send + Sync>;

/// A plain function together with its declared signature and metadata.
#[derive(Clone)]
pub struct TransformFn {
	name: String,
	signature: Signature,
	body: FnBody,
	pub(crate) meta: Metadata,
	params: Params,
}

impl TransformFn {
	pub fn new<I, O, F>(name: impl Into<String>, f: F) -> Self
	where
		I: Container,
		O: Container,
		F: Fn(I) -> Result<O> + Send + Sync + 'static,
	{
		Self::declare(
			name,
			Signature::new(O::KIND.into()).param("data", I::KIND.into()),
			move |data, _| Ok(f(I::from_data(data)?)?.into_data()),
		)
	}

	/// Like [`TransformFn::new`], with access to bound params.
	pub fn with_context<I, O, F>(name: impl Into<String>, f: F) -> Self
	where
		I: Container,
		O: Container,
		F: Fn(I, &TransformContext<'_>) -> Result<O> + Send + Sync + 'static,
	{
		Self::declare(
			name,
			Signature::new(O::KIND.into()).param("data", I::KIND.into()),
			move |data, ctx| Ok(f(I::from_data(data)?, ctx)?.into_data()),
		)
	}

	/// A function that also takes a callback the engine installs.
	pub fn with_callback<I, O, F>(name: impl Into<String>, f: F) -> Self
	where
		I: Container,
		O: Container,
		F: Fn(I, &TransformContext<'_>) -> Result<O> + Send + Sync + 'static,
	{
		Self::declare(
			name,
			Signature::new(O::KIND.into()).param("data", I::KIND.into()).param("callback", ParamType::Callback),
			move |data, ctx| Ok(f(I::from_data(data)?, ctx)?.into_data()),
		)
	}

	/// A function with an explicit signature. The body receives data in the
	/// container kind the signature's first parameter resolves to.
	pub fn declare(
		name: impl Into<String>,
		signature: Signature,
		body: impl Fn(Data, &TransformContext<'_>) -> Result<Data> + Send + Sync + 'static,
	) -> Self {
		Self {
			name: name.into(),
			signature,
			body: Arc::new(body),
			meta: Metadata::default(),
			params: Params::new(),
		}
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

	pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.params.insert(name.into(), value.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	pub fn params(&self) -> &Params {
		&self.params
	}

	pub(crate) fn body(&self) -> &FnBody {
		&self.body
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Frame, Schema};

	use super::*;
	use crate::container::RowStream;

	#[test]
	fn test_signature_from_container_types() {
		let f = TransformFn::new("rows_to_frame", |rows: RowStream| -> Result<Frame> {
			let rows = rows.collect();
			Ok(Frame::new(Schema::parse("a:int")?, rows)?)
		});
		assert_eq!(f.signature().params.len(), 1);
		assert_eq!(f.signature().params[0].ty, ParamType::Rows);
		assert_eq!(f.signature().output, ParamType::Frame);
	}

	#[test]
	fn test_callback_signature() {
		let f = TransformFn::with_callback("cb", |frame: Frame, _ctx: &TransformContext<'_>| Ok(frame));
		assert_eq!(f.signature().params[1].ty, ParamType::Callback);
	}

	#[test]
	fn test_context_call_without_callback() {
		let params = Params::new();
		let ctx = TransformContext::new(&params, None);
		assert!(matches!(ctx.call(Value::Int4(1)), Err(Error::Execution { .. })));
	}

	#[test]
	fn test_context_call() {
		let params = Params::new();
		let callback: Callback =
			Arc::new(|v: Value| -> Result<Value> { Ok(Value::Int8(v.as_i128().unwrap_or(0) as i64 * 2)) });
		let ctx = TransformContext::new(&params, Some(&callback));
		assert_eq!(ctx.call(Value::Int4(21)).unwrap(), Value::Int8(42));
	}

	#[test]
	fn test_builders_capture_metadata() {
		let f = TransformFn::new("f", |frame: Frame| Ok(frame))
			.with_schema("*")
			.with_validation("input_has", "a")
			.with_hints("schema: a:int")
			.bind("x", 1i32);
		assert_eq!(f.meta.schema, Some(SchemaHint::Text("*".to_string())));
		assert_eq!(f.meta.validation, vec![("input_has".to_string(), "a".to_string())]);
		assert_eq!(f.params().get("x"), Some(&Value::Int4(1)));
	}
}
