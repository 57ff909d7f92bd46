// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! What a user can hand to the converter.

mod class;
mod function;

use std::{
	any::Any,
	collections::BTreeMap,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

pub use class::{Factory, Transformer, TransformerClass};
pub use function::{Callback, FnBody, Param, ParamType, Signature, TransformContext, TransformFn};
use reifydb_type::Value;

use crate::{
	expression::SchemaHint,
	operator::{Blueprint, TransformOperator},
};

/// Parameters bound to a transformer at creation time.
pub type Params = BTreeMap<String, Value>;

/// Attached metadata, as opposed to anything derived from the callable itself.
#[derive(Debug, Clone, Default)]
pub(crate) struct Metadata {
	pub(crate) schema: Option<SchemaHint>,
	pub(crate) validation: Vec<(String, String)>,
	pub(crate) hints: Option<String>,
}

/// An opaque value only registered source candidates know how to handle.
#[derive(Clone)]
pub struct CustomSource {
	type_name: &'static str,
	value: Arc<dyn Any + Send + Sync>,
}

impl CustomSource {
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			value: Arc::new(value),
		}
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.value.downcast_ref::<T>()
	}

	pub fn is<T: Any>(&self) -> bool {
		self.value.is::<T>()
	}
}

#[derive(Clone)]
pub enum Source {
	Function(TransformFn),
	Class(TransformerClass),
	Alias(String),
	Instance(Blueprint),
	Custom(CustomSource),
}

impl Source {
	pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
		Source::Custom(CustomSource::new(value))
	}

	pub fn tag(&self) -> &'static str {
		match self {
			Source::Function(_) => "function",
			Source::Class(_) => "class",
			Source::Alias(_) => "alias",
			Source::Instance(_) => "instance",
			Source::Custom(_) => "custom",
		}
	}

	/// Name used in diagnostics.
	pub fn label(&self) -> &str {
		match self {
			Source::Function(f) => f.name(),
			Source::Class(c) => c.name(),
			Source::Alias(alias) => alias,
			Source::Instance(blueprint) => blueprint.name(),
			Source::Custom(custom) => custom.type_name(),
		}
	}
}

impl Debug for Source {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Source::{}({})", self.tag(), self.label())
	}
}

impl From<TransformFn> for Source {
	fn from(value: TransformFn) -> Self {
		Source::Function(value)
	}
}

impl From<TransformerClass> for Source {
	fn from(value: TransformerClass) -> Self {
		Source::Class(value)
	}
}

impl From<&str> for Source {
	fn from(value: &str) -> Self {
		Source::Alias(value.to_string())
	}
}

impl From<String> for Source {
	fn from(value: String) -> Self {
		Source::Alias(value)
	}
}

impl From<Blueprint> for Source {
	fn from(value: Blueprint) -> Self {
		Source::Instance(value)
	}
}

impl From<&TransformOperator> for Source {
	fn from(value: &TransformOperator) -> Self {
		Source::Instance(value.blueprint().clone())
	}
}

impl From<CustomSource> for Source {
	fn from(value: CustomSource) -> Self {
		Source::Custom(value)
	}
}
