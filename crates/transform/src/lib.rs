// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Interfaceless transformers.
//!
//! User code supplies a transformation as a plain function, a transformer
//! type, a registered alias or an existing operator. [`to_operator`] turns
//! any of these into a [`TransformOperator`]: a uniform, schema-typed unit
//! with a deterministic [`IdentityDigest`] that engines drive through
//! `output_schema`, `validate` and `execute`.
//!
//! ```ignore
//! let add_total = TransformFn::new("add_total", |frame: Frame| -> Result<Frame> { ... })
//!     .with_hints("schema: *, total:int\ninput_has: price, quantity");
//!
//! register_transformer("add_total", add_total, OnDuplicate::Throw)?;
//! let mut op = to_operator("add_total", None)?;
//! let output = op.output_schema(&input)?;
//! ```

pub mod candidate;
pub mod config;
pub mod container;
pub mod convert;
pub mod error;
pub mod expression;
pub mod hint;
pub mod identity;
pub mod inspect;
pub mod operator;
pub mod registry;
pub mod resolve;
pub mod scope;
pub mod source;
pub mod validation;

pub use candidate::{AnnotationConverter, register_annotation_converter, register_source_candidate};
pub use config::{ConverterBuilder, ConverterConfig};
pub use container::{ContainerKind, Data, FrameStream, RecordStream, RowStream};
pub use convert::Converter;
pub use error::{Error, Result};
pub use expression::{SchemaExpression, SchemaFragment, SchemaHint};
pub use identity::IdentityDigest;
pub use inspect::Description;
pub use operator::{Blueprint, OperatorState, TransformOperator};
pub use registry::{OnDuplicate, Registry};
pub use resolve::resolve;
pub use scope::Scope;
pub use source::{
	CustomSource, Params, ParamType, Signature, Source, TransformContext, TransformFn, Transformer,
	TransformerClass,
};
pub use validation::{ValidationRule, ValidationRules};

/// Register `source` under `alias` in the process-wide registry.
pub fn register_transformer(alias: &str, source: impl Into<Source>, on_duplicate: OnDuplicate) -> Result<()> {
	Registry::global().register(alias, source.into(), on_duplicate)
}

/// Convert `source` into a fresh operator using the process-wide registry
/// and candidates.
pub fn to_operator(source: impl Into<Source>, hint: Option<SchemaHint>) -> Result<TransformOperator> {
	Converter::default().to_operator(source, hint)
}
