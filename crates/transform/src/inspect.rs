// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Static inspection of transformer sources.
//!
//! Inspection never runs user data through a transformer. It classifies
//! the declared signature into container kinds and collects the output
//! schema expression and validation rules from, in order of precedence:
//!
//! 1. the schema hint given at conversion time
//! 2. metadata attached with `with_schema` / `with_validation`
//! 3. textual hints attached with `with_hints`
//!
//! Class sources without any schema fall back to
//! [`SchemaExpression::Deferred`]; rules returned by
//! [`Transformer::validation_rules`] replace all other rules.

use tracing::{debug, instrument};

use crate::{
	Error, Result,
	candidate::{AnnotationConverter, Candidates, annotation_converters},
	container::ContainerKind,
	expression::SchemaExpression,
	hint::Hints,
	source::{Metadata, ParamType, Source, Transformer, TransformerClass, TransformFn},
	validation::ValidationRules,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Description {
	pub input: ContainerKind,
	pub output: ContainerKind,
	pub schema: SchemaExpression,
	pub validation: ValidationRules,
	/// Textual hints as parsed, for diagnostics.
	pub hints: Vec<(String, String)>,
	pub accepts_callback: bool,
}

/// Inspect a function, class or existing operator with the process-wide
/// annotation converters.
pub fn inspect(source: &Source, hint: Option<&SchemaExpression>) -> Result<Description> {
	match source {
		Source::Function(function) => inspect_function(function, hint, &annotation_converters()),
		Source::Class(class) => inspect_class(class, hint),
		Source::Instance(blueprint) => {
			let mut description = blueprint.description().clone();
			if let Some(hint) = hint {
				description.schema = hint.clone();
			}
			Ok(description)
		}
		Source::Alias(_) | Source::Custom(_) => Err(Error::InterfacelessResolution {
			alias: source.label().to_string(),
		}),
	}
}

#[instrument(name = "transform::inspect::function", level = "debug", skip_all, fields(name = function.name()))]
pub fn inspect_function(
	function: &TransformFn,
	hint: Option<&SchemaExpression>,
	annotations: &Candidates<AnnotationConverter>,
) -> Result<Description> {
	let name = function.name();
	let signature = function.signature();
	let unsupported = |reason: String| Error::UnsupportedSignature {
		name: name.to_string(),
		reason,
	};

	let Some((data, rest)) = signature.params.split_first() else {
		return Err(unsupported("expected a data parameter".to_string()));
	};

	let input = container_kind(&data.ty, annotations)
		.map_err(|reason| unsupported(format!("parameter '{}': {reason}", data.name)))?;

	let mut accepts_callback = false;
	for param in rest {
		if param.ty != ParamType::Callback {
			return Err(unsupported(format!("parameter '{}' must be a callback", param.name)));
		}
		if accepts_callback {
			return Err(unsupported("more than one callback parameter".to_string()));
		}
		accepts_callback = true;
	}

	let output = container_kind(&signature.output, annotations)
		.map_err(|reason| unsupported(format!("return type: {reason}")))?;

	let hints = parse_hints(&function.meta);
	let schema = match declared_schema(&function.meta, &hints, hint)? {
		Some(schema) => schema,
		None => {
			return Err(Error::MissingOutputSchema {
				name: name.to_string(),
			});
		}
	};
	let validation = declared_rules(&function.meta, &hints)?;

	debug!(%input, %output, %schema, "inspected function");
	Ok(Description {
		input,
		output,
		schema,
		validation,
		hints: hints.entries().to_vec(),
		accepts_callback,
	})
}

#[instrument(name = "transform::inspect::class", level = "debug", skip_all, fields(name = class.name()))]
pub fn inspect_class(class: &TransformerClass, hint: Option<&SchemaExpression>) -> Result<Description> {
	let hints = parse_hints(&class.meta);
	let schema = declared_schema(&class.meta, &hints, hint)?.unwrap_or(SchemaExpression::Deferred);

	let probe: Box<dyn Transformer> = class.instantiate()?;
	let validation = declared_rules(&class.meta, &hints)?.merge(probe.validation_rules());

	debug!(%schema, "inspected class");
	Ok(Description {
		input: ContainerKind::Frame,
		output: ContainerKind::Frame,
		schema,
		validation,
		hints: hints.entries().to_vec(),
		accepts_callback: true,
	})
}

fn container_kind(ty: &ParamType, annotations: &Candidates<AnnotationConverter>) -> std::result::Result<ContainerKind, String> {
	match ty {
		ParamType::Records => Ok(ContainerKind::Records),
		ParamType::Rows => Ok(ContainerKind::Rows),
		ParamType::Frame => Ok(ContainerKind::Frame),
		ParamType::Frames => Ok(ContainerKind::Frames),
		ParamType::Callback => Err("a callback is not a data container".to_string()),
		ParamType::Native(annotation) => {
			annotations.kind_of(annotation).ok_or_else(|| format!("unrecognized annotation '{annotation}'"))
		}
	}
}

fn parse_hints(meta: &Metadata) -> Hints {
	meta.hints.as_deref().map(Hints::parse).unwrap_or_default()
}

fn declared_schema(meta: &Metadata, hints: &Hints, hint: Option<&SchemaExpression>) -> Result<Option<SchemaExpression>> {
	if let Some(hint) = hint {
		return Ok(Some(hint.clone()));
	}
	if let Some(schema) = &meta.schema {
		return SchemaExpression::from_hint(schema).map(Some);
	}
	hints.schema().map(SchemaExpression::parse).transpose()
}

/// Textual rules overridden per rule name by attached ones.
fn declared_rules(meta: &Metadata, hints: &Hints) -> Result<ValidationRules> {
	let attached = ValidationRules::parse(meta.validation.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
	Ok(ValidationRules::parse(hints.validation())?.merge(attached))
}
