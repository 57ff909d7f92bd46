// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Turning any supported source into a fresh [`TransformOperator`].
//!
//! Resolution order:
//!
//! 1. source candidates, highest priority first
//! 2. functions and classes are inspected directly
//! 3. existing operators contribute their configuration, never their state
//! 4. aliases resolve through the registry, then the scope
//!
//! Anything left over fails with [`Error::InterfacelessResolution`].

use tracing::{debug, instrument};

use crate::{
	Error, Result,
	config::{ConverterBuilder, ConverterConfig},
	expression::{SchemaExpression, SchemaHint},
	operator::{Blueprint, TransformOperator},
	source::Source,
};

pub struct Converter {
	config: ConverterConfig,
}

impl Default for Converter {
	fn default() -> Self {
		ConverterBuilder::new().build()
	}
}

impl Converter {
	pub(crate) fn new(config: ConverterConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn builder() -> ConverterBuilder {
		ConverterBuilder::new()
	}

	pub fn config(&self) -> &ConverterConfig {
		&self.config
	}

	/// Register `source` under `alias` with the configured duplicate policy.
	pub fn register(&self, alias: &str, source: impl Into<Source>) -> Result<()> {
		self.config.registry.register(alias, source.into(), self.config.on_duplicate)
	}

	/// Build a new operator. `hint` replaces whatever schema the source declares.
	#[instrument(name = "transform::convert::to_operator", level = "debug", skip_all)]
	pub fn to_operator(&self, source: impl Into<Source>, hint: Option<SchemaHint>) -> Result<TransformOperator> {
		let source = source.into();
		let hint = hint.as_ref().map(SchemaExpression::from_hint).transpose()?;
		let blueprint = self.blueprint(source, hint.as_ref(), 0)?;
		debug!(name = blueprint.name(), identity = %blueprint.identity(), "converted");
		Ok(TransformOperator::new(blueprint))
	}

	/// `depth` counts the hops already followed to reach `source`.
	fn blueprint(&self, source: Source, hint: Option<&SchemaExpression>, depth: usize) -> Result<Blueprint> {
		if self.config.use_candidates {
			let built = self
				.config
				.candidates
				.find_map(|candidate| candidate.can_handle(&source).then(|| candidate.build(&source)));
			if let Some(built) = built {
				debug!(from = source.tag(), "source rewritten by candidate");
				let next = self.next_hop(source.label(), depth)?;
				return self.blueprint(built?, hint, next);
			}
		}

		match source {
			Source::Function(function) => Blueprint::from_function(&function, hint, &self.config.annotations),
			Source::Class(class) => Blueprint::from_class(&class, hint),
			Source::Instance(blueprint) => match hint {
				Some(hint) => blueprint.with_schema(hint.clone()),
				None => Ok(blueprint),
			},
			Source::Alias(alias) => {
				let next = self.next_hop(&alias, depth)?;
				let found = self
					.config
					.registry
					.lookup(&alias)
					.or_else(|| self.config.scope.get(&alias).cloned())
					.ok_or_else(|| Error::InterfacelessResolution {
						alias: alias.clone(),
					})?;
				self.blueprint(found, hint, next)
			}
			Source::Custom(custom) => Err(Error::InterfacelessResolution {
				alias: custom.type_name().to_string(),
			}),
		}
	}

	/// The first hop is always followed; every further one counts against the limit.
	fn next_hop(&self, label: &str, depth: usize) -> Result<usize> {
		if depth > self.config.max_alias_depth {
			return Err(Error::AliasCycle {
				alias: label.to_string(),
				depth: self.config.max_alias_depth,
			});
		}
		Ok(depth + 1)
	}
}
