// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring a converter

use std::sync::Arc;

use crate::{
	candidate::{AnnotationConverter, Candidates, SourceCandidate, annotation_converters, source_candidates},
	convert::Converter,
	registry::{OnDuplicate, Registry},
	scope::Scope,
	source::Source,
};

pub const DEFAULT_MAX_ALIAS_DEPTH: usize = 8;

pub struct ConverterBuilder {
	registry: Option<Arc<Registry>>,
	candidates: Option<Arc<Candidates<SourceCandidate>>>,
	annotations: Option<Arc<Candidates<AnnotationConverter>>>,
	scope: Scope,
	use_candidates: bool,
	max_alias_depth: Option<usize>,
	on_duplicate: OnDuplicate,
}

impl Default for ConverterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ConverterBuilder {
	/// Create a new ConverterBuilder with default settings
	pub fn new() -> Self {
		Self {
			registry: None,
			candidates: None,
			annotations: None,
			scope: Scope::new(),
			use_candidates: true,
			max_alias_depth: None,
			on_duplicate: OnDuplicate::default(),
		}
	}

	/// Use `registry` instead of the process-wide one
	pub fn registry(mut self, registry: Arc<Registry>) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Use `candidates` instead of the process-wide source candidates
	pub fn candidates(mut self, candidates: Arc<Candidates<SourceCandidate>>) -> Self {
		self.candidates = Some(candidates);
		self
	}

	/// Use `annotations` instead of the process-wide annotation converters
	pub fn annotations(mut self, annotations: Arc<Candidates<AnnotationConverter>>) -> Self {
		self.annotations = Some(annotations);
		self
	}

	pub fn scope(mut self, scope: Scope) -> Self {
		self.scope = scope;
		self
	}

	/// Make `source` resolvable as `name` when no registration exists for it.
	pub fn bind(mut self, name: impl Into<String>, source: impl Into<Source>) -> Self {
		self.scope.bind(name, source);
		self
	}

	pub fn use_candidates(mut self, enabled: bool) -> Self {
		self.use_candidates = enabled;
		self
	}

	/// How many times a resolved alias may lead to another alias (or to a
	/// candidate rewrite) before giving up. `0` still follows a single alias.
	/// Defaults to [`DEFAULT_MAX_ALIAS_DEPTH`] if not set.
	pub fn max_alias_depth(mut self, depth: usize) -> Self {
		self.max_alias_depth = Some(depth);
		self
	}

	/// Policy used by [`Converter::register`].
	pub fn on_duplicate(mut self, policy: OnDuplicate) -> Self {
		self.on_duplicate = policy;
		self
	}

	pub(crate) fn build_config(self) -> ConverterConfig {
		ConverterConfig {
			registry: self.registry.unwrap_or_else(Registry::global),
			candidates: self.candidates.unwrap_or_else(source_candidates),
			annotations: self.annotations.unwrap_or_else(annotation_converters),
			scope: self.scope,
			use_candidates: self.use_candidates,
			max_alias_depth: self.max_alias_depth.unwrap_or(DEFAULT_MAX_ALIAS_DEPTH),
			on_duplicate: self.on_duplicate,
		}
	}

	pub fn build(self) -> Converter {
		Converter::new(self.build_config())
	}
}

/// Configuration for Converter
pub struct ConverterConfig {
	pub registry: Arc<Registry>,
	pub candidates: Arc<Candidates<SourceCandidate>>,
	pub annotations: Arc<Candidates<AnnotationConverter>>,
	/// Named bindings consulted after the registry
	pub scope: Scope,
	/// Whether source candidates are consulted at all
	pub use_candidates: bool,
	pub max_alias_depth: usize,
	pub on_duplicate: OnDuplicate,
}
