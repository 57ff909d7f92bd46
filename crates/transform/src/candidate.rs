// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Prioritized extension points.
//!
//! Candidates are tried from the highest priority down; among equal
//! priorities the one registered first is tried first.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::{Result, container::ContainerKind, source::Source};

pub struct Candidates<T> {
	entries: RwLock<Vec<(i32, Arc<T>)>>,
}

impl<T> Default for Candidates<T> {
	fn default() -> Self {
		Self {
			entries: RwLock::new(Vec::new()),
		}
	}
}

impl<T> Candidates<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&self, priority: i32, candidate: T) {
		let mut entries = self.entries.write();
		let idx = entries.partition_point(|(p, _)| *p >= priority);
		entries.insert(idx, (priority, Arc::new(candidate)));
	}

	/// Candidates in trial order.
	pub fn snapshot(&self) -> Vec<Arc<T>> {
		self.entries.read().iter().map(|(_, c)| c.clone()).collect()
	}

	/// First `Some` in trial order. No lock is held while `f` runs.
	pub fn find_map<R>(&self, mut f: impl FnMut(&T) -> Option<R>) -> Option<R> {
		self.snapshot().iter().find_map(|c| f(&**c))
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	pub fn reset(&self) {
		self.entries.write().clear();
	}
}

/// Recognizes a source shape and rewrites it into one the converter understands.
pub struct SourceCandidate {
	can_handle: Box<dyn Fn(&Source) -> bool + Send + Sync>,
	build: Box<dyn Fn(&Source) -> Result<Source> + Send + Sync>,
}

impl SourceCandidate {
	pub fn new(
		can_handle: impl Fn(&Source) -> bool + Send + Sync + 'static,
		build: impl Fn(&Source) -> Result<Source> + Send + Sync + 'static,
	) -> Self {
		Self {
			can_handle: Box::new(can_handle),
			build: Box::new(build),
		}
	}

	pub fn can_handle(&self, source: &Source) -> bool {
		(self.can_handle)(source)
	}

	pub fn build(&self, source: &Source) -> Result<Source> {
		(self.build)(source)
	}
}

/// Maps an engine specific parameter annotation onto a container kind.
pub struct AnnotationConverter {
	matches: Box<dyn Fn(&str) -> bool + Send + Sync>,
	kind: ContainerKind,
}

impl AnnotationConverter {
	pub fn new(matches: impl Fn(&str) -> bool + Send + Sync + 'static, kind: ContainerKind) -> Self {
		Self {
			matches: Box::new(matches),
			kind,
		}
	}

	pub fn named(annotation: impl Into<String>, kind: ContainerKind) -> Self {
		let annotation = annotation.into();
		Self::new(move |name| name == annotation, kind)
	}

	pub fn matches(&self, annotation: &str) -> bool {
		(self.matches)(annotation)
	}

	pub fn kind(&self) -> ContainerKind {
		self.kind
	}
}

impl Candidates<AnnotationConverter> {
	pub fn kind_of(&self, annotation: &str) -> Option<ContainerKind> {
		self.find_map(|c| c.matches(annotation).then(|| c.kind()))
	}
}

static SOURCE_CANDIDATES: Lazy<Arc<Candidates<SourceCandidate>>> = Lazy::new(|| Arc::new(Candidates::new()));

static ANNOTATION_CONVERTERS: Lazy<Arc<Candidates<AnnotationConverter>>> = Lazy::new(|| Arc::new(Candidates::new()));

pub fn source_candidates() -> Arc<Candidates<SourceCandidate>> {
	SOURCE_CANDIDATES.clone()
}

pub fn annotation_converters() -> Arc<Candidates<AnnotationConverter>> {
	ANNOTATION_CONVERTERS.clone()
}

pub fn register_source_candidate(
	priority: i32,
	can_handle: impl Fn(&Source) -> bool + Send + Sync + 'static,
	build: impl Fn(&Source) -> Result<Source> + Send + Sync + 'static,
) {
	debug!(priority, "registering source candidate");
	SOURCE_CANDIDATES.register(priority, SourceCandidate::new(can_handle, build));
}

pub fn register_annotation_converter(priority: i32, converter: AnnotationConverter) {
	debug!(priority, kind = %converter.kind(), "registering annotation converter");
	ANNOTATION_CONVERTERS.register(priority, converter);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_priority_order() {
		let candidates = Candidates::new();
		candidates.register(1, "low");
		candidates.register(10, "high");
		candidates.register(5, "mid");

		let order: Vec<&str> = candidates.snapshot().iter().map(|c| **c).collect();
		assert_eq!(order, vec!["high", "mid", "low"]);
	}

	#[test]
	fn test_ties_keep_registration_order() {
		let candidates = Candidates::new();
		candidates.register(0, "first");
		candidates.register(0, "second");
		candidates.register(3, "top");
		candidates.register(0, "third");

		let order: Vec<&str> = candidates.snapshot().iter().map(|c| **c).collect();
		assert_eq!(order, vec!["top", "first", "second", "third"]);
	}

	#[test]
	fn test_find_map_first_match() {
		let candidates = Candidates::new();
		candidates.register(0, 2);
		candidates.register(0, 4);
		candidates.register(0, 6);
		assert_eq!(candidates.find_map(|n| (*n > 2).then_some(*n)), Some(4));
	}

	#[test]
	fn test_annotation_kind() {
		let converters = Candidates::new();
		converters.register(0, AnnotationConverter::named("engine.DataFrame", ContainerKind::Frame));
		converters.register(5, AnnotationConverter::new(|n| n.ends_with("Iterator"), ContainerKind::Frames));

		assert_eq!(converters.kind_of("engine.DataFrame"), Some(ContainerKind::Frame));
		assert_eq!(converters.kind_of("engine.DataFrameIterator"), Some(ContainerKind::Frames));
		assert_eq!(converters.kind_of("other"), None);
	}
}
