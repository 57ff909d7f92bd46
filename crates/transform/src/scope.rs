// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use crate::source::Source;

/// Names visible to the caller, consulted after the registry.
#[derive(Debug, Clone, Default)]
pub struct Scope {
	bindings: HashMap<String, Source>,
}

impl Scope {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bind(&mut self, name: impl Into<String>, source: impl Into<Source>) {
		self.bindings.insert(name.into(), source.into());
	}

	pub fn with(mut self, name: impl Into<String>, source: impl Into<Source>) -> Self {
		self.bind(name, source);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Source> {
		self.bindings.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.bindings.contains_key(name)
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}
