// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use crate::{Error, Result, source::Source};

/// What to do when an alias is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OnDuplicate {
	/// Keep the first registration.
	Ignore,
	Overwrite,
	#[default]
	Throw,
}

#[derive(Debug, Clone)]
pub struct RegistryEntry {
	pub alias: String,
	pub source: Source,
	pub on_duplicate: OnDuplicate,
}

/// Alias to source mapping. Entries are only ever added or overwritten.
#[derive(Default)]
pub struct Registry {
	entries: RwLock<HashMap<String, RegistryEntry>>,
}

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide registry.
	pub fn global() -> Arc<Registry> {
		GLOBAL.clone()
	}

	#[instrument(name = "transform::registry::register", level = "debug", skip(self, source), fields(kind = source.tag()))]
	pub fn register(&self, alias: &str, source: Source, on_duplicate: OnDuplicate) -> Result<()> {
		let mut entries = self.entries.write();

		if entries.contains_key(alias) {
			match on_duplicate {
				OnDuplicate::Throw => {
					return Err(Error::DuplicateAlias {
						alias: alias.to_string(),
					});
				}
				OnDuplicate::Ignore => {
					debug!(alias, "alias already registered, keeping first");
					return Ok(());
				}
				OnDuplicate::Overwrite => {
					warn!(alias, "overwriting registered alias");
				}
			}
		}

		entries.insert(
			alias.to_string(),
			RegistryEntry {
				alias: alias.to_string(),
				source,
				on_duplicate,
			},
		);
		Ok(())
	}

	#[instrument(name = "transform::registry::lookup", level = "trace", skip(self))]
	pub fn lookup(&self, alias: &str) -> Option<Source> {
		self.entries.read().get(alias).map(|e| e.source.clone())
	}

	pub fn entry(&self, alias: &str) -> Option<RegistryEntry> {
		self.entries.read().get(alias).cloned()
	}

	pub fn contains(&self, alias: &str) -> bool {
		self.entries.read().contains_key(alias)
	}

	/// Registered aliases, sorted.
	pub fn aliases(&self) -> Vec<String> {
		let mut aliases: Vec<String> = self.entries.read().keys().cloned().collect();
		aliases.sort();
		aliases
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Drop every entry. Meant for test isolation.
	pub fn reset(&self) {
		self.entries.write().clear();
	}
}
