// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Content identity of a transformer configuration.
//!
//! The digest covers everything that changes what an operator computes:
//! source kind, name, container kinds, the canonical schema expression,
//! validation rules and bound parameters. It does not depend on how the
//! source was supplied (function, alias or existing operator).

use std::fmt::{self, Display, Formatter};

use reifydb_type::{Hash128, xxh3_128};
use serde::Serialize;

use crate::{
	Error, Result, container::ContainerKind, inspect::Description, source::Params, validation::ValidationRules,
};

/// Bumped whenever the canonical encoding changes.
const ENCODING_VERSION: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceKind {
	Function,
	Class,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityDigest(pub Hash128);

impl Display for IdentityDigest {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[derive(Serialize)]
struct Canonical<'a> {
	version: u8,
	kind: SourceKind,
	name: &'a str,
	input: ContainerKind,
	output: ContainerKind,
	schema: String,
	validation: &'a ValidationRules,
	params: &'a Params,
	accepts_callback: bool,
}

pub fn digest(kind: SourceKind, name: &str, description: &Description, params: &Params) -> Result<IdentityDigest> {
	let canonical = Canonical {
		version: ENCODING_VERSION,
		kind,
		name,
		input: description.input,
		output: description.output,
		schema: description.schema.to_string(),
		validation: &description.validation,
		params,
		accepts_callback: description.accepts_callback,
	};

	let bytes = postcard::to_stdvec(&canonical).map_err(|err| Error::Identity {
		name: name.to_string(),
		reason: err.to_string(),
	})?;
	Ok(IdentityDigest(xxh3_128(&bytes)))
}
