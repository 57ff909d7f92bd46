// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! xxHash3 digests.
//!
//! Pure Rust implementation, so identities computed on one host match
//! the ones computed by any other worker.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash128(pub u128);

impl Display for Hash128 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:032x}", self.0)
	}
}

/// Compute xxHash3 128-bit hash of data.
#[inline]
pub fn xxh3_128(data: &[u8]) -> Hash128 {
	Hash128(xxh3::xxh3_128(data))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_xxh3_128() {
		let data = b"hello world";
		let hash = xxh3_128(data);
		assert_eq!(hash, xxh3_128(data));
		assert_ne!(hash, xxh3_128(b"different data"));
	}

	#[test]
	fn test_hash128_display_is_fixed_width_hex() {
		assert_eq!(Hash128(0xab).to_string(), format!("{}ab", "0".repeat(30)));
		assert_eq!(xxh3_128(b"schema").to_string().len(), 32);
	}
}
