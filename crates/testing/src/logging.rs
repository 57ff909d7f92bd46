// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a test-friendly subscriber. Safe to call from every test;
/// only the first call takes effect. Defaults to `warn`, override with `RUST_LOG`.
pub fn setup_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	if fmt().with_env_filter(filter).with_test_writer().try_init().is_ok() {
		debug!("test logging initialized");
	}
}
