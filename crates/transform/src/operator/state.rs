// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	sync::{
		Arc,
		atomic::{AtomicU8, Ordering},
	},
};

use tracing::trace;

/// Lifecycle of a single operator. Progress is strictly forward.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperatorState {
	Unbound = 0,
	SchemaResolved = 1,
	Validated = 2,
	Executing = 3,
	Done = 4,
}

impl OperatorState {
	fn from_u8(value: u8) -> Self {
		match value {
			0 => OperatorState::Unbound,
			1 => OperatorState::SchemaResolved,
			2 => OperatorState::Validated,
			3 => OperatorState::Executing,
			_ => OperatorState::Done,
		}
	}
}

impl Display for OperatorState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			OperatorState::Unbound => f.write_str("unbound"),
			OperatorState::SchemaResolved => f.write_str("schema resolved"),
			OperatorState::Validated => f.write_str("validated"),
			OperatorState::Executing => f.write_str("executing"),
			OperatorState::Done => f.write_str("done"),
		}
	}
}

/// Operator state shared with the streams an operator hands out.
#[derive(Debug, Clone, Default)]
pub(crate) struct Lifecycle(Arc<AtomicU8>);

impl Lifecycle {
	pub(crate) fn get(&self) -> OperatorState {
		OperatorState::from_u8(self.0.load(Ordering::Acquire))
	}

	/// Move to `state` unless already past it. Returns the previous state.
	pub(crate) fn advance(&self, state: OperatorState) -> OperatorState {
		let previous = OperatorState::from_u8(self.0.fetch_max(state as u8, Ordering::AcqRel));
		if previous < state {
			trace!(from = %previous, to = %state, "operator state");
		}
		previous
	}
}

/// Marks its lifecycle `Done` once the inner iterator is exhausted.
pub(crate) struct Finishing<I> {
	inner: I,
	lifecycle: Lifecycle,
}

impl<I> Finishing<I> {
	pub(crate) fn new(inner: I, lifecycle: Lifecycle) -> Self {
		Self {
			inner,
			lifecycle,
		}
	}
}

impl<I: Iterator> Iterator for Finishing<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		let next = self.inner.next();
		if next.is_none() {
			self.lifecycle.advance(OperatorState::Done);
		}
		next
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
