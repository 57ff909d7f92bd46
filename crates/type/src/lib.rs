// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value types shared between transforms and the engines that run them.
//!
//! - [`Type`] / [`Value`]: the scalar type system
//! - [`Schema`]: an ordered list of named, typed columns
//! - [`Row`], [`Record`], [`Frame`]: the containers rows travel in
//! - [`hash`]: xxHash3 digests used for content-addressable identities

pub mod error;
pub mod frame;
pub mod hash;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use frame::{Frame, Record, Row};
pub use hash::{Hash128, xxh3_128};
pub use schema::{Column, Schema};
pub use value::{Type, Value};
