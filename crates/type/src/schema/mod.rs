// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Ordered, named and typed column lists.
//!
//! A `Schema` is a plain value: two schemas with the same columns in the
//! same order are equal, regardless of how they were built. The textual
//! form `a:int,b:str` is accepted by [`Schema::parse`] and produced by
//! `Display` (with canonical type names).

mod parse;

use std::{
	collections::HashSet,
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, value::Type};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: Type,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

impl FromStr for Column {
	type Err = Error;

	/// Parse a single `name:type` definition.
	fn from_str(s: &str) -> Result<Self> {
		parse::parse_column(s)
	}
}

impl Display for Column {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.name, self.ty)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
	columns: Vec<Column>,
}

impl Schema {
	/// Create a schema, rejecting duplicate column names.
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(columns.len());
		for column in &columns {
			if !seen.insert(column.name.as_str()) {
				return Err(Error::DuplicateColumn {
					name: column.name.clone(),
				});
			}
		}
		Ok(Self {
			columns,
		})
	}

	pub fn empty() -> Self {
		Self::default()
	}

	/// Parse the textual form, e.g. `a:int, b:str`.
	pub fn parse(text: &str) -> Result<Self> {
		Self::new(parse::parse_columns(text)?)
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.name.as_str())
	}

	pub fn find(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.find(name).is_some()
	}

	/// Append the columns of `other` that are not already present.
	///
	/// A column present in both with a different type is an error.
	pub fn union(&self, other: &Schema) -> Result<Schema> {
		let mut columns = self.columns.clone();
		for column in &other.columns {
			match self.find(&column.name) {
				Some(existing) if existing.ty != column.ty => {
					return Err(Error::IncompatibleColumn {
						name: column.name.clone(),
						existing: existing.ty,
						incoming: column.ty,
					});
				}
				Some(_) => {}
				None => columns.push(column.clone()),
			}
		}
		Ok(Schema {
			columns,
		})
	}

	/// All columns except the named ones, in their original order.
	pub fn exclude<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Schema {
		let excluded: HashSet<&str> = names.into_iter().collect();
		Schema {
			columns: self.columns.iter().filter(|c| !excluded.contains(c.name.as_str())).cloned().collect(),
		}
	}
}

impl FromStr for Schema {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Schema::parse(s)
	}
}

impl TryFrom<&str> for Schema {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self> {
		Schema::parse(value)
	}
}

impl Display for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for (idx, column) in self.columns.iter().enumerate() {
			if idx > 0 {
				f.write_str(",")?;
			}
			Display::fmt(column, f)?;
		}
		Ok(())
	}
}

impl IntoIterator for Schema {
	type Item = Column;
	type IntoIter = std::vec::IntoIter<Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.into_iter()
	}
}
