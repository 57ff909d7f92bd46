// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use crate::{Error, Result, schema::Schema, value::Value};

/// Positional values, aligned with some schema's column order.
pub type Row = Vec<Value>;

/// Values keyed by column name, in insertion order.
pub type Record = IndexMap<String, Value>;

/// A materialized block of rows sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
	schema: Schema,
	rows: Vec<Row>,
}

impl Frame {
	pub fn new(schema: Schema, rows: Vec<Row>) -> Result<Self> {
		for (index, row) in rows.iter().enumerate() {
			if row.len() != schema.len() {
				return Err(Error::RowWidth {
					index,
					expected: schema.len(),
					actual: row.len(),
				});
			}
		}
		Ok(Self {
			schema,
			rows,
		})
	}

	pub fn empty(schema: Schema) -> Self {
		Self {
			schema,
			rows: vec![],
		}
	}

	/// Build a frame from keyed records; missing columns become `Undefined`
	/// and keys outside the schema are dropped.
	pub fn from_records(schema: Schema, records: impl IntoIterator<Item = Record>) -> Self {
		let rows = records.into_iter().map(|record| schema.to_row(record)).collect();
		Self {
			schema,
			rows,
		}
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn into_rows(self) -> Vec<Row> {
		self.rows
	}

	pub fn into_parts(self) -> (Schema, Vec<Row>) {
		(self.schema, self.rows)
	}

	/// Concatenate frames that share `schema`.
	pub fn concat(schema: Schema, frames: impl IntoIterator<Item = Frame>) -> Result<Self> {
		let mut rows = Vec::new();
		for frame in frames {
			if frame.schema.len() != schema.len() {
				return Err(Error::RowWidth {
					index: rows.len(),
					expected: schema.len(),
					actual: frame.schema.len(),
				});
			}
			rows.extend(frame.rows);
		}
		Ok(Self {
			schema,
			rows,
		})
	}
}

impl Schema {
	/// Key a positional row by this schema's column names.
	pub fn to_record(&self, row: Row) -> Record {
		self.names().map(str::to_string).zip(row.into_iter().chain(std::iter::repeat(Value::Undefined))).collect()
	}

	/// Lay out a record in this schema's column order.
	pub fn to_row(&self, mut record: Record) -> Row {
		self.names().map(|name| record.swap_remove(name).unwrap_or(Value::Undefined)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn schema() -> Schema {
		Schema::parse("a:int,b:str").unwrap()
	}

	#[test]
	fn test_row_width_checked() {
		let err = Frame::new(schema(), vec![vec![Value::Int4(1)]]).unwrap_err();
		assert_eq!(
			err,
			Error::RowWidth {
				index: 0,
				expected: 2,
				actual: 1
			}
		);
	}

	#[test]
	fn test_records_follow_schema_order() {
		let frame = Frame::new(schema(), vec![vec![Value::Int4(1), Value::from("x")]]).unwrap();
		let (schema, rows) = frame.into_parts();
		let record = schema.to_record(rows[0].clone());
		assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
		assert_eq!(record["a"], Value::Int4(1));
	}

	#[test]
	fn test_from_records_fills_missing() {
		let mut record = Record::new();
		record.insert("b".to_string(), Value::from("y"));
		record.insert("extra".to_string(), Value::Int4(9));

		let frame = Frame::from_records(schema(), vec![record]);
		assert_eq!(frame.rows(), &[vec![Value::Undefined, Value::from("y")]]);
	}

	#[test]
	fn test_concat() {
		let a = Frame::new(schema(), vec![vec![Value::Int4(1), Value::from("x")]]).unwrap();
		let b = Frame::new(schema(), vec![vec![Value::Int4(2), Value::from("y")]]).unwrap();
		let all = Frame::concat(schema(), vec![a, b]).unwrap();
		assert_eq!(all.row_count(), 2);
		assert_eq!(all.rows()[1][0], Value::Int4(2));
	}
}
