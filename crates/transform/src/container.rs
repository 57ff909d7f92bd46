// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The containers data travels in between an engine and a transformer.
//!
//! Engines hand over whatever is convenient for them; transformers declare
//! the shape they want. [`Data::convert`] bridges the two using the schema
//! the data was produced under, and never reorders rows.

use std::fmt::{self, Debug, Display, Formatter};

use reifydb_type::{Frame, Record, Row, Schema};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub type RecordStream = Box<dyn Iterator<Item = Record> + Send>;
pub type RowStream = Box<dyn Iterator<Item = Row> + Send>;
pub type FrameStream = Box<dyn Iterator<Item = Frame> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
	/// Stream of name-keyed records
	Records,
	/// Stream of positional rows
	Rows,
	/// One materialized frame
	Frame,
	/// Stream of frames
	Frames,
}

impl Display for ContainerKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ContainerKind::Records => f.write_str("record stream"),
			ContainerKind::Rows => f.write_str("row stream"),
			ContainerKind::Frame => f.write_str("frame"),
			ContainerKind::Frames => f.write_str("frame stream"),
		}
	}
}

pub enum Data {
	Records(RecordStream),
	Rows(RowStream),
	Frame(Frame),
	Frames(FrameStream),
}

impl Data {
	pub fn records<I>(records: I) -> Self
	where
		I: IntoIterator<Item = Record>,
		I::IntoIter: Send + 'static,
	{
		Data::Records(Box::new(records.into_iter()))
	}

	pub fn rows<I>(rows: I) -> Self
	where
		I: IntoIterator<Item = Row>,
		I::IntoIter: Send + 'static,
	{
		Data::Rows(Box::new(rows.into_iter()))
	}

	pub fn frames<I>(frames: I) -> Self
	where
		I: IntoIterator<Item = Frame>,
		I::IntoIter: Send + 'static,
	{
		Data::Frames(Box::new(frames.into_iter()))
	}

	pub fn kind(&self) -> ContainerKind {
		match self {
			Data::Records(_) => ContainerKind::Records,
			Data::Rows(_) => ContainerKind::Rows,
			Data::Frame(_) => ContainerKind::Frame,
			Data::Frames(_) => ContainerKind::Frames,
		}
	}

	/// Reshape into `kind`. `schema` names the columns of positional rows.
	pub fn convert(self, kind: ContainerKind, schema: &Schema) -> Result<Data> {
		if self.kind() == kind {
			return Ok(self);
		}
		Ok(match kind {
			ContainerKind::Records => Data::Records(self.into_records(schema)),
			ContainerKind::Rows => Data::Rows(self.into_rows(schema)),
			ContainerKind::Frame => Data::Frame(self.into_frame(schema)?),
			ContainerKind::Frames => Data::Frames(self.into_frames(schema)?),
		})
	}

	pub fn into_rows(self, schema: &Schema) -> RowStream {
		match self {
			Data::Rows(rows) => rows,
			Data::Records(records) => {
				let schema = schema.clone();
				Box::new(records.map(move |record| schema.to_row(record)))
			}
			Data::Frame(frame) => Box::new(frame.into_rows().into_iter()),
			Data::Frames(frames) => Box::new(frames.flat_map(|frame| frame.into_rows())),
		}
	}

	pub fn into_records(self, schema: &Schema) -> RecordStream {
		match self {
			Data::Records(records) => records,
			Data::Rows(rows) => {
				let schema = schema.clone();
				Box::new(rows.map(move |row| schema.to_record(row)))
			}
			Data::Frame(frame) => {
				let (schema, rows) = frame.into_parts();
				Box::new(rows.into_iter().map(move |row| schema.to_record(row)))
			}
			Data::Frames(frames) => Box::new(frames.flat_map(|frame| {
				let (schema, rows) = frame.into_parts();
				rows.into_iter().map(move |row| schema.to_record(row))
			})),
		}
	}

	/// Materialize everything into one frame.
	pub fn into_frame(self, schema: &Schema) -> Result<Frame> {
		match self {
			Data::Frame(frame) => Ok(frame),
			Data::Frames(frames) => Ok(Frame::concat(schema.clone(), frames)?),
			Data::Rows(rows) => Ok(Frame::new(schema.clone(), rows.collect())?),
			Data::Records(records) => Ok(Frame::from_records(schema.clone(), records)),
		}
	}

	/// Streams pass through; anything else becomes a single frame.
	pub fn into_frames(self, schema: &Schema) -> Result<FrameStream> {
		match self {
			Data::Frames(frames) => Ok(frames),
			other => Ok(Box::new(std::iter::once(other.into_frame(schema)?))),
		}
	}
}

impl Debug for Data {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Data::Frame(frame) => f.debug_tuple("Frame").field(frame).finish(),
			other => write!(f, "Data({})", other.kind()),
		}
	}
}

/// A concrete container type a transformer function can accept or return.
pub trait Container: Sized + Send + 'static {
	const KIND: ContainerKind;

	fn into_data(self) -> Data;

	fn from_data(data: Data) -> Result<Self>;
}

fn mismatch(expected: ContainerKind, data: &Data) -> Error {
	Error::ContainerMismatch {
		expected,
		actual: data.kind(),
	}
}

impl Container for RecordStream {
	const KIND: ContainerKind = ContainerKind::Records;

	fn into_data(self) -> Data {
		Data::Records(self)
	}

	fn from_data(data: Data) -> Result<Self> {
		match data {
			Data::Records(records) => Ok(records),
			other => Err(mismatch(Self::KIND, &other)),
		}
	}
}

impl Container for RowStream {
	const KIND: ContainerKind = ContainerKind::Rows;

	fn into_data(self) -> Data {
		Data::Rows(self)
	}

	fn from_data(data: Data) -> Result<Self> {
		match data {
			Data::Rows(rows) => Ok(rows),
			other => Err(mismatch(Self::KIND, &other)),
		}
	}
}

impl Container for Frame {
	const KIND: ContainerKind = ContainerKind::Frame;

	fn into_data(self) -> Data {
		Data::Frame(self)
	}

	fn from_data(data: Data) -> Result<Self> {
		match data {
			Data::Frame(frame) => Ok(frame),
			other => Err(mismatch(Self::KIND, &other)),
		}
	}
}

impl Container for FrameStream {
	const KIND: ContainerKind = ContainerKind::Frames;

	fn into_data(self) -> Data {
		Data::Frames(self)
	}

	fn from_data(data: Data) -> Result<Self> {
		match data {
			Data::Frames(frames) => Ok(frames),
			other => Err(mismatch(Self::KIND, &other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::Value;

	use super::*;

	fn schema() -> Schema {
		Schema::parse("a:int,b:int").unwrap()
	}

	fn rows() -> Vec<Row> {
		vec![vec![Value::Int4(1), Value::Int4(2)], vec![Value::Int4(3), Value::Int4(4)]]
	}

	#[test]
	fn test_rows_to_records_and_back() {
		let data = Data::rows(rows()).convert(ContainerKind::Records, &schema()).unwrap();
		assert_eq!(data.kind(), ContainerKind::Records);

		let back: Vec<Row> = data.into_rows(&schema()).collect();
		assert_eq!(back, rows());
	}

	#[test]
	fn test_records_carry_column_names() {
		let records: Vec<Record> = Data::rows(rows()).into_records(&schema()).collect();
		assert_eq!(records[1]["b"], Value::Int4(4));
	}

	#[test]
	fn test_frames_flatten_in_order() {
		let first = Frame::new(schema(), rows()).unwrap();
		let second = Frame::new(schema(), vec![vec![Value::Int4(5), Value::Int4(6)]]).unwrap();
		let data = Data::frames(vec![first, second]);

		let all: Vec<Row> = data.into_rows(&schema()).collect();
		assert_eq!(all.len(), 3);
		assert_eq!(all[2][0], Value::Int4(5));
	}

	#[test]
	fn test_rows_into_single_frame() {
		let frame = Data::rows(rows()).into_frame(&schema()).unwrap();
		assert_eq!(frame.row_count(), 2);
		assert_eq!(frame.schema(), &schema());
	}

	#[test]
	fn test_same_kind_is_untouched() {
		let frame = Frame::new(schema(), rows()).unwrap();
		let data = Data::Frame(frame.clone()).convert(ContainerKind::Frame, &Schema::empty()).unwrap();
		assert_eq!(Frame::from_data(data).unwrap(), frame);
	}

	#[test]
	fn test_from_data_mismatch() {
		let Err(err) = RowStream::from_data(Data::Frame(Frame::empty(schema()))) else {
			panic!("a frame is not a row stream");
		};
		assert_eq!(
			err,
			Error::ContainerMismatch {
				expected: ContainerKind::Rows,
				actual: ContainerKind::Frame
			}
		);
	}
}
