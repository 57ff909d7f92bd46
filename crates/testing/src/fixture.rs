// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schemas, frames and sample transformers shared by tests.

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use reifydb_transform::{
	Result, RowStream, TransformContext, TransformFn, Transformer, TransformerClass, ValidationRule,
	ValidationRules,
};
use reifydb_type::{Column, Frame, Row, Schema, Value};

pub fn schema(text: &str) -> Schema {
	Schema::parse(text).unwrap_or_else(|err| panic!("invalid test schema '{text}': {err}"))
}

pub fn frame(schema_text: &str, rows: Vec<Row>) -> Frame {
	Frame::new(schema(schema_text), rows).unwrap_or_else(|err| panic!("invalid test frame: {err}"))
}

/// Rows of `Int4` values.
pub fn int_rows(rows: &[&[i32]]) -> Vec<Row> {
	rows.iter().map(|row| row.iter().copied().map(Value::Int4).collect()).collect()
}

/// Appends an `Int4` column `b` holding the row's first value plus one.
/// Declares `*,b:int` and requires column `a`.
pub fn add_b() -> TransformFn {
	TransformFn::new("add_b", |rows: RowStream| -> Result<RowStream> {
		Ok(Box::new(rows.map(|mut row| {
			let next = row.first().and_then(Value::as_i128).map(|n| Value::Int4(n as i32 + 1));
			row.push(next.unwrap_or(Value::Undefined));
			row
		})))
	})
	.with_hints(
		r#"
		# schema: *, b:int
		# input_has: a
		"#,
	)
}

/// Returns its input frame unchanged; no schema attached.
pub fn passthrough() -> TransformFn {
	TransformFn::new("passthrough", |frame: Frame| Ok(frame))
}

/// Multiplies every `Int4` by the bound `factor` param.
pub fn scale(factor: i32) -> TransformFn {
	TransformFn::with_context("scale", |frame: Frame, ctx: &TransformContext<'_>| -> Result<Frame> {
		let factor = ctx.param("factor").and_then(Value::as_i128).unwrap_or(1) as i32;
		let (schema, rows) = frame.into_parts();
		let rows = rows
			.into_iter()
			.map(|row| {
				row.into_iter()
					.map(|v| match v {
						Value::Int4(n) => Value::Int4(n * factor),
						other => other,
					})
					.collect()
			})
			.collect();
		Ok(Frame::new(schema, rows)?)
	})
	.with_schema("*")
	.bind("factor", factor)
}

/// Appends a column `x` holding the constructor param `x`.
pub struct AppendX {
	x: Value,
}

impl Transformer for AppendX {
	fn output_schema(&self, input: &Schema) -> Result<Schema> {
		Ok(input.union(&Schema::new(vec![Column::new("x", self.x.get_type())])?)?)
	}

	fn validation_rules(&self) -> ValidationRules {
		ValidationRules::new().with(ValidationRule::InputHas(vec!["a".to_string()]))
	}

	fn transform(&mut self, frame: Frame, _ctx: &TransformContext<'_>) -> Result<Frame> {
		let (schema, rows) = frame.into_parts();
		let output = self.output_schema(&schema)?;
		let rows = rows
			.into_iter()
			.map(|mut row| {
				row.push(self.x.clone());
				row
			})
			.collect();
		Ok(Frame::new(output, rows)?)
	}
}

/// Class for [`AppendX`] with `x` bound to `x`.
pub fn append_x(x: impl Into<Value>) -> TransformerClass {
	TransformerClass::new("append_x", |params| {
		Ok(Box::new(AppendX {
			x: params.get("x").cloned().unwrap_or(Value::Undefined),
		}))
	})
	.param("x", x)
}

/// A class that counts how often it was instantiated.
pub fn counted(counter: Arc<AtomicUsize>) -> TransformerClass {
	TransformerClass::new("counted", move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
		Ok(Box::new(AppendX {
			x: Value::Int4(0),
		}))
	})
}
