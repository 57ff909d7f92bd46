// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integration tests for output schema resolution and validation

use reifydb_testing::fixture::{add_b, append_x, frame, int_rows, passthrough, schema};
use reifydb_transform::{Data, Error, OperatorState, Result, SchemaHint, to_operator};
use reifydb_type::{Row, Value};

#[test]
fn test_wildcard_first() -> Result<()> {
	let mut op = to_operator(passthrough(), Some("*,b:int".into()))?;
	assert_eq!(op.output_schema(&schema("a:int"))?, schema("a:int,b:int"));
	Ok(())
}

#[test]
fn test_wildcard_last() -> Result<()> {
	let mut op = to_operator(passthrough(), Some("b:int,*".into()))?;
	assert_eq!(op.output_schema(&schema("a:int"))?, schema("b:int,a:int"));
	Ok(())
}

#[test]
fn test_concrete_ignores_input() -> Result<()> {
	for input in ["a:int", "x:str,y:long", ""] {
		let mut op = to_operator(passthrough(), Some("a:int,b:int".into()))?;
		assert_eq!(op.output_schema(&schema(input))?, schema("a:int,b:int"));
	}
	Ok(())
}

#[test]
fn test_conflicting_columns() -> Result<()> {
	let mut op = to_operator(passthrough(), Some("*,a:int,a:str".into()))?;
	assert!(matches!(op.output_schema(&schema("x:int")), Err(Error::ConflictingSchema { .. })));
	assert_eq!(op.state(), OperatorState::Unbound);
	Ok(())
}

#[test]
fn test_bare_column_must_exist() -> Result<()> {
	let mut op = to_operator(passthrough(), Some(SchemaHint::Text("a,b:int".to_string())))?;
	assert!(matches!(op.output_schema(&schema("x:int")), Err(Error::SchemaResolution { .. })));
	Ok(())
}

#[test]
fn test_input_has() -> Result<()> {
	let mut op = to_operator(add_b(), None)?;
	assert!(matches!(op.validate(&schema("x:int,c:int")), Err(Error::ValidationFailed { .. })));
	assert!(op.validate(&schema("c:int,a:int,d:str")).is_ok());
	Ok(())
}

#[test]
fn test_input_has_both_columns() -> Result<()> {
	let f = passthrough().with_schema("*").with_hints("// input_has: a, b");
	let mut op = to_operator(f, None)?;
	assert!(matches!(op.validate(&schema("a:int")), Err(Error::ValidationFailed { .. })));
	assert!(op.validate(&schema("b:int,z:int,a:int")).is_ok());
	Ok(())
}

#[test]
fn test_input_is() -> Result<()> {
	let f = passthrough().with_schema("*").with_hints("input_is: a:int, b:int");
	let mut op = to_operator(f, None)?;
	assert!(op.validate(&schema("a:int,b:int")).is_ok());
	assert!(op.validate(&schema("a:int,b:str")).is_err());
	Ok(())
}

#[test]
fn test_class_rules_win_over_hints() -> Result<()> {
	let mut op = to_operator(append_x(1i32).with_hints("input_has: zzz"), None)?;
	assert!(op.validate(&schema("a:int")).is_ok());
	assert!(op.validate(&schema("zzz:int")).is_err());
	Ok(())
}

#[test]
fn test_never_executes_on_violation() -> Result<()> {
	let mut op = to_operator(add_b(), None)?;
	op.output_schema(&schema("x:int"))?;
	assert!(matches!(op.execute(Data::rows(int_rows(&[&[1]]))), Err(Error::ValidationFailed { .. })));
	Ok(())
}

#[test]
fn test_streaming_preserves_order() -> Result<()> {
	let mut op = to_operator(add_b(), None)?;
	let output = op.output_schema(&schema("a:int"))?;
	assert_eq!(output, schema("a:int,b:int"));

	let input = frame("a:int", int_rows(&[&[3], &[1], &[2]]));
	let Data::Rows(rows) = op.execute(Data::Frame(input))? else {
		panic!("expected rows");
	};
	let rows: Vec<Row> = rows.collect();
	assert_eq!(
		rows,
		vec![
			vec![Value::Int4(3), Value::Int4(4)],
			vec![Value::Int4(1), Value::Int4(2)],
			vec![Value::Int4(2), Value::Int4(3)],
		]
	);
	assert_eq!(op.state(), OperatorState::Done);
	Ok(())
}

#[test]
fn test_abandoned_stream_stays_executing() -> Result<()> {
	let mut op = to_operator(add_b(), None)?;
	op.output_schema(&schema("a:int"))?;
	let data = op.execute(Data::rows(int_rows(&[&[1], &[2]])))?;
	drop(data);
	assert_eq!(op.state(), OperatorState::Executing);
	Ok(())
}
