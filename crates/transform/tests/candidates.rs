// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integration tests for custom source candidates and annotation converters

use std::sync::Arc;

use reifydb_testing::fixture::{add_b, frame, int_rows, scale};
use reifydb_transform::{
	AnnotationConverter, ContainerKind, Converter, Data, ParamType, Registry, Result, Signature, Source,
	TransformContext, TransformFn,
	candidate::{Candidates, SourceCandidate},
	register_annotation_converter, register_source_candidate, to_operator,
};
use reifydb_type::Value;

struct Marker(i32);

fn is_marker(source: &Source) -> bool {
	matches!(source, Source::Custom(custom) if custom.is::<Marker>())
}

fn converter(candidates: Candidates<SourceCandidate>) -> Converter {
	Converter::builder().registry(Arc::new(Registry::new())).candidates(Arc::new(candidates)).build()
}

#[test]
fn test_highest_priority_wins() -> Result<()> {
	let candidates = Candidates::new();
	candidates.register(1, SourceCandidate::new(is_marker, |_| Ok(add_b().into())));
	candidates.register(10, SourceCandidate::new(is_marker, |_| Ok(scale(2).into())));
	candidates.register(5, SourceCandidate::new(is_marker, |_| Ok(add_b().into())));

	let op = converter(candidates).to_operator(Source::custom(Marker(0)), None)?;
	assert_eq!(op.name(), "scale");
	Ok(())
}

#[test]
fn test_equal_priority_uses_registration_order() -> Result<()> {
	let candidates = Candidates::new();
	candidates.register(0, SourceCandidate::new(is_marker, |_| Ok(add_b().into())));
	candidates.register(0, SourceCandidate::new(is_marker, |_| Ok(scale(2).into())));

	let op = converter(candidates).to_operator(Source::custom(Marker(0)), None)?;
	assert_eq!(op.name(), "add_b");
	Ok(())
}

#[test]
fn test_non_matching_candidates_are_skipped() -> Result<()> {
	let candidates = Candidates::new();
	candidates.register(10, SourceCandidate::new(|_| false, |_| Ok(add_b().into())));
	candidates.register(0, SourceCandidate::new(is_marker, |source| {
		let Source::Custom(custom) = source else {
			unreachable!()
		};
		let factor = custom.downcast_ref::<Marker>().map(|m| m.0).unwrap_or(1);
		Ok(scale(factor).into())
	}));

	let mut op = converter(candidates).to_operator(Source::custom(Marker(5)), None)?;
	let output = op.execute_frame(frame("a:int", int_rows(&[&[2]])))?;
	assert_eq!(output.rows()[0][0], Value::Int4(10));
	Ok(())
}

fn scale_from_marker(source: &Source) -> Result<Source> {
	let factor = match source {
		Source::Custom(custom) => custom.downcast_ref::<Marker>().map(|m| m.0).unwrap_or(1),
		_ => 1,
	};
	Ok(scale(factor).into())
}

#[test]
fn test_candidate_identity_follows_payload() -> Result<()> {
	let candidates = Candidates::new();
	candidates.register(0, SourceCandidate::new(is_marker, scale_from_marker));
	let converter = converter(candidates);

	let first = converter.to_operator(Source::custom(Marker(3)), None)?;
	let again = converter.to_operator(Source::custom(Marker(3)), None)?;
	let other = converter.to_operator(Source::custom(Marker(4)), None)?;

	assert_eq!(first.identity(), again.identity());
	assert_ne!(first.identity(), other.identity());
	assert_eq!(first.identity(), to_operator(scale(3), None)?.identity());
	Ok(())
}

#[test]
fn test_candidates_can_be_disabled() {
	let candidates = Candidates::new();
	candidates.register(0, SourceCandidate::new(is_marker, |_| Ok(add_b().into())));

	let converter = Converter::builder()
		.registry(Arc::new(Registry::new()))
		.candidates(Arc::new(candidates))
		.use_candidates(false)
		.build();
	assert!(converter.to_operator(Source::custom(Marker(0)), None).is_err());
}

#[test]
fn test_process_wide_registration() -> Result<()> {
	register_source_candidate(0, |source| matches!(source, Source::Alias(a) if a == "candidates:add_b"), |_| {
		Ok(add_b().into())
	});
	assert_eq!(to_operator("candidates:add_b", None)?.name(), "add_b");
	Ok(())
}

#[test]
fn test_native_annotation() -> Result<()> {
	register_annotation_converter(0, AnnotationConverter::named("candidates.DataFrame", ContainerKind::Frame));

	let native = ParamType::Native("candidates.DataFrame".to_string());
	let f = TransformFn::declare(
		"native",
		Signature::new(native.clone()).param("df", native),
		|data: Data, _: &TransformContext<'_>| Ok(data),
	)
	.with_schema("*");

	let op = to_operator(f, None)?;
	assert_eq!(op.description().input, ContainerKind::Frame);
	Ok(())
}
