//! Value coercion: deciding and performing the transform for one
//! (declared field shape, raw value) pair.

use docmap_core::{Coerced, ElementShape, FieldDef, FieldShape, Value};

use crate::error::{MapError, MapErrorKind, PathSegment};
use crate::mapper::from_document_shape;

/// Coerces one raw document value against one declared field shape.
///
/// Dispatch is a single match over the two tags. Combinations without a
/// special rule fall through to the raw scalar path; the field's registered
/// setter then performs (or rejects) the final conversion, so declared/raw
/// mismatches all surface as `FieldAssignment` failures.
pub(crate) fn coerce(field: &FieldDef, raw: &Value) -> Result<Coerced, MapError> {
    match (&field.shape, raw) {
        // Nested document into a struct field: recurse with the declared type.
        (FieldShape::Struct(shape), Value::Document(document)) => {
            from_document_shape(document, shape()).map(Coerced::Instance)
        }
        // Nested document into a map field: shallow entry copy, no recursion.
        (FieldShape::Map, Value::Document(document)) => Ok(Coerced::Document(document.clone())),
        // Array into a list field: the declared element shape decides.
        (FieldShape::List(element), Value::Array(items)) => coerce_list(*element, items),
        // Everything else passes through unchanged.
        _ => Ok(Coerced::Scalar(raw.clone())),
    }
}

fn coerce_list(element: ElementShape, items: &[Value]) -> Result<Coerced, MapError> {
    match element {
        ElementShape::Scalar(_) => {
            // Defensive copy of the raw elements, order preserved. Nested
            // arrays have no coercion rule at any declared element type.
            for (index, item) in items.iter().enumerate() {
                if matches!(item, Value::Array(_)) {
                    return Err(unsupported(index, "array nested inside an array", item));
                }
            }
            Ok(Coerced::ScalarList(items.to_vec()))
        }
        ElementShape::Struct(shape) => {
            let mut instances = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Document(document) => instances.push(
                        from_document_shape(document, shape())
                            .map_err(|err| err.with_segment(PathSegment::Index(index)))?,
                    ),
                    Value::Array(_) => {
                        return Err(unsupported(index, "array nested inside an array", item));
                    }
                    other => {
                        return Err(unsupported(
                            index,
                            "structured list element that is not a nested document",
                            other,
                        ));
                    }
                }
            }
            Ok(Coerced::InstanceList(instances))
        }
    }
}

fn unsupported(index: usize, context: &'static str, got: &Value) -> MapError {
    MapError::new(MapErrorKind::UnsupportedShape {
        context,
        got: got.kind(),
    })
    .with_segment(PathSegment::Index(index))
}
