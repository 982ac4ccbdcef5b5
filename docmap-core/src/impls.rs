//! Trait registrations for the built-in scalar and container types.

use indexmap::IndexMap;
use jiff::Timestamp;

use crate::{
    AbsorbError, Coerced, CoercedElement, Document, DocumentType, ElementShape, ElementType,
    FieldShape, FieldType, MapShape, ScalarKind, TypeShape, Value, ValueKind,
};

/// Leaf conversion shared by the [`FieldType`] and [`ElementType`]
/// registrations of one scalar type.
trait ScalarType: Sized + 'static {
    const KIND: ScalarKind;
    const EXPECTED: &'static str;

    fn from_scalar(value: Value) -> Result<Self, AbsorbError>;
}

macro_rules! register_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldType for $ty {
            const SHAPE: FieldShape = FieldShape::Scalar(<$ty as ScalarType>::KIND);

            fn absorb(coerced: Coerced) -> Result<Self, AbsorbError> {
                match coerced {
                    Coerced::Scalar(value) => <$ty as ScalarType>::from_scalar(value),
                    Coerced::Document(_) => Err(AbsorbError::mismatch(
                        <$ty as ScalarType>::EXPECTED,
                        ValueKind::Document,
                    )),
                    _ => Err(AbsorbError::UnexpectedCoercion {
                        expected: <$ty as ScalarType>::EXPECTED,
                    }),
                }
            }
        }

        impl ElementType for $ty {
            const SHAPE: ElementShape = ElementShape::Scalar(<$ty as ScalarType>::KIND);

            fn absorb_element(element: CoercedElement) -> Result<Self, AbsorbError> {
                match element {
                    CoercedElement::Scalar(value) => <$ty as ScalarType>::from_scalar(value),
                    CoercedElement::Instance(_) => Err(AbsorbError::UnexpectedCoercion {
                        expected: <$ty as ScalarType>::EXPECTED,
                    }),
                }
            }
        }
    )*};
}

macro_rules! narrowing_int {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl ScalarType for $ty {
            const KIND: ScalarKind = ScalarKind::Int;
            const EXPECTED: &'static str = $name;

            fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
                match value {
                    Value::Int(raw) => <$ty>::try_from(raw)
                        .map_err(|_| AbsorbError::OutOfRange { target: $name, value: raw }),
                    other => Err(AbsorbError::mismatch($name, other.kind())),
                }
            }
        }
    )*};
}

narrowing_int! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
}

impl ScalarType for bool {
    const KIND: ScalarKind = ScalarKind::Bool;
    const EXPECTED: &'static str = "bool";

    fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(AbsorbError::mismatch("bool", other.kind())),
        }
    }
}

impl ScalarType for f64 {
    const KIND: ScalarKind = ScalarKind::Float;
    const EXPECTED: &'static str = "f64";

    fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
        match value {
            Value::Float(f) => Ok(f),
            // Drivers store whole doubles as integers; widen lossily.
            Value::Int(i) => Ok(i as f64),
            other => Err(AbsorbError::mismatch("f64", other.kind())),
        }
    }
}

impl ScalarType for f32 {
    const KIND: ScalarKind = ScalarKind::Float;
    const EXPECTED: &'static str = "f32";

    fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
        match value {
            Value::Float(f) => Ok(f as f32),
            Value::Int(i) => Ok(i as f32),
            other => Err(AbsorbError::mismatch("f32", other.kind())),
        }
    }
}

impl ScalarType for String {
    const KIND: ScalarKind = ScalarKind::String;
    const EXPECTED: &'static str = "string";

    fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(AbsorbError::mismatch("string", other.kind())),
        }
    }
}

impl ScalarType for Timestamp {
    const KIND: ScalarKind = ScalarKind::DateTime;
    const EXPECTED: &'static str = "datetime";

    fn from_scalar(value: Value) -> Result<Self, AbsorbError> {
        match value {
            Value::DateTime(ts) => Ok(ts),
            other => Err(AbsorbError::mismatch("datetime", other.kind())),
        }
    }
}

register_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Timestamp);

/// Optional fields share the inner type's declared shape; a present value
/// wraps in `Some`, while absent and null entries stay at the `None`
/// default like any other untouched field.
impl<T: FieldType> FieldType for Option<T> {
    const SHAPE: FieldShape = T::SHAPE;

    fn absorb(coerced: Coerced) -> Result<Self, AbsorbError> {
        T::absorb(coerced).map(Some)
    }
}

impl<T: ElementType> FieldType for Vec<T> {
    const SHAPE: FieldShape = FieldShape::List(T::SHAPE);

    fn absorb(coerced: Coerced) -> Result<Self, AbsorbError> {
        match coerced {
            Coerced::ScalarList(values) => values
                .into_iter()
                .map(|value| T::absorb_element(CoercedElement::Scalar(value)))
                .collect(),
            Coerced::InstanceList(instances) => instances
                .into_iter()
                .map(|instance| T::absorb_element(CoercedElement::Instance(instance)))
                .collect(),
            Coerced::Scalar(value) => Err(AbsorbError::mismatch("array", value.kind())),
            Coerced::Document(_) => Err(AbsorbError::mismatch("array", ValueKind::Document)),
            Coerced::Instance(_) => Err(AbsorbError::UnexpectedCoercion { expected: "array" }),
        }
    }
}

// Map-like fields: the nested document is copied shallowly, raw values and
// entry order preserved, no recursion.

impl FieldType for Document {
    const SHAPE: FieldShape = FieldShape::Map;

    fn absorb(coerced: Coerced) -> Result<Self, AbsorbError> {
        match coerced {
            Coerced::Document(doc) => Ok(doc),
            Coerced::Scalar(value) => Err(AbsorbError::mismatch("document", value.kind())),
            _ => Err(AbsorbError::UnexpectedCoercion {
                expected: "Document",
            }),
        }
    }
}

impl FieldType for IndexMap<String, Value> {
    const SHAPE: FieldShape = FieldShape::Map;

    fn absorb(coerced: Coerced) -> Result<Self, AbsorbError> {
        Document::absorb(coerced).map(|doc| doc.into_iter().collect())
    }
}

// Map-like top-level targets take the shallow-copy bypass: no field
// filtering, no recursion into nested values.

impl DocumentType for Document {
    const SHAPE: &'static TypeShape = &TypeShape::Map(MapShape {
        type_name: "Document",
        copy: |document| Box::new(document.clone()),
    });
}

impl DocumentType for IndexMap<String, Value> {
    const SHAPE: &'static TypeShape = &TypeShape::Map(MapShape {
        type_name: "IndexMap<String, Value>",
        copy: |document| {
            Box::new(
                document
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.clone()))
                    .collect::<IndexMap<String, Value>>(),
            )
        },
    });
}
