//! Carriers for values that came out of coercion and are on their way into
//! a field, plus the error type the final conversion step reports.

use core::fmt;

use crate::{Document, ErasedInstance, Value, ValueKind};

/// The outcome of coercing one raw document value against one declared
/// field shape, ready to be absorbed by the field's registered type.
pub enum Coerced {
    /// A raw scalar, passed through unchanged.
    Scalar(Value),
    /// A defensive copy of a list of raw scalars.
    ScalarList(Vec<Value>),
    /// A recursively mapped nested instance.
    Instance(ErasedInstance),
    /// Recursively mapped list elements, in source order.
    InstanceList(Vec<ErasedInstance>),
    /// A shallow copy of a nested document for a map-like field.
    Document(Document),
}

impl fmt::Debug for Coerced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coerced::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Coerced::ScalarList(values) => f.debug_tuple("ScalarList").field(values).finish(),
            Coerced::Instance(_) => f.write_str("Instance(..)"),
            Coerced::InstanceList(items) => write!(f, "InstanceList(len={})", items.len()),
            Coerced::Document(doc) => f.debug_tuple("Document").field(doc).finish(),
        }
    }
}

/// One element of a coerced list.
pub enum CoercedElement {
    /// A raw scalar element.
    Scalar(Value),
    /// A mapped structured element.
    Instance(ErasedInstance),
}

/// Why a coerced value could not be absorbed into its declared field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsorbError {
    /// The raw value's kind does not match the declared type.
    Mismatch {
        /// What the declared type expected.
        expected: &'static str,
        /// What the document actually contained.
        got: ValueKind,
    },
    /// An integer does not fit the declared width.
    OutOfRange {
        /// The declared integer type.
        target: &'static str,
        /// The offending raw value.
        value: i64,
    },
    /// A mapped instance failed the downcast to the declared type. This
    /// indicates a shape registered against the wrong concrete type.
    InstanceMismatch {
        /// The declared type's name.
        expected: &'static str,
    },
    /// The coercion produced a carrier the declared type has no use for.
    /// Like [`AbsorbError::InstanceMismatch`], only a hand-built shape can
    /// get here.
    UnexpectedCoercion {
        /// The declared type's name.
        expected: &'static str,
    },
}

impl AbsorbError {
    /// Shorthand for [`AbsorbError::Mismatch`].
    pub fn mismatch(expected: &'static str, got: ValueKind) -> Self {
        AbsorbError::Mismatch { expected, got }
    }
}

impl fmt::Display for AbsorbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsorbError::Mismatch { expected, got } => {
                write!(f, "expected {expected}, got {got}")
            }
            AbsorbError::OutOfRange { target, value } => {
                write!(f, "{value} out of range for {target}")
            }
            AbsorbError::InstanceMismatch { expected } => {
                write!(f, "mapped instance is not a `{expected}`")
            }
            AbsorbError::UnexpectedCoercion { expected } => {
                write!(f, "coerced value does not fit a `{expected}` field")
            }
        }
    }
}

impl core::error::Error for AbsorbError {}
