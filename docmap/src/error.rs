//! The single error value a failed mapping call surfaces.

use core::fmt;

use docmap_core::{AbsorbError, ValueKind};

/// A segment of the path from the mapping root to the error site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// A field (and document key) name.
    Field(&'static str),
    /// An index into a list value.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Why a mapping call failed.
///
/// Every failure is fatal to the single call it occurred in: there is no
/// partial-object recovery, no retry, and no silent skipping of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapErrorKind {
    /// The target shape has no registered instance factory.
    MissingConstructor {
        /// The target type's name.
        type_name: &'static str,
    },
    /// The factory produced an instance of a different concrete type than
    /// the one being mapped into.
    Instantiation {
        /// The target type's name.
        type_name: &'static str,
    },
    /// A field's registered setter rejected the coerced value.
    FieldAssignment {
        /// The target type's name.
        type_name: &'static str,
        /// The field being assigned.
        field: &'static str,
        /// What the setter reported.
        source: AbsorbError,
    },
    /// A raw value's shape has no defined coercion rule.
    UnsupportedShape {
        /// Where the shape turned up.
        context: &'static str,
        /// The offending raw kind.
        got: ValueKind,
    },
}

impl fmt::Display for MapErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapErrorKind::MissingConstructor { type_name } => {
                write!(f, "`{type_name}` has no registered instance factory")
            }
            MapErrorKind::Instantiation { type_name } => {
                write!(
                    f,
                    "factory for `{type_name}` produced an instance of another type"
                )
            }
            MapErrorKind::FieldAssignment {
                type_name,
                field,
                source,
            } => {
                write!(f, "cannot assign `{type_name}.{field}`: {source}")
            }
            MapErrorKind::UnsupportedShape { context, got } => {
                write!(f, "unsupported document shape ({context}), got {got}")
            }
        }
    }
}

/// Error type for document mapping.
///
/// Carries the failure [`kind`](MapError::kind) and the path through the
/// source document where it occurred, built while unwinding from the error
/// site back to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapError {
    /// The specific failure.
    pub kind: MapErrorKind,
    /// Path from the mapping root to the error site.
    pub path: Vec<PathSegment>,
}

impl MapError {
    pub(crate) fn new(kind: MapErrorKind) -> Self {
        MapError {
            kind,
            path: Vec::new(),
        }
    }

    /// Prepends a path segment (used while unwinding from the error site).
    pub(crate) fn with_segment(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Formats the error path, `<root>` when the failure was at the top.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "<root>".into()
        } else {
            use core::fmt::Write;
            let mut out = String::new();
            for segment in &self.path {
                let _ = write!(out, "{segment}");
            }
            out
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl core::error::Error for MapError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            MapErrorKind::FieldAssignment { source, .. } => Some(source),
            _ => None,
        }
    }
}
