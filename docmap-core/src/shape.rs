//! Shape descriptors: the `'static`, compile-time-built description of a
//! mapping target that replaces runtime field discovery.

use core::any::Any;

use crate::{AbsorbError, Coerced, Document};

/// A freshly built target instance with its concrete type erased, so shapes
/// of different types can flow through one recursive engine.
pub type ErasedInstance = Box<dyn Any>;

/// Indirection to a nested type's shape. The function-pointer hop keeps
/// shape constants finite when types mention each other.
pub type ShapeFn = fn() -> &'static TypeShape;

/// Builds a zero-initialized instance of the shape's type.
pub type FactoryFn = fn() -> ErasedInstance;

/// Writes one coerced value into one field of an erased instance.
///
/// Generated per field at registration time, so the downcast and the final
/// scalar conversion are checked against the declared field type.
pub type AssignFn = fn(&mut dyn Any, Coerced) -> Result<(), AbsorbError>;

/// Copies a document shallowly into a map-like target type.
pub type MapCopyFn = fn(&Document) -> ErasedInstance;

/// The shape of a mapping target type.
#[derive(Debug)]
pub enum TypeShape {
    /// A struct populated field by field.
    Struct(StructShape),
    /// A map-like type that receives a shallow copy of the document's
    /// entries, bypassing field-based population entirely.
    Map(MapShape),
}

impl TypeShape {
    /// The target type's name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeShape::Struct(shape) => shape.type_name,
            TypeShape::Map(shape) => shape.type_name,
        }
    }
}

/// Field table and factory for a struct target.
#[derive(Debug)]
pub struct StructShape {
    /// The target type's name, for diagnostics.
    pub type_name: &'static str,
    /// The full assignable field set, in declaration order. Order is stable
    /// across calls by construction.
    pub fields: &'static [FieldDef],
    /// Builds a default instance to populate. `None` means the type was
    /// registered without a usable constructor.
    pub factory: Option<FactoryFn>,
}

impl StructShape {
    /// Looks up a field descriptor by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Shape of a map-like target.
#[derive(Debug)]
pub struct MapShape {
    /// The target type's name, for diagnostics.
    pub type_name: &'static str,
    /// Shallow entry copy into the concrete map type.
    pub copy: MapCopyFn,
}

/// One assignable field of a struct target.
#[derive(Debug)]
pub struct FieldDef {
    /// Field name; document keys must match it exactly, case-sensitively.
    pub name: &'static str,
    /// The field's declared shape, driving coercion dispatch.
    pub shape: FieldShape,
    /// Generated setter for this field.
    pub assign: AssignFn,
}

/// The declared shape of a field, from the target type's point of view.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// A leaf scalar.
    Scalar(ScalarKind),
    /// A nested struct, mapped recursively.
    Struct(ShapeFn),
    /// A homogeneous list; the element shape comes from the declared
    /// element type, never from runtime content.
    List(ElementShape),
    /// A map-like field: the nested document is copied shallowly, with raw
    /// values preserved and no recursion.
    Map,
}

/// The declared shape of a list element.
#[derive(Debug, Clone, Copy)]
pub enum ElementShape {
    /// Scalar elements are copied over unmapped.
    Scalar(ScalarKind),
    /// Structured elements must be nested documents and are mapped
    /// element-wise.
    Struct(ShapeFn),
}

/// The scalar leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Booleans.
    Bool,
    /// Integers of any declared width.
    Int,
    /// Floating-point numbers.
    Float,
    /// Strings.
    String,
    /// Instants in time.
    DateTime,
}
