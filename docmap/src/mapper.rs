//! The mapping entry points.

use core::hash::Hash;
use core::marker::PhantomData;

use docmap_core::{Document, DocumentType, ErasedInstance, StructShape, TypeShape};
use indexmap::IndexMap;

use crate::coerce::coerce;
use crate::error::{MapError, MapErrorKind, PathSegment};

/// Maps one document into a `T`.
///
/// Population is keyed by exact, case-sensitive match between document keys
/// and field names. Unknown keys are ignored; absent or null entries leave
/// the field at its default value. The returned instance is fresh and owned
/// entirely by the caller.
///
/// ```
/// use docmap::{doc, from_document, DocumentType};
///
/// #[derive(Debug, Default, DocumentType)]
/// struct Avenger {
///     name: String,
///     age: i32,
/// }
///
/// let avenger: Avenger = from_document(&doc! { "name": "Iron Man", "age": 30 })?;
/// assert_eq!(avenger.name, "Iron Man");
/// # Ok::<(), docmap::MapError>(())
/// ```
pub fn from_document<T: DocumentType>(document: &Document) -> Result<T, MapError> {
    from_document_shape(document, T::SHAPE)?
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| {
            MapError::new(MapErrorKind::Instantiation {
                type_name: T::SHAPE.type_name(),
            })
        })
}

/// Maps an optional document, propagating absence: `None` in, `Ok(None)`
/// out, for any target type.
pub fn from_document_opt<T: DocumentType>(
    document: Option<&Document>,
) -> Result<Option<T>, MapError> {
    document.map(from_document).transpose()
}

/// The erased engine entry: maps a document against an explicit shape.
///
/// This is what recursion and dynamic callers go through; [`from_document`]
/// is the typed convenience over it.
pub fn from_document_shape(
    document: &Document,
    shape: &'static TypeShape,
) -> Result<ErasedInstance, MapError> {
    match shape {
        // Map-like targets bypass field-based population: shallow entry
        // copy, no recursion, no key filtering.
        TypeShape::Map(map_shape) => Ok((map_shape.copy)(document)),
        TypeShape::Struct(struct_shape) => map_struct(document, struct_shape),
    }
}

fn map_struct(document: &Document, shape: &StructShape) -> Result<ErasedInstance, MapError> {
    log::trace!("mapping document into `{}`", shape.type_name);

    let factory = shape.factory.ok_or_else(|| {
        MapError::new(MapErrorKind::MissingConstructor {
            type_name: shape.type_name,
        })
    })?;
    let mut instance = factory();

    for field in shape.fields {
        let Some(value) = document.get(field.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        let coerced =
            coerce(field, value).map_err(|err| err.with_segment(PathSegment::Field(field.name)))?;
        (field.assign)(&mut *instance, coerced).map_err(|source| {
            MapError::new(MapErrorKind::FieldAssignment {
                type_name: shape.type_name,
                field: field.name,
                source,
            })
            .with_segment(PathSegment::Field(field.name))
        })?;
    }

    Ok(instance)
}

/// Lazily maps a sequence of documents.
///
/// One input document is pulled per `next()` call, with no look-ahead and
/// no buffering, so this composes with a cursor-backed upstream that
/// streams results. Order is preserved.
pub fn from_documents<T, I>(documents: I) -> FromDocuments<I::IntoIter, T>
where
    T: DocumentType,
    I: IntoIterator<Item = Document>,
{
    FromDocuments {
        documents: documents.into_iter(),
        _target: PhantomData,
    }
}

/// Iterator returned by [`from_documents`].
pub struct FromDocuments<I, T> {
    documents: I,
    _target: PhantomData<fn() -> T>,
}

impl<I, T> Iterator for FromDocuments<I, T>
where
    I: Iterator<Item = Document>,
    T: DocumentType,
{
    type Item = Result<T, MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.documents.next().map(|document| from_document(&document))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.documents.size_hint()
    }
}

/// Maps the values of a keyed collection of documents, preserving entry
/// order. The first failure aborts the whole call.
pub fn from_document_values<K, T, I>(entries: I) -> Result<IndexMap<K, T>, MapError>
where
    K: Hash + Eq,
    T: DocumentType,
    I: IntoIterator<Item = (K, Document)>,
{
    let mut out = IndexMap::new();
    for (key, document) in entries {
        out.insert(key, from_document(&document)?);
    }
    Ok(out)
}
