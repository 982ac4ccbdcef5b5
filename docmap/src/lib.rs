//! Map dynamic database documents into typed Rust values, shape-first.
//!
//! `docmap` converts the ordered, string-keyed value trees a document
//! database driver hands back ([`Document`]) into plain Rust structs,
//! driven entirely by the target type's declared field set: no schema is
//! declared up front, and nothing is discovered at runtime. Each type
//! registers a `'static` shape descriptor through
//! [`#[derive(DocumentType)]`](macro@DocumentType), and the engine walks
//! document and shape together.
//!
//! ```
//! use docmap::{doc, from_document, DocumentType};
//!
//! #[derive(Debug, Default, DocumentType)]
//! struct Avenger {
//!     name: String,
//!     age: i32,
//!     male: bool,
//! }
//!
//! #[derive(Debug, Default, DocumentType)]
//! struct Movie {
//!     title: String,
//!     hero: Avenger,
//!     actors: Vec<String>,
//! }
//!
//! let document = doc! {
//!     "title": "Iron Man 2",
//!     "hero": { "name": "Iron Man", "age": 30, "male": true },
//!     "actors": ["Robert Downey JR", "Jon Favreau"],
//! };
//!
//! let movie: Movie = from_document(&document)?;
//! assert_eq!(movie.hero.name, "Iron Man");
//! assert_eq!(movie.actors.len(), 2);
//! # Ok::<(), docmap::MapError>(())
//! ```
//!
//! Population rules, in short: exact case-sensitive key matching; unknown
//! keys ignored; absent and null entries leave fields at their `Default`
//! values; list fields follow their declared element type; map-like fields
//! (and map-like top-level targets) receive a shallow, unmapped copy of the
//! document's entries. Any violated assumption fails the whole call with a
//! single [`MapError`].

#![warn(missing_docs)]

mod coerce;
mod error;
mod mapper;
mod page;

pub use docmap_core::*;
pub use docmap_core::{doc, value};
pub use docmap_macros::DocumentType;

pub use error::{MapError, MapErrorKind, PathSegment};
pub use mapper::{
    FromDocuments, from_document, from_document_opt, from_document_shape, from_document_values,
    from_documents,
};
pub use page::DocumentPage;
