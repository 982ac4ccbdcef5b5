//! `docmap-core` provides the data model shared by the docmap engine:
//! the dynamic [`Value`] / [`Document`] tree on the input side, and the
//! `'static` shape descriptors ([`TypeShape`], [`FieldDef`], …) that drive
//! mapping on the target side.
//!
//! # Design
//!
//! The input tree is a tagged variant restricted to the shapes the engine
//! defines coercion rules for: scalars, nested documents, and homogeneous
//! arrays. The target side is described by per-type field tables registered
//! at compile time (through `#[derive(DocumentType)]` in the `docmap` facade,
//! or built by hand), so no type information is ever discovered at runtime.

#![warn(missing_docs)]

mod value;
pub use value::*;

mod document;
pub use document::*;

mod shape;
pub use shape::*;

mod traits;
pub use traits::*;

mod coerced;
pub use coerced::*;

mod impls;

mod macros;
