//! Literal construction macros for documents and values, mostly useful in
//! tests and fixtures.

/// Builds a [`Value`](crate::Value) from a JSON-ish literal.
///
/// Supports `null`, nested `{ ... }` documents, `[ ... ]` arrays, and any
/// expression convertible with `Value::from` (parenthesize compound
/// expressions).
///
/// ```
/// use docmap_core::{value, Value};
///
/// let v = value!({ "name": "Iron Man", "tags": ["a", "b"], "score": 4 });
/// assert!(matches!(v, Value::Document(_)));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([ $( $element:tt ),* $(,)? ]) => {
        $crate::Value::Array(vec![ $( $crate::value!($element) ),* ])
    };
    ({ $( $key:literal : $val:tt ),* $(,)? }) => {
        $crate::Value::Document($crate::doc! { $( $key : $val ),* })
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Document`](crate::Document) from `"key": value` pairs, with
/// the same value grammar as [`value!`].
///
/// ```
/// use docmap_core::doc;
///
/// let movie = doc! {
///     "title": "Iron Man 2",
///     "hero": { "name": "Iron Man", "age": 30, "male": true },
/// };
/// assert_eq!(movie.len(), 2);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    ( $( $key:literal : $val:tt ),* $(,)? ) => {{
        let mut document = $crate::Document::new();
        $( document.insert($key, $crate::value!($val)); )*
        document
    }};
}
