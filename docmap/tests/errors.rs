//! Failure modes: every violated assumption is fatal to the single call it
//! occurs in and surfaces as one `MapError`.

use docmap::{
    AbsorbError, DocumentType, MapErrorKind, StructShape, TypeShape, ValueKind, doc,
    from_document, from_document_shape,
};

#[derive(Debug, Default, DocumentType)]
struct Avenger {
    name: String,
    age: i32,
    male: bool,
}

#[derive(Debug, Default, DocumentType)]
struct Movie {
    title: String,
    hero: Avenger,
    actors: Vec<String>,
}

#[derive(Debug, Default, DocumentType)]
struct Team {
    avengers: Vec<Avenger>,
}

#[test]
fn shape_without_factory_is_missing_constructor() {
    static GHOST: TypeShape = TypeShape::Struct(StructShape {
        type_name: "Ghost",
        fields: &[],
        factory: None,
    });

    let err = from_document_shape(&doc! {}, &GHOST).unwrap_err();

    assert_eq!(
        err.kind,
        MapErrorKind::MissingConstructor { type_name: "Ghost" },
    );
    assert_eq!(err.path_string(), "<root>");
}

#[test]
fn factory_type_confusion_is_instantiation_failure() {
    // A hand-registered shape whose factory builds the wrong concrete type.
    #[derive(Debug)]
    struct Impostor;

    impl DocumentType for Impostor {
        const SHAPE: &'static TypeShape = &TypeShape::Struct(StructShape {
            type_name: "Impostor",
            fields: &[],
            factory: Some(|| Box::new(0i64)),
        });
    }

    let err = from_document::<Impostor>(&doc! {}).unwrap_err();

    assert_eq!(
        err.kind,
        MapErrorKind::Instantiation { type_name: "Impostor" },
    );
}

#[test]
fn scalar_field_rejects_a_nested_document() {
    let document = doc! {
        "name": "Iron Man",
        "age": { "value": 30 },
    };

    let err = from_document::<Avenger>(&document).unwrap_err();

    assert_eq!(err.path_string(), ".age");
    assert_eq!(
        err.kind,
        MapErrorKind::FieldAssignment {
            type_name: "Avenger",
            field: "age",
            source: AbsorbError::Mismatch {
                expected: "i32",
                got: ValueKind::Document,
            },
        },
    );
}

#[test]
fn struct_field_rejects_a_scalar() {
    let document = doc! {
        "title": "Iron Man 2",
        "hero": "not a document",
    };

    let err = from_document::<Movie>(&document).unwrap_err();

    assert_eq!(err.path_string(), ".hero");
    assert!(matches!(
        err.kind,
        MapErrorKind::FieldAssignment {
            type_name: "Movie",
            field: "hero",
            source: AbsorbError::Mismatch {
                expected: "document",
                got: ValueKind::String,
            },
        },
    ));
}

#[test]
fn integer_narrowing_out_of_range_fails_assignment() {
    let document = doc! { "age": 3_000_000_000i64 };

    let err = from_document::<Avenger>(&document).unwrap_err();

    assert_eq!(
        err.kind,
        MapErrorKind::FieldAssignment {
            type_name: "Avenger",
            field: "age",
            source: AbsorbError::OutOfRange {
                target: "i32",
                value: 3_000_000_000,
            },
        },
    );
}

#[test]
fn scalar_element_in_structured_list_is_unsupported() {
    let document = doc! {
        "avengers": [{ "name": "Iron Man" }, "Hulk"],
    };

    let err = from_document::<Team>(&document).unwrap_err();

    assert_eq!(err.path_string(), ".avengers[1]");
    assert!(matches!(
        err.kind,
        MapErrorKind::UnsupportedShape {
            got: ValueKind::String,
            ..
        },
    ));
}

#[test]
fn array_nested_in_array_is_unsupported() {
    let document = doc! {
        "title": "Iron Man 2",
        "actors": [["Robert Downey JR"]],
    };

    let err = from_document::<Movie>(&document).unwrap_err();

    assert_eq!(err.path_string(), ".actors[0]");
    assert!(matches!(
        err.kind,
        MapErrorKind::UnsupportedShape {
            got: ValueKind::Array,
            ..
        },
    ));
}

#[test]
fn nested_failures_carry_the_full_path() {
    let document = doc! {
        "avengers": [
            { "name": "Iron Man", "age": 30 },
            { "name": "Hulk", "age": "unknown" },
        ],
    };

    let err = from_document::<Team>(&document).unwrap_err();

    assert_eq!(err.path_string(), ".avengers[1].age");
    assert!(matches!(
        err.kind,
        MapErrorKind::FieldAssignment {
            type_name: "Avenger",
            field: "age",
            source: AbsorbError::Mismatch {
                expected: "i32",
                got: ValueKind::String,
            },
        },
    ));
}

#[test]
fn errors_expose_their_cause_chain() {
    use std::error::Error as _;

    let document = doc! { "age": "old" };
    let err = from_document::<Avenger>(&document).unwrap_err();

    let source = err.source().expect("field assignment carries a cause");
    assert_eq!(source.to_string(), "expected i32, got string");
    assert_eq!(err.to_string(), "at .age: cannot assign `Avenger.age`: expected i32, got string");
}
