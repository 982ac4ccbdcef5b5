//! Lazy sequence mapping and keyed-collection mapping.

use std::cell::Cell;
use std::rc::Rc;

use docmap::{Document, DocumentPage, DocumentType, doc, from_document_values, from_documents};

#[derive(Debug, Default, PartialEq, DocumentType)]
struct Avenger {
    name: String,
}

/// Produces documents on demand and counts how many were pulled.
struct Probe {
    produced: Rc<Cell<usize>>,
    remaining: usize,
}

impl Probe {
    fn new(count: usize) -> (Self, Rc<Cell<usize>>) {
        let produced = Rc::new(Cell::new(0));
        (
            Probe {
                produced: Rc::clone(&produced),
                remaining: count,
            },
            produced,
        )
    }
}

impl Iterator for Probe {
    type Item = Document;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.produced.get();
        self.produced.set(index + 1);
        Some(doc! { "name": (format!("avenger-{index}")) })
    }
}

#[test]
fn maps_each_document_in_order() {
    let documents = vec![
        doc! { "name": "Iron Man" },
        doc! { "name": "Hulk" },
        doc! { "name": "Thor" },
    ];

    let avengers: Vec<Avenger> = from_documents(documents)
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        avengers,
        [
            Avenger { name: "Iron Man".into() },
            Avenger { name: "Hulk".into() },
            Avenger { name: "Thor".into() },
        ],
    );
}

#[test]
fn pulls_no_more_input_than_requested() {
    let (probe, produced) = Probe::new(100);
    let mut mapped = from_documents::<Avenger, _>(probe);

    assert_eq!(produced.get(), 0);

    let first = mapped.next().unwrap().unwrap();
    assert_eq!(first.name, "avenger-0");
    assert_eq!(produced.get(), 1);

    let _ = mapped.next();
    assert_eq!(produced.get(), 2);
}

#[test]
fn maps_values_of_a_keyed_collection_preserving_order() {
    let entries = vec![
        ("first", doc! { "name": "Iron Man" }),
        ("second", doc! { "name": "Hulk" }),
    ];

    let mapped = from_document_values::<_, Avenger, _>(entries).unwrap();

    assert_eq!(mapped.keys().copied().collect::<Vec<_>>(), ["first", "second"]);
    assert_eq!(mapped["first"].name, "Iron Man");
    assert_eq!(mapped["second"].name, "Hulk");
}

#[test]
fn page_mapping_keeps_total_and_laziness() {
    let (probe, produced) = Probe::new(3);
    let page = DocumentPage::of(probe, 42);

    let mapped = page.map_results::<Avenger>();
    assert_eq!(mapped.total(), 42);
    assert_eq!(produced.get(), 0);

    let avengers: Vec<Avenger> = mapped.into_iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(avengers.len(), 3);
    assert_eq!(produced.get(), 3);
    assert_eq!(avengers[2].name, "avenger-2");
}
