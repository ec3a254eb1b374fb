//! Selection-Driven Laziness Tests
//!
//! Resolution cost must be proportional to the requested field graph:
//! a selection that asks only for scalar fields must never trigger the
//! relation lookups, observable here through a call-counting store
//! double.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::{json, Map};

use shelfql::executor::{QueryExecutor, RecordReader, RecordWriter, RootRegistry};
use shelfql::query::parse_document;
use shelfql::schema::library_registry;
use shelfql::store::{Author, Book};

// =============================================================================
// Instrumented Store Double
// =============================================================================

#[derive(Default)]
struct CountingStore {
    books: Mutex<Vec<Book>>,
    authors: Mutex<Vec<Author>>,
    author_lookups: AtomicUsize,
    book_filter_scans: AtomicUsize,
}

impl CountingStore {
    fn seeded() -> Self {
        let store = Self::default();
        store.insert_author("Patrick Rothfuss".to_string());
        store.insert_author("Brent Weeks".to_string());
        store.insert_book("Name of the Rose".to_string(), 1);
        store.insert_book("The Way of Shadows".to_string(), 2);
        store.insert_book("Beyond the Shadows".to_string(), 2);
        store
    }
}

impl RecordReader for CountingStore {
    fn book_by_id(&self, id: i32) -> Option<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    fn author_by_id(&self, id: i32) -> Option<Author> {
        self.author_lookups.fetch_add(1, Ordering::SeqCst);
        self.authors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    fn authors(&self) -> Vec<Author> {
        self.authors.lock().unwrap().clone()
    }

    fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.book_filter_scans.fetch_add(1, Ordering::SeqCst);
        self.books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }
}

impl RecordWriter for CountingStore {
    fn insert_book(&self, name: String, author_id: i32) -> Book {
        let mut books = self.books.lock().unwrap();
        let book = Book {
            id: books.len() as i32 + 1,
            name,
            author_id,
        };
        books.push(book.clone());
        book
    }

    fn insert_author(&self, name: String) -> Author {
        let mut authors = self.authors.lock().unwrap();
        let author = Author {
            id: authors.len() as i32 + 1,
            name,
        };
        authors.push(author.clone());
        author
    }
}

fn run(store: &CountingStore, document: &str) -> serde_json::Value {
    let types = library_registry().unwrap();
    let roots = RootRegistry::library().unwrap();
    let executor = QueryExecutor::new(store, &types, &roots);
    let parsed = parse_document(document).unwrap();
    let operation = parsed.operation(None).unwrap();
    executor.execute(operation, &Map::new()).unwrap()
}

// =============================================================================
// Laziness Properties
// =============================================================================

#[test]
fn test_scalar_only_author_query_skips_books_scan() {
    let store = CountingStore::seeded();
    let data = run(&store, "{ author(id: 1) { id name } }");
    assert_eq!(data, json!({"author": {"id": 1, "name": "Patrick Rothfuss"}}));
    assert_eq!(store.book_filter_scans.load(Ordering::SeqCst), 0);
    assert_eq!(store.author_lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_scalar_only_books_query_skips_author_lookup() {
    let store = CountingStore::seeded();
    run(&store, "{ books { id name authorId } }");
    assert_eq!(store.author_lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_selected_relation_resolves_once_per_parent() {
    let store = CountingStore::seeded();
    run(&store, "{ authors { name books { name } } }");
    // One filter scan per author, none for the scalar name next to it.
    assert_eq!(store.book_filter_scans.load(Ordering::SeqCst), 2);
    assert_eq!(store.author_lookups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_nested_relation_cost_follows_selection_depth() {
    let store = CountingStore::seeded();
    run(&store, "{ books { author { name books { name } } } }");
    // 3 books resolve their author, each author then re-scans for books.
    assert_eq!(store.author_lookups.load(Ordering::SeqCst), 3);
    assert_eq!(store.book_filter_scans.load(Ordering::SeqCst), 3);
}

#[test]
fn test_mutation_result_resolution_is_lazy_too() {
    let store = CountingStore::seeded();
    run(
        &store,
        "mutation { addBook(name: \"Dune\", authorId: 2) { id name } }",
    );
    assert_eq!(store.author_lookups.load(Ordering::SeqCst), 0);
    assert_eq!(store.book_filter_scans.load(Ordering::SeqCst), 0);
}
