//! In-memory record store
//!
//! Holds the two collections behind per-collection `RwLock`s. Inserts
//! compute `id = len + 1` and append while holding the write lock, so id
//! uniqueness holds under concurrent request handlers. Absence is `None`,
//! never an error.

use std::sync::RwLock;

use crate::executor::{RecordReader, RecordWriter};

use super::record::{Author, Book};

/// In-memory store for the book and author collections.
///
/// Reads clone out of the read lock; the collections are small and records
/// are immutable, so handing out owned copies keeps lock scopes minimal.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<Book>>,
    authors: RwLock<Vec<Author>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books currently stored.
    pub fn book_count(&self) -> usize {
        self.books.read().expect("books lock poisoned").len()
    }

    /// Number of authors currently stored.
    pub fn author_count(&self) -> usize {
        self.authors.read().expect("authors lock poisoned").len()
    }
}

impl RecordReader for MemoryStore {
    fn book_by_id(&self, id: i32) -> Option<Book> {
        self.books
            .read()
            .expect("books lock poisoned")
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    fn author_by_id(&self, id: i32) -> Option<Author> {
        self.authors
            .read()
            .expect("authors lock poisoned")
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    fn books(&self) -> Vec<Book> {
        self.books.read().expect("books lock poisoned").clone()
    }

    fn authors(&self) -> Vec<Author> {
        self.authors.read().expect("authors lock poisoned").clone()
    }

    fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        // Derived relationship: full scan, insertion order preserved.
        self.books
            .read()
            .expect("books lock poisoned")
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }
}

impl RecordWriter for MemoryStore {
    fn insert_book(&self, name: String, author_id: i32) -> Book {
        let mut books = self.books.write().expect("books lock poisoned");
        let book = Book {
            id: books.len() as i32 + 1,
            name,
            author_id,
        };
        books.push(book.clone());
        book
    }

    fn insert_author(&self, name: String) -> Author {
        let mut authors = self.authors.write().expect("authors lock poisoned");
        let author = Author {
            id: authors.len() as i32 + 1,
            name,
        };
        authors.push(author.clone());
        author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.insert_author("Patrick Rothfuss".to_string());
        let second = store.insert_author("Brent Weeks".to_string());
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = MemoryStore::new();
        store.insert_book("Name of the Rose".to_string(), 1);
        let book = store.book_by_id(1).unwrap();
        assert_eq!(book.name, "Name of the Rose");
        assert_eq!(book.author_id, 1);
    }

    #[test]
    fn test_missing_id_is_none_not_error() {
        let store = MemoryStore::new();
        assert!(store.book_by_id(9999).is_none());
        assert!(store.author_by_id(9999).is_none());
    }

    #[test]
    fn test_books_preserve_insertion_order() {
        let store = MemoryStore::new();
        store.insert_book("first".to_string(), 1);
        store.insert_book("second".to_string(), 2);
        store.insert_book("third".to_string(), 1);
        let names: Vec<_> = store.books().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_books_by_author_filters_full_scan() {
        let store = MemoryStore::new();
        store.insert_book("first".to_string(), 1);
        store.insert_book("second".to_string(), 2);
        store.insert_book("third".to_string(), 1);
        let ids: Vec<_> = store.books_by_author(1).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(store.books_by_author(42).is_empty());
    }

    #[test]
    fn test_dangling_author_reference_allowed() {
        let store = MemoryStore::new();
        let book = store.insert_book("orphan".to_string(), 99);
        assert_eq!(book.author_id, 99);
        assert!(store.author_by_id(99).is_none());
    }
}
