//! Record types held by the store
//!
//! Two entity kinds exist: books and authors. Records are immutable once
//! created and are never deleted; the only write operation is an append.

use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// `author_id` is a plain foreign key with no enforced referential
/// integrity; a dangling reference resolves to "not found" on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

/// An author in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// A record of either entity kind, as handed to field resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Book(Book),
    Author(Author),
}

impl Record {
    /// The record's id, common to both kinds.
    pub fn id(&self) -> i32 {
        match self {
            Record::Book(book) => book.id,
            Record::Author(author) => author.id,
        }
    }

    /// The record's name, common to both kinds.
    pub fn name(&self) -> &str {
        match self {
            Record::Book(book) => &book.name,
            Record::Author(author) => &author.name,
        }
    }
}

impl From<Book> for Record {
    fn from(book: Book) -> Self {
        Record::Book(book)
    }
}

impl From<Author> for Record {
    fn from(author: Author) -> Self {
        Record::Author(author)
    }
}
