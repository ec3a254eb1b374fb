//! Record Store for shelfql
//!
//! Owns the two in-memory collections (books and authors).
//!
//! # Design Principles
//!
//! - Explicit store object, no process globals
//! - Insertion under the collection's write lock (single-writer discipline)
//! - `id = len + 1` at insertion time, unique per collection
//! - Records immutable once created, never deleted
//! - Absence is `None`, never an error

mod memory;
mod record;
mod seed;

pub use memory::MemoryStore;
pub use record::{Author, Book, Record};
pub use seed::seeded_store;
