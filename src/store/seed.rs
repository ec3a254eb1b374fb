//! Initial catalog data
//!
//! The seed rows go through the normal insert path so ids follow the
//! `len + 1` assignment rule.

use crate::executor::RecordWriter;

use super::memory::MemoryStore;

/// Build a store pre-loaded with the initial library catalog.
pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();

    // Authors first so the books below reference ids 1-3.
    store.insert_author("Patrick Rothfuss".to_string());
    store.insert_author("J. R. R. Tolkien".to_string());
    store.insert_author("Brent Weeks".to_string());

    store.insert_book("Name of the Rose".to_string(), 1);
    store.insert_book("The Name of the Wind".to_string(), 1);
    store.insert_book("The Wise Man's Fear".to_string(), 1);
    store.insert_book("The Fellowship of the Ring".to_string(), 2);
    store.insert_book("The Two Towers".to_string(), 2);
    store.insert_book("The Return of the King".to_string(), 2);
    store.insert_book("The Way of Shadows".to_string(), 3);
    store.insert_book("Beyond the Shadows".to_string(), 3);

    store
}
