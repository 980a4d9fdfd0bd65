//! Repository layer holding the book collection in memory

pub mod books;

use crate::models::{Book, BookId};

/// In-memory store for the collection.
///
/// Books are kept in insertion order. Ids come from a counter that only moves
/// forward, so an id is never handed out twice even after its book is removed.
#[derive(Debug, Clone)]
pub struct Repository {
    books: Vec<Book>,
    next_id: BookId,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
