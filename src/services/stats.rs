//! Statistics service

use std::collections::HashSet;

use crate::models::{Book, LibraryStats};

/// Compute collection statistics.
///
/// Authors are counted by exact string, so "Jane Austen" and "jane austen"
/// count twice.
pub fn library_stats(books: &[Book], showing: usize) -> LibraryStats {
    let authors: HashSet<&str> = books.iter().map(|b| b.author.as_str()).collect();
    LibraryStats {
        total_books: books.len(),
        authors: authors.len(),
        showing,
    }
}
