//! Read model handed to the presentation layer

use serde::Serialize;

use super::{Book, BookDraft, FieldErrors};

/// Collection statistics shown under the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    /// Books in the collection
    pub total_books: usize,
    /// Distinct author strings in the collection
    pub authors: usize,
    /// Books passing the current search
    pub showing: usize,
}

/// Snapshot of everything the page renders
#[derive(Debug, Clone, Serialize)]
pub struct LibraryView {
    pub query: String,
    pub books: Vec<Book>,
    pub draft: BookDraft,
    pub errors: FieldErrors,
    pub stats: LibraryStats,
}

impl LibraryView {
    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// `Found 2 books matching "orwell"`, only while a search is active
    pub fn search_summary(&self) -> Option<String> {
        if !self.is_searching() {
            return None;
        }
        Some(format!(
            "Found {} matching \"{}\"",
            books_label(self.books.len()),
            self.query
        ))
    }

    pub fn heading(&self) -> String {
        format!("Book Collection ({})", books_label(self.books.len()))
    }

    /// Placeholder text when nothing is visible
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.books.is_empty() {
            return None;
        }
        if self.is_searching() {
            Some("No books found matching your search.")
        } else {
            Some("No books in the library yet.")
        }
    }
}

/// "1 book", "3 books"
pub fn books_label(count: usize) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{} books", count)
    }
}
