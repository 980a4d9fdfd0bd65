//! Book domain methods on Repository

use chrono::Utc;

use super::Repository;
use crate::models::{Book, BookId, NewBook};

impl Repository {
    /// All books in insertion order
    pub fn books_list(&self) -> &[Book] {
        &self.books
    }

    /// Append a book at the end of the collection with a fresh id.
    /// Callers are expected to have validated `data`.
    pub fn books_create(&mut self, data: &NewBook) -> Book {
        let book = Book {
            id: self.next_id,
            title: data.title.clone(),
            author: data.author.clone(),
            added_at: Utc::now(),
        };
        self.next_id += 1;
        self.books.push(book.clone());
        book
    }

    /// Remove the book with this id, preserving the order of the others.
    /// Returns `None` if no such book exists.
    pub fn books_delete(&mut self, id: BookId) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(pos))
    }
}
