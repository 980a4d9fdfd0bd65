//! Catalog management service

use validator::Validate;

use crate::{
    models::{Book, BookDraft, BookId, FieldErrors, Field, DUPLICATE_MESSAGE},
    repository::Repository,
};

/// Books whose title or author contains `query`, ignoring case.
/// An empty query keeps every book. Order is preserved.
pub fn filter_books<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    if query.is_empty() {
        return books.iter().collect();
    }
    let needle = query.to_lowercase();
    books.iter().filter(|b| b.matches(&needle)).collect()
}

/// Check a draft against the add form rules.
///
/// Title and author are required after trimming. A draft matching an existing
/// (title, author) pair is reported on the title field, replacing any
/// title-required message. Returns an empty mapping when the draft is valid.
pub fn validate_draft(books: &[Book], draft: &BookDraft) -> FieldErrors {
    let new_book = draft.to_new_book();
    let mut errors = match new_book.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => FieldErrors::from(e),
    };

    if books.iter().any(|b| b.same_entry(&new_book.title, &new_book.author)) {
        errors.insert(Field::Title, DUPLICATE_MESSAGE);
    }

    errors
}

#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full collection in insertion order
    pub fn books(&self) -> &[Book] {
        self.repository.books_list()
    }

    /// Search books by title or author
    pub fn search(&self, query: &str) -> Vec<&Book> {
        filter_books(self.books(), query)
    }

    pub fn validate(&self, draft: &BookDraft) -> FieldErrors {
        validate_draft(self.books(), draft)
    }

    /// Validate and append a book built from the trimmed draft.
    /// On failure the collection is left untouched.
    pub fn add_book(&mut self, draft: &BookDraft) -> Result<Book, FieldErrors> {
        let errors = self.validate(draft);
        if !errors.is_empty() {
            tracing::debug!("Catalog add rejected: {}", errors);
            return Err(errors);
        }

        let book = self.repository.books_create(&draft.to_new_book());
        tracing::info!("Catalog add: id={} \"{}\" by {}", book.id, book.title, book.author);
        Ok(book)
    }

    /// Remove a book. Unknown ids are ignored.
    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        let removed = self.repository.books_delete(id);
        match &removed {
            Some(book) => tracing::info!("Catalog remove: id={} \"{}\"", book.id, book.title),
            None => tracing::debug!("Catalog remove: no book with id={}", id),
        }
        removed
    }

    /// Add each draft through the regular add path. Invalid or duplicate
    /// entries are skipped. Returns the number of books added.
    pub fn seed<I>(&mut self, drafts: I) -> usize
    where
        I: IntoIterator<Item = BookDraft>,
    {
        let mut added = 0;
        for draft in drafts {
            match self.add_book(&draft) {
                Ok(_) => added += 1,
                Err(errors) => tracing::warn!(
                    "Skipping seed entry \"{}\" by \"{}\": {}",
                    draft.title,
                    draft.author,
                    errors
                ),
            }
        }
        added
    }
}
