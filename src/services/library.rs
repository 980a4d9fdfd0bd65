//! Library state manager
//!
//! Owns the collection together with the state derived from user input: the
//! search query, the add-form draft, and the draft's validation messages. The
//! presentation layer reads a [`LibraryView`] and sends [`Intent`]s back.
//! Each intent runs to completion before the next one is handled.

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookId, Field, FieldErrors, LibraryView},
    services::{catalog::CatalogService, stats},
};

/// User action dispatched by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SearchChanged(String),
    SearchCleared,
    FieldChanged(Field, String),
    AddRequested,
    RemoveRequested(BookId),
}

/// What an intent did to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Only search or draft state changed
    Updated,
    Added(Book),
    /// The draft was refused; messages are in [`Library::errors`]
    Rejected,
    Removed(Book),
    /// Remove requested for an id that is not in the collection
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: CatalogService,
    query: String,
    draft: BookDraft,
    errors: FieldErrors,
}

impl Library {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Books passing the current search, in collection order
    pub fn visible_books(&self) -> Vec<&Book> {
        self.catalog.search(&self.query)
    }

    /// Handle one user action
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        tracing::debug!("Dispatching {:?}", intent);
        match intent {
            Intent::SearchChanged(query) => {
                self.set_query(query);
                Outcome::Updated
            }
            Intent::SearchCleared => {
                self.clear_query();
                Outcome::Updated
            }
            Intent::FieldChanged(field, value) => {
                self.edit_field(field, value);
                Outcome::Updated
            }
            Intent::AddRequested => match self.submit_draft() {
                Ok(book) => Outcome::Added(book),
                Err(_) => Outcome::Rejected,
            },
            Intent::RemoveRequested(id) => match self.remove_book(id) {
                Some(book) => Outcome::Removed(book),
                None => Outcome::NotFound,
            },
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Update one draft field and drop that field's message, if any.
    /// Messages on other fields stay until the next add attempt.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value);
        self.errors.clear_field(field);
    }

    /// Try to add the current draft.
    ///
    /// On success the draft is reset and all messages are cleared. On failure
    /// the draft is kept, the messages are replaced with the new ones and the
    /// collection is left as it was.
    pub fn submit_draft(&mut self) -> AppResult<Book> {
        match self.catalog.add_book(&self.draft) {
            Ok(book) => {
                self.draft.clear();
                self.errors.clear();
                Ok(book)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(AppError::Validation(errors))
            }
        }
    }

    /// Remove a book by id. Unknown ids are a no-op.
    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        self.catalog.remove_book(id)
    }

    /// Snapshot of the state for rendering
    pub fn view(&self) -> LibraryView {
        let books: Vec<Book> = self.visible_books().into_iter().cloned().collect();
        let stats = stats::library_stats(self.books(), books.len());
        LibraryView {
            query: self.query.clone(),
            books,
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            stats,
        }
    }
}
