//! Data models for Bookshelf

pub mod book;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookId, Field, NewBook};
pub use validation::{FieldErrors, DUPLICATE_MESSAGE};
pub use view::{LibraryStats, LibraryView};
