//! Starter books loaded into a fresh collection

use std::fs;
use std::path::Path;

use crate::{config::LibraryConfig, error::AppResult, models::BookDraft};

const DEFAULT_BOOKS: [(&str, &str); 6] = [
    ("To Kill a Mockingbird", "Harper Lee"),
    ("1984", "George Orwell"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
    ("The Catcher in the Rye", "J.D. Salinger"),
];

/// Built-in starter books
pub fn default_books() -> Vec<BookDraft> {
    DEFAULT_BOOKS
        .iter()
        .map(|(title, author)| BookDraft::new(*title, *author))
        .collect()
}

/// Read a JSON array of `{ "title": .., "author": .. }` entries
pub fn load_seed_file(path: &Path) -> AppResult<Vec<BookDraft>> {
    let raw = fs::read_to_string(path)?;
    parse_seed(&raw)
}

pub fn parse_seed(raw: &str) -> AppResult<Vec<BookDraft>> {
    Ok(serde_json::from_str(raw)?)
}

/// Pick the seed for a new collection: the configured file if any, the
/// built-in books if enabled, otherwise nothing.
pub fn seed_drafts(config: &LibraryConfig) -> AppResult<Vec<BookDraft>> {
    if let Some(ref path) = config.seed_file {
        tracing::info!("Loading seed books from {}", path.display());
        return load_seed_file(path);
    }
    if config.seed_defaults {
        return Ok(default_books());
    }
    Ok(Vec::new())
}
