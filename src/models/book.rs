//! Book model and the in-progress draft used by the add form

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book identifier. Assigned once, never reused.
pub type BookId = u64;

/// Book record held in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub added_at: DateTime<Utc>,
}

impl Book {
    /// True if this book has the same (title, author) pair, ignoring case and
    /// surrounding whitespace.
    pub fn same_entry(&self, title: &str, author: &str) -> bool {
        normalize(&self.title) == normalize(title) && normalize(&self.author) == normalize(author)
    }

    /// True if the title or the author contains `needle`.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Editable field of the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
}

impl Field {
    /// Fields in form order
    pub const ALL: [Field; 2] = [Field::Title, Field::Author];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// In-progress add form state, kept exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Title => self.title = value.into(),
            Field::Author => self.author = value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trimmed copy ready for validation and insertion
    pub fn to_new_book(&self) -> NewBook {
        NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }
}

/// Create book request (trimmed draft)
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}
