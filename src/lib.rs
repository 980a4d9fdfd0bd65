//! Bookshelf Library Manager
//!
//! An in-memory book collection with search, validated add and delete. The
//! state manager in [`services::library`] backs any presentation layer; the
//! [`console`] module is the line-oriented one shipped with the binary.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::library::{Intent, Library, Outcome};
