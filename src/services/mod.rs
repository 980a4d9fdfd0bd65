//! Business logic services

pub mod catalog;
pub mod library;
pub mod seed;
pub mod stats;

use crate::{config::LibraryConfig, error::AppResult, repository::Repository};

/// Build a state manager with its collection seeded per configuration
pub fn bootstrap(config: &LibraryConfig) -> AppResult<library::Library> {
    let mut catalog = catalog::CatalogService::new(Repository::new());
    let drafts = seed::seed_drafts(config)?;
    let requested = drafts.len();
    let added = catalog.seed(drafts);
    tracing::info!("Seeded {} of {} books", added, requested);
    Ok(library::Library::new(catalog))
}
