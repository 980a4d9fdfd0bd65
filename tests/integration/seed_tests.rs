//! Seeding from configuration

use std::fs;
use std::path::PathBuf;

use bookshelf::{config::LibraryConfig, services, AppError};

fn temp_seed(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bookshelf-{}-{}.json", name, std::process::id()));
    fs::write(&path, contents).expect("Failed to write seed file");
    path
}

#[test]
fn test_seed_file_overrides_defaults() {
    let path = temp_seed(
        "override",
        r#"[
            {"title": "Dune", "author": "Frank Herbert"},
            {"title": "dune ", "author": "FRANK HERBERT"},
            {"title": "", "author": "Nobody"}
        ]"#,
    );
    let config = LibraryConfig {
        seed_defaults: true,
        seed_file: Some(path.clone()),
    };

    let library = services::bootstrap(&config).expect("Failed to seed library");
    fs::remove_file(&path).ok();

    assert_eq!(library.books().len(), 1);
    assert_eq!(library.books()[0].title, "Dune");
}

#[test]
fn test_no_seed() {
    let config = LibraryConfig {
        seed_defaults: false,
        seed_file: None,
    };
    let library = services::bootstrap(&config).expect("Failed to build library");
    assert!(library.books().is_empty());
    assert_eq!(
        library.view().empty_message(),
        Some("No books in the library yet.")
    );
}

#[test]
fn test_malformed_seed_file() {
    let path = temp_seed("malformed", r#"{"title": "not a list"}"#);
    let config = LibraryConfig {
        seed_defaults: false,
        seed_file: Some(path.clone()),
    };

    let result = services::bootstrap(&config);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(AppError::SeedFormat(_))));
}
