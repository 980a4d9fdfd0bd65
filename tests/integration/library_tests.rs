//! State manager tests driven through the public API

use bookshelf::{
    config::LibraryConfig,
    models::{Field, DUPLICATE_MESSAGE},
    services::{self, catalog::filter_books},
    Intent, Library, Outcome,
};

fn seeded() -> Library {
    services::bootstrap(&LibraryConfig::default()).expect("Failed to seed library")
}

fn set_draft(library: &mut Library, title: &str, author: &str) {
    library.dispatch(Intent::FieldChanged(Field::Title, title.to_string()));
    library.dispatch(Intent::FieldChanged(Field::Author, author.to_string()));
}

#[test]
fn test_empty_title_is_rejected() {
    let mut library = seeded();
    let before = library.books().to_vec();

    set_draft(&mut library, "   ", "Ray Bradbury");
    assert_eq!(library.dispatch(Intent::AddRequested), Outcome::Rejected);

    assert_eq!(library.errors().get(Field::Title), Some("Title is required"));
    assert_eq!(library.books(), before.as_slice());
}

#[test]
fn test_duplicate_is_rejected() {
    let mut library = seeded();

    set_draft(&mut library, "1984", "George Orwell");
    assert_eq!(library.dispatch(Intent::AddRequested), Outcome::Rejected);
    assert_eq!(library.errors().get(Field::Title), Some(DUPLICATE_MESSAGE));

    set_draft(&mut library, "  1984  ", "george orwell");
    assert_eq!(library.dispatch(Intent::AddRequested), Outcome::Rejected);
    assert_eq!(library.books().len(), 6);
}

#[test]
fn test_filter_orwell() {
    let library = seeded();
    let found = filter_books(library.books(), "orwell");
    assert_eq!(found.len(), 1);
    assert!(found
        .iter()
        .all(|b| b.author.to_lowercase().contains("orwell")));
}

#[test]
fn test_empty_filter_keeps_order() {
    let library = seeded();
    let all: Vec<_> = filter_books(library.books(), "").into_iter().cloned().collect();
    assert_eq!(all, library.books());
}

#[test]
fn test_remove_book() {
    let mut library = seeded();
    let id = library.books()[3].id;

    library.dispatch(Intent::RemoveRequested(id));
    assert_eq!(library.books().len(), 5);
    assert!(library.books().iter().all(|b| b.id != id));

    assert_eq!(library.dispatch(Intent::RemoveRequested(id)), Outcome::NotFound);
    assert_eq!(library.dispatch(Intent::RemoveRequested(9999)), Outcome::NotFound);
    assert_eq!(library.books().len(), 5);
}

#[test]
fn test_edit_after_failed_submit_clears_only_that_field() {
    let mut library = Library::default();
    library.dispatch(Intent::AddRequested);
    assert_eq!(library.errors().len(), 2);

    library.dispatch(Intent::FieldChanged(Field::Title, "D".to_string()));
    assert_eq!(library.errors().get(Field::Title), None);
    assert_eq!(library.errors().get(Field::Author), Some("Author is required"));
}

#[test]
fn test_ids_stay_unique_across_removals() {
    let mut library = seeded();
    let last_id = library.books().last().map(|b| b.id).unwrap();
    library.dispatch(Intent::RemoveRequested(last_id));

    set_draft(&mut library, "The Catcher in the Rye", "J.D. Salinger");
    let readded = match library.dispatch(Intent::AddRequested) {
        Outcome::Added(book) => book,
        other => panic!("expected Added, got {:?}", other),
    };
    assert_ne!(readded.id, last_id);
}

#[test]
fn test_view_statistics_follow_search() {
    let mut library = seeded();
    set_draft(&mut library, "Animal Farm", "George Orwell");
    library.dispatch(Intent::AddRequested);
    library.dispatch(Intent::SearchChanged("George".to_string()));

    let view = library.view();
    assert_eq!(view.stats.total_books, 7);
    assert_eq!(view.stats.authors, 6);
    assert_eq!(view.stats.showing, 2);
    assert_eq!(
        view.search_summary().as_deref(),
        Some("Found 2 books matching \"George\"")
    );

    library.dispatch(Intent::SearchCleared);
    assert_eq!(library.view().stats.showing, 7);
}
