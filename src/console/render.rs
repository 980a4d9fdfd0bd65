//! Plain-text rendering of a [`LibraryView`]

use std::io::{self, Write};

use crate::{
    models::{Field, LibraryView},
    services::library::Outcome,
};

pub fn render<W: Write>(view: &LibraryView, out: &mut W) -> io::Result<()> {
    if let Some(summary) = view.search_summary() {
        writeln!(out, "{}", summary)?;
    }

    writeln!(out, "{}", view.heading())?;
    match view.empty_message() {
        Some(message) => writeln!(out, "  {}", message)?,
        None => {
            for book in &view.books {
                writeln!(out, "  [{}] {} by {}", book.id, book.title, book.author)?;
            }
        }
    }

    render_draft(view, out)?;

    writeln!(
        out,
        "Total Books: {} | Authors: {} | Showing: {}",
        view.stats.total_books, view.stats.authors, view.stats.showing
    )
}

fn render_draft<W: Write>(view: &LibraryView, out: &mut W) -> io::Result<()> {
    if view.draft.is_empty() && view.errors.is_empty() {
        return Ok(());
    }
    writeln!(out, "New book:")?;
    for field in Field::ALL {
        write!(out, "  {}: \"{}\"", field, view.draft.field(field))?;
        match view.errors.get(field) {
            Some(message) => writeln!(out, "  <- {}", message)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

/// One-line note about what an intent changed
pub fn report<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::Added(book) => writeln!(out, "Added [{}] {} by {}", book.id, book.title, book.author),
        Outcome::Removed(book) => writeln!(out, "Removed [{}] {}", book.id, book.title),
        Outcome::Rejected => writeln!(out, "Book not added."),
        Outcome::NotFound => writeln!(out, "No book with that id."),
        Outcome::Updated => Ok(()),
    }
}
