//! Command line parsing for the terminal front end

use thiserror::Error;

use crate::{models::Field, services::library::Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Intent),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing book id")]
    MissingId,

    #[error("Invalid book id: {0}")]
    InvalidId(String),
}

pub const USAGE: &str = "\
Commands:
  search <text>   filter by title or author
  clear           clear the search
  title <text>    set the draft title
  author <text>   set the draft author
  add             add the draft to the library
  remove <id>     remove a book
  list            show the library
  help            show this help
  quit            exit";

/// Parse one input line. Blank lines yield `None`.
///
/// Text arguments are kept as typed after the first space; trimming is left
/// to the add rules.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    if let Ok(field) = word.parse::<Field>() {
        return Ok(Some(Command::Dispatch(Intent::FieldChanged(field, rest.to_string()))));
    }

    let command = match word {
        "search" => Command::Dispatch(Intent::SearchChanged(rest.to_string())),
        "clear" => Command::Dispatch(Intent::SearchCleared),
        "add" => Command::Dispatch(Intent::AddRequested),
        "remove" | "rm" => {
            let raw = rest.trim();
            if raw.is_empty() {
                return Err(CommandError::MissingId);
            }
            let id = raw
                .parse()
                .map_err(|_| CommandError::InvalidId(raw.to_string()))?;
            Command::Dispatch(Intent::RemoveRequested(id))
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}
