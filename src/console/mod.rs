//! Line-oriented terminal front end
//!
//! Reads one command per line, turns it into an [`Intent`] and prints the
//! resulting view. Parsing and rendering live in the submodules; this module
//! only wires them to the state manager.
//!
//! [`Intent`]: crate::services::library::Intent

pub mod command;
pub mod render;

use std::io::{BufRead, Write};

use crate::{error::AppResult, services::library::Library};

use command::{Command, USAGE};

/// Run the command loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(library: &mut Library, mut input: R, mut output: W) -> AppResult<()> {
    writeln!(output, "Library Management System")?;
    writeln!(output, "{}", USAGE)?;
    render::render(&library.view(), &mut output)?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Undecodable lines are reported and skipped; the session goes on
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => strip_line_ending(line),
            Err(e) => {
                tracing::debug!("Ignoring undecodable input line: {}", e);
                writeln!(output, "Invalid input. Type `help` for commands.")?;
                output.flush()?;
                continue;
            }
        };

        match command::parse(line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(output, "{}", USAGE)?,
            Ok(Some(Command::List)) => render::render(&library.view(), &mut output)?,
            Ok(Some(Command::Dispatch(intent))) => {
                let outcome = library.dispatch(intent);
                render::report(&outcome, &mut output)?;
                render::render(&library.view(), &mut output)?;
            }
            Err(e) => writeln!(output, "{}. Type `help` for commands.", e)?,
        }
        output.flush()?;
    }

    tracing::debug!("Console session ended");
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
