//! Interactive dashboard shell.
//!
//! Reads one command per line and drives a [`DashboardPage`]: search and city
//! filter update the visible table, `delete` goes through the API, and
//! `add`/`edit` print where the admin UI handles those flows. Delete outcomes
//! are printed as `! ...` alert lines.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::{self, BufRead, Write};

use crate::net::ProfileStore;
use crate::pages::dashboard::DashboardPage;
use crate::render::{render_cities, render_summary, render_table};
use crate::routes::Navigator;

pub const PROMPT: &str = "> ";

pub const NOT_LOADED: &str = "profiles could not be loaded; `reload` to try again";

pub const HELP: &str = "\
commands:
  list             show the filtered table
  search [text]    filter by name (case-insensitive); no text clears
  city [name]      filter by exact city; no name clears
  cities           show city options
  delete <id>      delete a profile
  edit <id>        show where to edit a profile
  add              show where to add a profile
  reload           fetch the list again
  help             this text
  quit             leave";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    City(String),
    Cities,
    Delete(String),
    Edit(String),
    Add,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    MissingArgument(&'static str),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`ParseError`] for unknown commands or a missing required argument.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(w, r)| (w, r.trim()));

    let required = |usage: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument(usage))
        } else {
            Ok(rest.to_owned())
        }
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "search" => ShellCommand::Search(rest.to_owned()),
        "city" => ShellCommand::City(rest.to_owned()),
        "cities" => ShellCommand::Cities,
        "delete" | "rm" => ShellCommand::Delete(required("delete <id>")?),
        "edit" => ShellCommand::Edit(required("edit <id>")?),
        "add" => ShellCommand::Add,
        "reload" => ShellCommand::Reload,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(ParseError::Unknown(word.to_owned())),
    };
    Ok(Some(command))
}

/// Mount the page, print the table, then serve commands until `quit` or end
/// of input.
pub async fn run<S, R, W>(
    page: &mut DashboardPage<S>,
    nav: &Navigator,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    S: ProfileStore,
    R: BufRead,
    W: Write,
{
    page.mount().await;
    write_view(page, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(page, nav, command, out).await?,
            Err(e) => writeln!(out, "{e}")?,
        }
        prompt(out)?;
    }
    Ok(())
}

async fn execute<S, W>(
    page: &mut DashboardPage<S>,
    nav: &Navigator,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<()>
where
    S: ProfileStore,
    W: Write,
{
    match command {
        ShellCommand::List => write_view(page, out),
        ShellCommand::Search(text) => {
            page.state_mut().set_search(text);
            write_view(page, out)
        }
        ShellCommand::City(city) => {
            if !city.is_empty() && !page.state().cities().contains(&city.as_str()) {
                return writeln!(out, "unknown city `{city}`; type `cities` for the options");
            }
            page.state_mut().set_city_filter(city);
            write_view(page, out)
        }
        ShellCommand::Cities => {
            let state = page.state();
            write!(out, "{}", render_cities(&state.cities(), &state.city_filter))
        }
        ShellCommand::Delete(id) => {
            let notice = page.delete(&id).await;
            writeln!(out, "! {notice}")?;
            if notice.is_success() {
                write_view(page, out)?;
            }
            Ok(())
        }
        ShellCommand::Edit(id) => {
            if page.state().get(&id).is_none() {
                return writeln!(out, "no profile with id `{id}`");
            }
            writeln!(out, "edit: {}", nav.resolve(&page.edit_route(&id)))
        }
        ShellCommand::Add => writeln!(out, "add: {}", nav.resolve(&page.add_route())),
        ShellCommand::Reload => {
            page.reload().await;
            write_view(page, out)
        }
        ShellCommand::Help => writeln!(out, "{HELP}"),
        // Handled by the read loop.
        ShellCommand::Quit => Ok(()),
    }
}

fn write_view<S: ProfileStore, W: Write>(page: &DashboardPage<S>, out: &mut W) -> io::Result<()> {
    let state = page.state();
    if !state.loaded {
        writeln!(out, "{NOT_LOADED}")?;
    }
    let rows = state.filtered();
    writeln!(
        out,
        "{}",
        render_summary(rows.len(), state.profiles.len(), &state.search, &state.city_filter)
    )?;
    write!(out, "{}", render_table(&rows))
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}
