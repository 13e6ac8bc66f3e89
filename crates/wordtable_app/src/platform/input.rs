//! Terminal command line parsing.
//!
//! Commands are checked against what the table currently offers: sizes
//! against the configured options and page numbers against the paginator on
//! screen.

use std::num::NonZeroUsize;

use thiserror::Error;
use wordtable_core::{Column, Msg, PageControl, TableViewModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    PageSize(usize),
    Sort(Column),
    Page(usize),
    Next,
    Previous,
    Quit,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("page size {0} is not offered")]
    PageSizeNotOffered(usize),
    #[error("page {0} is not available")]
    PageNotAvailable(usize),
    #[error("there is only one page")]
    SinglePage,
}

/// What the main loop does with one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Msg),
    Quit,
    Help,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" | "help" | "?" => Ok(Command::Help),
        "search" => Ok(Command::Search(rest.to_string())),
        "size" => parse_number(rest, "size").map(Command::PageSize),
        "page" => parse_number(rest, "page").map(Command::Page),
        "sort" => parse_column(rest).map(Command::Sort),
        "next" => Ok(Command::Next),
        "prev" | "previous" => Ok(Command::Previous),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(InputError::Unknown(word.to_string())),
    }
}

fn parse_number(text: &str, command: &'static str) -> Result<usize, InputError> {
    if text.is_empty() {
        return Err(InputError::MissingArgument(command));
    }
    text.parse().map_err(|_| InputError::NotANumber(text.to_string()))
}

fn parse_column(text: &str) -> Result<Column, InputError> {
    let column = match text.to_lowercase().as_str() {
        "" => return Err(InputError::MissingArgument("sort")),
        "word" => Column::Word,
        "count" | "requests" | "request_count" => Column::RequestCount,
        "status" | "status_label" => Column::Status,
        "first" | "first_seen" => Column::FirstSeen,
        "updated" | "last_updated" => Column::LastUpdated,
        _ => return Err(InputError::UnknownColumn(text.to_string())),
    };
    Ok(column)
}

/// Turns `command` into an action against the table currently shown.
pub fn resolve(
    command: Command,
    view: &TableViewModel,
    page_sizes: &[NonZeroUsize],
) -> Result<Action, InputError> {
    let msg = match command {
        Command::Quit => return Ok(Action::Quit),
        Command::Help => return Ok(Action::Help),
        Command::Search(text) => Msg::SearchChanged(text),
        Command::PageSize(size) => {
            let offered = page_sizes
                .iter()
                .copied()
                .find(|offered| offered.get() == size)
                .ok_or(InputError::PageSizeNotOffered(size))?;
            Msg::PageSizeChanged(offered)
        }
        Command::Sort(column) => Msg::HeaderActivated(column.sort_key().to_string()),
        Command::Page(number) => {
            let control = view
                .paginator
                .iter()
                .copied()
                .find(|control| {
                    matches!(control, PageControl::Page { number: n, .. } if *n == number)
                })
                .ok_or(InputError::PageNotAvailable(number))?;
            Msg::PageSelected(control)
        }
        Command::Next => Msg::PageSelected(
            view.paginator
                .iter()
                .copied()
                .find(|control| matches!(control, PageControl::Next { .. }))
                .ok_or(InputError::SinglePage)?,
        ),
        Command::Previous => Msg::PageSelected(
            view.paginator
                .iter()
                .copied()
                .find(|control| matches!(control, PageControl::Previous { .. }))
                .ok_or(InputError::SinglePage)?,
        ),
    };
    Ok(Action::Dispatch(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordtable_core::{update, AppState, Record};

    fn sizes() -> Vec<NonZeroUsize> {
        [10, 25].into_iter().filter_map(NonZeroUsize::new).collect()
    }

    fn records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record {
                word: format!("w{i}"),
                request_count: i as u64,
                status: "pending".to_string(),
                status_label: "pending".to_string(),
                first_seen: "2024-01-01T00:00:00".to_string(),
                last_updated: "2024-01-01T00:00:00".to_string(),
            })
            .collect()
    }

    fn table_of(count: usize) -> TableViewModel {
        let (state, _) = update(AppState::new(), Msg::WordsLoaded(records(count)));
        state.view().table
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(
            parse_command("  search  کتێب  "),
            Ok(Command::Search("کتێب".to_string()))
        );
        assert_eq!(parse_command("search"), Ok(Command::Search(String::new())));
        assert_eq!(parse_command("size 25"), Ok(Command::PageSize(25)));
        assert_eq!(parse_command("sort first"), Ok(Command::Sort(Column::FirstSeen)));
        assert_eq!(parse_command("PREV"), Ok(Command::Previous));
        assert_eq!(parse_command(""), Ok(Command::Help));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            parse_command("jump 3"),
            Err(InputError::Unknown("jump".to_string()))
        );
        assert_eq!(parse_command("page"), Err(InputError::MissingArgument("page")));
        assert_eq!(
            parse_command("size ten"),
            Err(InputError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            parse_command("sort colour"),
            Err(InputError::UnknownColumn("colour".to_string()))
        );
    }

    #[test]
    fn page_size_must_be_offered() {
        let view = table_of(3);
        assert_eq!(
            resolve(Command::PageSize(25), &view, &sizes()),
            Ok(Action::Dispatch(Msg::PageSizeChanged(
                NonZeroUsize::new(25).unwrap()
            )))
        );
        assert_eq!(
            resolve(Command::PageSize(30), &view, &sizes()),
            Err(InputError::PageSizeNotOffered(30))
        );
    }

    #[test]
    fn pages_must_be_listed_in_the_paginator() {
        let view = table_of(25);
        assert_eq!(
            resolve(Command::Page(3), &view, &sizes()),
            Ok(Action::Dispatch(Msg::PageSelected(PageControl::Page {
                number: 3,
                active: false
            })))
        );
        assert_eq!(
            resolve(Command::Page(4), &view, &sizes()),
            Err(InputError::PageNotAvailable(4))
        );
    }

    #[test]
    fn stepping_needs_a_paginator() {
        let single = table_of(3);
        assert_eq!(
            resolve(Command::Next, &single, &sizes()),
            Err(InputError::SinglePage)
        );

        let paged = table_of(25);
        assert_eq!(
            resolve(Command::Next, &paged, &sizes()),
            Ok(Action::Dispatch(Msg::PageSelected(PageControl::Next {
                target: 2,
                enabled: true
            })))
        );
    }

    #[test]
    fn sort_uses_the_column_key() {
        let view = table_of(1);
        assert_eq!(
            resolve(Command::Sort(Column::Status), &view, &sizes()),
            Ok(Action::Dispatch(Msg::HeaderActivated("status_label".to_string())))
        );
        assert_eq!(resolve(Command::Quit, &view, &sizes()), Ok(Action::Quit));
    }
}
