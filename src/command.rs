//! Tokenizing and parsing of input lines.
//!
//! A line is split on whitespace with single- and double-quoted
//! substrings kept together, so `add "buy milk"` yields the command and
//! one argument. The first token is matched case-insensitively against
//! the closed command set; everything after it is validated per command
//! before any store operation runs.

use crate::error::{Error, Result};
use crate::task::Status;

const ADD_USAGE: &str = "Usage: add <description>";
const UPDATE_USAGE: &str = "Usage: update <id> <description>";
const DELETE_USAGE: &str = "Usage: delete <id>";
const MARK_TODO_USAGE: &str = "Usage: mark-todo <id>";
const MARK_IN_PROGRESS_USAGE: &str = "Usage: mark-in-progress <id>";
const MARK_DONE_USAGE: &str = "Usage: mark-done <id>";
const LIST_USAGE: &str = "Usage: list [todo|in-progress|done]";

/// A fully validated command, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String },
    Update { id: u32, description: String },
    Delete { id: u32 },
    Mark { id: u32, status: Status },
    List { filter: Option<Status> },
    Exit,
}

/// Split a line into tokens, keeping quoted substrings together.
///
/// Quotes themselves are stripped; an empty quoted pair still produces a
/// token, so `add ""` reaches the blank-description validation rather
/// than looking like a missing argument.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(Error::UnclosedQuote);
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Parse tokens into a [`Command`], validating argument counts and ids.
pub fn parse(tokens: &[String]) -> Result<Command> {
    let Some(command) = tokens.first() else {
        return Err(Error::EmptyInput);
    };
    let rest = &tokens[1..];

    match command.to_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(Error::Usage(ADD_USAGE));
            }
            Ok(Command::Add {
                description: rest.join(" "),
            })
        }
        "update" => {
            if rest.len() < 2 {
                return Err(Error::Usage(UPDATE_USAGE));
            }
            Ok(Command::Update {
                id: parse_id(&rest[0])?,
                description: rest[1..].join(" "),
            })
        }
        "delete" => {
            if rest.is_empty() {
                return Err(Error::Usage(DELETE_USAGE));
            }
            Ok(Command::Delete {
                id: parse_id(&rest[0])?,
            })
        }
        "mark-todo" => parse_mark(rest, Status::Todo, MARK_TODO_USAGE),
        "mark-in-progress" => parse_mark(rest, Status::InProgress, MARK_IN_PROGRESS_USAGE),
        "mark-done" => parse_mark(rest, Status::Done, MARK_DONE_USAGE),
        "list" => match rest {
            [] => Ok(Command::List { filter: None }),
            // Filter values match stored statuses exactly, case-sensitively
            [filter] => Ok(Command::List {
                filter: Some(filter.parse()?),
            }),
            _ => Err(Error::Usage(LIST_USAGE)),
        },
        "exit" => Ok(Command::Exit),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

fn parse_mark(rest: &[String], status: Status, usage: &'static str) -> Result<Command> {
    if rest.is_empty() {
        return Err(Error::Usage(usage));
    }
    Ok(Command::Mark {
        id: parse_id(&rest[0])?,
        status,
    })
}

fn parse_id(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| Error::InvalidId(token.to_string()))
}
