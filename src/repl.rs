//! The interactive read-parse-dispatch loop.
//!
//! One command per input line. Parse failures and "not found" outcomes
//! are printed and the loop keeps going; the only transition out of
//! `Running` is a confirmed `exit` (or end of input), after which the
//! caller persists the store once.

use std::io::{BufRead, Write};

use crate::command::{self, Command};
use crate::error::{Error, Result};
use crate::output::{format_task, Styles};
use crate::store::{Listing, TodoList};
use crate::task::TaskChange;

/// Printed once before the first prompt.
pub const WELCOME: &str = "Welcome to your to-do list app! Please enter a command (add, update, delete, mark-todo, mark-in-progress, mark-done, list, exit):";

const DELETE_PROMPT: &str = "Are you sure you want to delete? (Y/N)";
const EXIT_PROMPT: &str = "Are you sure you want to exit? (Y/N)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopped,
}

/// Run the command loop over stdin/stdout until a confirmed exit.
pub fn run(list: &mut TodoList, styles: Styles) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(list, styles, &mut stdin.lock(), &mut stdout.lock())
}

/// Same as [`run`], with explicit input/output for tests.
pub fn run_with_io<R: BufRead, W: Write>(
    list: &mut TodoList,
    styles: Styles,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{WELCOME}")?;

    let mut state = LoopState::Running;
    while state == LoopState::Running {
        write!(output, "{}", styles.prompt())?;
        output.flush()?;

        // End of input terminates the loop through the same
        // persist-once path as a confirmed exit.
        let Some(line) = read_line(input)? else {
            break;
        };

        match command::tokenize(&line).and_then(|tokens| command::parse(&tokens)) {
            Ok(cmd) => state = dispatch(list, cmd, &styles, input, output)?,
            Err(err) => report(output, &styles, &err)?,
        }
    }

    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    list: &mut TodoList,
    cmd: Command,
    styles: &Styles,
    input: &mut R,
    output: &mut W,
) -> Result<LoopState> {
    match cmd {
        Command::Add { description } => match list.add_task(&description) {
            Ok(id) => writeln!(output, "You added Task #{id}: \"{description}\"")?,
            Err(err) => report(output, styles, &err)?,
        },
        Command::Update { id, description } => {
            match list.update_task(id, TaskChange::Description(description.clone())) {
                Ok(()) => writeln!(output, "You updated Task #{id} to \"{description}\"")?,
                Err(err) => report(output, styles, &err)?,
            }
        }
        Command::Mark { id, status } => match list.update_task(id, TaskChange::Status(status)) {
            Ok(()) => writeln!(output, "You marked Task #{id} as {status}")?,
            Err(err) => report(output, styles, &err)?,
        },
        Command::Delete { id } => {
            if confirm(input, output, DELETE_PROMPT)? {
                match list.delete_task(id) {
                    Ok(removed) => writeln!(output, "Removed task: {}", removed.description)?,
                    Err(err) => report(output, styles, &err)?,
                }
            } else {
                writeln!(output, "Delete cancelled.")?;
            }
        }
        Command::List { filter } => match list.list_tasks(filter) {
            Listing::Empty => {
                writeln!(output, "Your todo list is empty! Please add a task.")?;
            }
            Listing::NoMatch(status) => {
                writeln!(output, "No tasks with status \"{status}\" found.")?;
            }
            Listing::Tasks(tasks) => {
                for task in &tasks {
                    writeln!(output, "{}", format_task(task))?;
                }
            }
        },
        Command::Exit => {
            if confirm(input, output, EXIT_PROMPT)? {
                writeln!(output, "Goodbye!")?;
                return Ok(LoopState::Stopped);
            }
        }
    }

    Ok(LoopState::Running)
}

/// Print an error outcome without stopping the loop.
///
/// Not-found and empty-input reports are plain text; everything else
/// gets the styled `Error:` prefix.
fn report<W: Write>(output: &mut W, styles: &Styles, err: &Error) -> Result<()> {
    match err {
        Error::NotFound(_) | Error::EmptyInput => writeln!(output, "{err}")?,
        _ => writeln!(output, "{}", styles.error(&err.to_string()))?,
    }
    Ok(())
}

/// Ask a Y/N question, re-asking until the answer is one of y/n.
///
/// End of input counts as a negative answer.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    loop {
        write!(output, "{prompt} ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match line.trim() {
            "y" | "Y" => return Ok(true),
            "n" | "N" => return Ok(false),
            _ => writeln!(output, "Please answer Y or N.")?,
        }
    }
}

/// Read one line, without its trailing newline. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
