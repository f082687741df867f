//! Line commands for the interactive demo.

use crate::ui::render::render_state;
use crate::ui::users::{DispatchError, StoreHandle, UserIntent};

/// Action to take after reading an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing to do (blank line).
    None,
    /// Forward an intent to the store.
    Dispatch(UserIntent),
    /// Delete the user at this 1-based position of the displayed list.
    DeleteAt(usize),
    /// Print the current state.
    Show,
    Help,
    Quit,
    /// The line could not be understood.
    Invalid(String),
}

pub const HELP: &str = "\
Commands:
  load                  reload all users
  add <name> <email>    add a user (name may contain spaces)
  delete <n>            delete the n-th displayed user
  undo                  restore the last deleted user
  clear                 remove every user
  search [query]        filter users; no query shows everyone
  name <text>           set the name input
  email <text>          set the email input
  submit                add a user from the name/email inputs
  show                  print the list
  help                  print this help
  quit                  exit";

/// Parse one line of user input.
///
/// `name` and `email` are the current input field values, used by `submit`.
pub fn parse_line(line: &str, name: &str, email: &str) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        return InputAction::None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "load" => InputAction::Dispatch(UserIntent::LoadUsers),
        "add" => parse_add(rest),
        "delete" | "rm" => match rest.parse::<usize>() {
            Ok(index) if index > 0 => InputAction::DeleteAt(index),
            _ => InputAction::Invalid(format!("expected a list position, got '{}'", rest)),
        },
        "undo" => InputAction::Dispatch(UserIntent::UndoDelete),
        "clear" => InputAction::Dispatch(UserIntent::ClearUsers),
        "search" => InputAction::Dispatch(UserIntent::search(rest)),
        "name" => InputAction::Dispatch(UserIntent::UpdateName {
            name: rest.to_string(),
        }),
        "email" => InputAction::Dispatch(UserIntent::UpdateEmail {
            email: rest.to_string(),
        }),
        "submit" => InputAction::Dispatch(UserIntent::add(name, email)),
        "show" | "ls" => InputAction::Show,
        "help" | "?" => InputAction::Help,
        "quit" | "exit" | "q" => InputAction::Quit,
        other => InputAction::Invalid(format!("unknown command '{}'", other)),
    }
}

/// What the caller should do once a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    /// Print this text, then keep reading.
    Print(String),
    Quit,
}

/// Handle one input line against a running intent loop.
///
/// Waits for every queued intent first, so `submit` reads the inputs and
/// `delete <n>` the list the user has already asked for.
pub async fn handle_line(handle: &StoreHandle, line: &str) -> Result<LineOutcome, DispatchError> {
    handle.settle().await?;
    let state = handle.state();

    let outcome = match parse_line(line, &state.name, &state.email) {
        InputAction::None => LineOutcome::Continue,
        InputAction::Dispatch(intent) => {
            handle.dispatch(intent)?;
            LineOutcome::Continue
        }
        InputAction::DeleteAt(position) => match state.users.get(position - 1) {
            Some(user) => {
                handle.dispatch(UserIntent::DeleteUser { user: user.clone() })?;
                LineOutcome::Continue
            }
            None => LineOutcome::Print(format!("No user at position {}", position)),
        },
        InputAction::Show => LineOutcome::Print(render_state(&state)),
        InputAction::Help => LineOutcome::Print(HELP.to_string()),
        InputAction::Quit => LineOutcome::Quit,
        InputAction::Invalid(reason) => LineOutcome::Print(format!("{} (type 'help')", reason)),
    };
    Ok(outcome)
}

// The email is the last word; everything before it is the name. Invalid
// input still goes through so the store can flag it.
fn parse_add(rest: &str) -> InputAction {
    match rest.rsplit_once(char::is_whitespace) {
        Some((name, email)) => InputAction::Dispatch(UserIntent::add(name.trim(), email)),
        None => InputAction::Dispatch(UserIntent::add("", rest)),
    }
}
