//! Line commands typed at the terminal surface.
//!
//! Every list command becomes an `InputSignal` so the terminal behaves like
//! any other presentation surface: it reports raw input and never touches
//! the collection.

use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::view::input::{DELETE_TAG, LINK_TAG, SUBMIT_KEY, TOGGLE_TAG};
use todolist_core::InputSignal;

pub const HELP: &str = "\
commands:
  add <text>       add an item
  toggle <id>      flip one item
  delete <id>      remove one item
  all on|off       complete or reopen every item
  filter <route>   #/, #/active or #/completed
  show             print the current frame
  help             print this help
  quit             exit";

/// One parsed terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(InputSignal),
    Show,
    Help,
    Quit,
}

/// Parses one terminal line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "add" => Command::Input(InputSignal::NewItemKey {
            key: SUBMIT_KEY.to_string(),
            value: rest.to_string(),
        }),
        "toggle" => Command::Input(InputSignal::ListClicked {
            tag: TOGGLE_TAG.to_string(),
            item_id: required(name, rest)?.to_string(),
        }),
        "delete" | "rm" => Command::Input(InputSignal::ListClicked {
            tag: DELETE_TAG.to_string(),
            item_id: required(name, rest)?.to_string(),
        }),
        "all" => {
            let checked = match required(name, rest)? {
                "on" => true,
                "off" => false,
                other => return Err(CommandError::InvalidArgument(other.to_string())),
            };
            Command::Input(InputSignal::BulkCheckboxClicked { checked })
        }
        "filter" => Command::Input(InputSignal::FooterClicked {
            tag: LINK_TAG.to_string(),
            href: Some(rest.to_string()),
        }),
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn required<'a>(name: &str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(name.to_string()));
    }
    Ok(rest)
}

/// Terminal line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(String),
    InvalidArgument(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(value) => write!(f, "unknown command `{value}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::InvalidArgument(value) => write!(f, "invalid argument `{value}`"),
        }
    }
}

impl Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, CommandError};
    use todolist_core::InputSignal;

    #[test]
    fn add_keeps_text_after_command_name() {
        assert_eq!(
            parse_command("add buy  milk").expect("add parses"),
            Command::Input(InputSignal::NewItemKey {
                key: "enter".to_string(),
                value: "buy  milk".to_string(),
            })
        );
    }

    #[test]
    fn item_commands_become_list_clicks() {
        assert_eq!(
            parse_command("toggle 3").expect("toggle parses"),
            Command::Input(InputSignal::ListClicked {
                tag: "input".to_string(),
                item_id: "3".to_string(),
            })
        );
        assert_eq!(
            parse_command("rm 3").expect("rm parses"),
            Command::Input(InputSignal::ListClicked {
                tag: "button".to_string(),
                item_id: "3".to_string(),
            })
        );
    }

    #[test]
    fn filter_becomes_link_click() {
        assert_eq!(
            parse_command("filter #/active").expect("filter parses"),
            Command::Input(InputSignal::FooterClicked {
                tag: "a".to_string(),
                href: Some("#/active".to_string()),
            })
        );
    }

    #[test]
    fn bulk_command_requires_on_or_off() {
        assert_eq!(
            parse_command("all on").expect("all on parses"),
            Command::Input(InputSignal::BulkCheckboxClicked { checked: true })
        );
        assert_eq!(
            parse_command("all maybe").expect_err("invalid flag"),
            CommandError::InvalidArgument("maybe".to_string())
        );
    }

    #[test]
    fn reports_missing_and_unknown_commands() {
        assert_eq!(
            parse_command("toggle").expect_err("missing id"),
            CommandError::MissingArgument("toggle".to_string())
        );
        assert_eq!(
            parse_command("undo").expect_err("unknown command"),
            CommandError::UnknownCommand("undo".to_string())
        );
    }

    #[test]
    fn control_commands_parse() {
        assert_eq!(parse_command("").expect("blank"), Command::Show);
        assert_eq!(parse_command("help").expect("help"), Command::Help);
        assert_eq!(parse_command(" quit ").expect("quit"), Command::Quit);
    }
}
