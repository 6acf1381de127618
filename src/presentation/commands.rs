//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::entities::{Category, DifficultyLevel};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Switch gallery category.
    Category(Category),
    /// Next gallery page.
    NextPage,
    /// Previous gallery page.
    PreviousPage,
    /// Jump to a 1-based page.
    Page(usize),
    /// Select the n-th (1-based) tile of the current page.
    Pick(usize),
    /// Choose difficulty.
    Difficulty(DifficultyLevel),
    /// Choose grid size.
    Grid(u32),
    /// Launch the game.
    Start,
    /// Re-fetch the active category.
    Refresh,
    /// Show usage.
    Help,
    /// Leave without launching.
    Quit,
}

/// Reasons a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{command} needs an argument")]
    MissingArgument { command: &'static str },
    #[error("invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// Help text listing every command.
pub const USAGE: &str = "\
commands:
  category <animals|nature|places|objects|abstract>
  next | prev | page <n>
  pick <n>            select the n-th image on this page
  difficulty <easy|medium|hard>
  grid <n>            choose a grid size allowed by the difficulty
  start | refresh | help | quit";

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        match verb.to_ascii_lowercase().as_str() {
            "category" | "c" => {
                let name = require(arg, "category")?;
                name.parse()
                    .map(Self::Category)
                    .map_err(|e: crate::domain::entities::UnknownCategory| invalid("category", e))
            }
            "next" | "n" => Ok(Self::NextPage),
            "prev" | "p" => Ok(Self::PreviousPage),
            "page" => positive(require(arg, "page")?, "page").map(Self::Page),
            "pick" => positive(require(arg, "pick")?, "pick").map(Self::Pick),
            "difficulty" | "d" => require(arg, "difficulty")?
                .parse()
                .map(Self::Difficulty)
                .map_err(|e: crate::domain::entities::UnknownDifficulty| invalid("difficulty", e)),
            "grid" | "g" => require(arg, "grid")?
                .parse()
                .map(Self::Grid)
                .map_err(|e: std::num::ParseIntError| invalid("grid", e)),
            "start" | "s" => Ok(Self::Start),
            "refresh" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn require<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command })
}

fn invalid(command: &'static str, reason: impl ToString) -> CommandError {
    CommandError::InvalidArgument {
        command,
        reason: reason.to_string(),
    }
}

fn positive(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(0) => Err(invalid(command, "numbering starts at 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(command, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("category nature", ShellCommand::Category(Category::Nature) ; "category")]
    #[test_case("C Abstract", ShellCommand::Category(Category::Abstract) ; "category_alias")]
    #[test_case("next", ShellCommand::NextPage ; "next")]
    #[test_case("p", ShellCommand::PreviousPage ; "prev_alias")]
    #[test_case("page 2", ShellCommand::Page(2) ; "page")]
    #[test_case("pick 6", ShellCommand::Pick(6) ; "pick")]
    #[test_case("difficulty hard", ShellCommand::Difficulty(DifficultyLevel::Hard) ; "difficulty")]
    #[test_case("grid 11", ShellCommand::Grid(11) ; "grid")]
    #[test_case("  start  ", ShellCommand::Start ; "start_with_spaces")]
    #[test_case("refresh", ShellCommand::Refresh ; "refresh")]
    #[test_case("quit", ShellCommand::Quit ; "quit")]
    fn test_parse(line: &str, expected: ShellCommand) {
        assert_eq!(line.parse::<ShellCommand>(), Ok(expected));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!("   ".parse::<ShellCommand>(), Err(CommandError::Empty));
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(
            "shuffle".parse::<ShellCommand>(),
            Err(CommandError::Unknown("shuffle".to_string()))
        );
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            "pick".parse::<ShellCommand>(),
            Err(CommandError::MissingArgument { command: "pick" })
        );
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            "page 0".parse::<ShellCommand>(),
            Err(CommandError::InvalidArgument { command: "page", .. })
        ));
    }

    #[test]
    fn test_unknown_category() {
        let err = "category vehicles".parse::<ShellCommand>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument for category: unknown category: vehicles"
        );
    }
}
