//! Command line parsing.

use std::str::FromStr;

/// Verbs understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add,
    /// `change <name> <phone>`
    Change,
    /// `phone <name>`
    Phone,
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// `birthdays`
    Birthdays,
    /// `exit` or `close`
    Exit,
    /// Anything else, including blank input
    Unknown,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    /// Lookup is case-sensitive; callers lowercase first.
    fn from_str(verb: &str) -> Result<Self, Self::Err> {
        Ok(match verb {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown,
        })
    }
}

/// A line of user input split into a verb and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace. The first token, lowercased, is the verb.
///
/// Blank input parses as `Command::Unknown`.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(verb) => verb
            .to_lowercase()
            .parse()
            .unwrap_or(Command::Unknown),
        None => Command::Unknown,
    };

    ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_and_args() {
        let parsed = parse_input("add John 1234567890");
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["John", "1234567890"]);
    }

    #[test]
    fn test_verb_is_case_insensitive_args_are_not() {
        let parsed = parse_input("  PHONE   John  ");
        assert_eq!(parsed.command, Command::Phone);
        assert_eq!(parsed.args, vec!["John"]);
    }

    #[test]
    fn test_exit_aliases() {
        assert_eq!(parse_input("exit").command, Command::Exit);
        assert_eq!(parse_input("Close").command, Command::Exit);
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(parse_input("").command, Command::Unknown);
        assert_eq!(parse_input("   \t").command, Command::Unknown);
        assert_eq!(parse_input("delete John").command, Command::Unknown);
    }

    #[test]
    fn test_birthday_verbs() {
        assert_eq!(parse_input("add-birthday a b").command, Command::AddBirthday);
        assert_eq!(parse_input("show-birthday a").command, Command::ShowBirthday);
        assert_eq!(parse_input("birthdays").command, Command::Birthdays);
    }
}
