//! Command handlers for the assistant bot.
//!
//! Each handler validates its own arguments and returns either a reply or a
//! `CommandError`. The dispatcher turns errors into fixed user messages, so
//! nothing a user types can end the session except `exit` and `close`.

use super::parser::{parse_input, Command};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repositories::ContactRepository;
use crate::services::Clock;
use tracing::{debug, warn};

pub const MSG_GREETING: &str = "How can I help you?";
pub const MSG_FAREWELL: &str = "Good bye!";
pub const MSG_INVALID_COMMAND: &str = "Invalid command.";
pub const MSG_CONTACT_ADDED: &str = "Contact added.";
pub const MSG_CONTACT_UPDATED: &str = "Contact updated.";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found.";
pub const MSG_BIRTHDAY_ADDED: &str = "Birthday added.";
pub const MSG_BIRTHDAY_NOT_FOUND: &str = "Contact and birthday not found.";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command.
    Message(String),
    /// Print the message and stop.
    Exit(String),
}

impl Reply {
    /// The text to print.
    pub fn text(&self) -> &str {
        match self {
            Self::Message(text) | Self::Exit(text) => text,
        }
    }

    /// Whether the session is over.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// The assistant bot: an address book plus the clock used for birthday reports.
pub struct AssistantBot {
    book: Box<dyn ContactRepository>,
    clock: Box<dyn Clock>,
}

impl AssistantBot {
    /// Create a bot over the given repository and clock.
    pub fn new(book: Box<dyn ContactRepository>, clock: Box<dyn Clock>) -> Self {
        Self { book, clock }
    }

    /// Read-only access to the address book.
    pub fn book(&self) -> &dyn ContactRepository {
        self.book.as_ref()
    }

    /// Handle one line of user input.
    pub fn handle(&mut self, line: &str) -> Reply {
        let parsed = parse_input(line);
        debug!(command = ?parsed.command, args = parsed.args.len(), "dispatching");

        let args = parsed.args.as_slice();
        let result = match parsed.command {
            Command::Exit => return Reply::Exit(MSG_FAREWELL.to_string()),
            Command::Hello => Ok(MSG_GREETING.to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Unknown => Ok(MSG_INVALID_COMMAND.to_string()),
        };

        Reply::Message(result.unwrap_or_else(|e| {
            warn!(error = %e, command = ?parsed.command, "command rejected");
            e.user_message().to_string()
        }))
    }

    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = args else {
            return Err(CommandError::InvalidInput(
                "add expects a name and a phone".to_string(),
            ));
        };

        let mut record = Record::new(name.as_str())?;
        record.add_phone(phone.as_str())?;
        self.book.add_record(record);
        Ok(MSG_CONTACT_ADDED.to_string())
    }

    fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = args else {
            return Err(CommandError::InvalidInput(
                "change expects a name and a phone".to_string(),
            ));
        };

        let Some(record) = self.book.find_mut(name) else {
            return Ok(MSG_CONTACT_NOT_FOUND.to_string());
        };

        let old = record
            .primary_phone()
            .map(|p| p.as_str().to_string())
            .ok_or_else(|| CommandError::InvalidInput(format!("{} has no phone", name)))?;
        record.edit_phone(&old, phone.as_str())?;
        Ok(MSG_CONTACT_UPDATED.to_string())
    }

    fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let name = args
            .first()
            .ok_or_else(|| CommandError::InvalidInput("phone expects a name".to_string()))?;

        match self.book.find(name) {
            Some(record) => record
                .primary_phone()
                .map(|p| p.to_string())
                .ok_or_else(|| CommandError::InvalidInput(format!("{} has no phone", name))),
            None => Ok(MSG_CONTACT_NOT_FOUND.to_string()),
        }
    }

    fn show_all(&self) -> String {
        self.book
            .records()
            .iter()
            .map(|r| format!("{}: [{}]", r.name, r.phones_joined(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday] = args else {
            return Err(CommandError::InvalidDate(
                "add-birthday expects a name and a date".to_string(),
            ));
        };

        let Some(record) = self.book.find_mut(name) else {
            return Ok(MSG_CONTACT_NOT_FOUND.to_string());
        };

        record.add_birthday(birthday)?;
        Ok(MSG_BIRTHDAY_ADDED.to_string())
    }

    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or_else(|| {
            CommandError::InvalidInput("show-birthday expects a name".to_string())
        })?;

        Ok(self
            .book
            .find(name)
            .and_then(|r| r.birthday)
            .map(|b| b.to_string())
            .unwrap_or_else(|| MSG_BIRTHDAY_NOT_FOUND.to_string()))
    }

    fn birthdays(&self) -> String {
        self.book.birthdays_per_week(self.clock.today()).to_string()
    }
}
