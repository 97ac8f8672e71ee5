//! Assistant Bot - a command-line contact manager.
//!
//! Keeps names, phone numbers and birthdays in memory and answers text
//! commands read from standard input, including a report of whose birthday
//! falls in the coming week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The per-contact record
//! - **repositories**: The address book behind a repository trait
//! - **services**: Weekly birthday report and the clock
//! - **bot**: Command parsing, handlers and the interactive loop
//! - **error**: Custom error types and user-facing messages
//! - **config**: Configuration from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use bot::{run_bot, AssistantBot, Reply};
pub use config::Config;
pub use error::{AddressBookError, CommandError, ConfigError};
pub use models::Record;
pub use repositories::{AddressBook, ContactRepository};
pub use services::{BirthdayReport, Clock, FixedClock, SystemClock};
