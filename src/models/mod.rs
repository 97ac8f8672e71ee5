//! Data models for the address book.
//!
//! This module contains the record type stored per contact.

pub mod record;

pub use record::Record;
