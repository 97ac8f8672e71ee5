//! Application service layer.
//!
//! Services contain the logic that sits between the address book and the
//! command handlers: the weekly birthday report and the clock that decides
//! what "today" is.

mod birthday_service;
mod clock;

pub use birthday_service::{birthdays_per_week, next_occurrence, BirthdayReport, WINDOW_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
