//! Weekly birthday report.
//!
//! Buckets contacts by the weekday of their next birthday within the coming
//! week. Weekend birthdays are celebrated on the following Monday, so the
//! report only ever has Monday to Friday lines.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Birthdays strictly fewer than this many days away are reported.
pub const WINDOW_DAYS: i64 = 7;

const WORKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Names grouped by the workday their birthday is celebrated on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayReport {
    buckets: [Vec<String>; 5],
}

impl BirthdayReport {
    /// Names celebrated on `day`, in the order they were added.
    ///
    /// Saturday and Sunday are always empty.
    pub fn names_on(&self, day: Weekday) -> &[String] {
        if matches!(day, Weekday::Sat | Weekday::Sun) {
            return &[];
        }
        &self.buckets[day.num_days_from_monday() as usize]
    }

    /// Whether nobody has a birthday in the window.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    fn push(&mut self, day: Weekday, name: &str) {
        let day = match day {
            Weekday::Sat | Weekday::Sun => Weekday::Mon,
            other => other,
        };
        self.buckets[day.num_days_from_monday() as usize].push(name.to_string());
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in WORKDAYS {
            let names = self.names_on(day);
            if names.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", weekday_name(day), names.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Move `date` into `year`. 29 February becomes 28 February in common years.
fn in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| date.with_day(28).and_then(|d| d.with_year(year)))
}

/// The first anniversary of `birthday` on or after `today`.
///
/// Returns `None` only when the anniversary falls outside chrono's date range.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = in_year(birthday, today.year())?;
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Build the weekly report for `today`.
///
/// Entries without a birthday are skipped. Within a day, names keep the
/// order of `entries`.
pub fn birthdays_per_week<'a, I>(today: NaiveDate, entries: I) -> BirthdayReport
where
    I: IntoIterator<Item = (&'a str, Option<NaiveDate>)>,
{
    let mut report = BirthdayReport::default();

    for (name, birthday) in entries {
        let Some(occurrence) = birthday.and_then(|b| next_occurrence(b, today)) else {
            continue;
        };

        let delta_days = (occurrence - today).num_days();
        if delta_days < WINDOW_DAYS {
            report.push(occurrence.weekday(), name);
        }
    }

    report
}
