//! ICS file generation.
//!
//! Writes a practical subset of RFC 5545: one `VCALENDAR` holding any number
//! of `VEVENT`s, with TEXT escaping and 75-octet line folding.

mod calendar;
mod generate;

pub use calendar::{Calendar, CalendarMeta};
