//! Wall-clock helpers.

use chrono::{DateTime, TimeZone};

/// Hour:minute label shown next to each chat message.
pub fn clock_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}
