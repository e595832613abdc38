//! Time-of-day labels as offered by the booking form.
//!
//! The form only ever offers 12-hour labels of the form `"<H>:<MM> <AM|PM>"`
//! (e.g. `"7:00 PM"`). Internally every comparison is done on minutes since
//! midnight, and the end time of a conflicting reservation is turned back into
//! a label for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A start time on the reservation grid, stored as minutes since midnight (0–1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(u32);

impl SlotTime {
    /// Build a slot time from minutes since midnight. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for SlotTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time_label(s)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        parse_time_label(&value)
    }
}

impl From<SlotTime> for String {
    fn from(value: SlotTime) -> Self {
        format_minutes(value.0)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_minutes(self.0))
    }
}

/// Parse a `"<H>:<MM> <AM|PM>"` label into minutes since midnight.
///
/// `12:xx AM` is the midnight hour (0–59) and `12:xx PM` the noon hour
/// (720–779). The meridiem is matched case-insensitively.
///
/// # Errors
/// Returns `BookingError::InvalidTimeLabel` when the hour is outside 1–12, the
/// minute is not two digits in 00–59, or the meridiem is neither AM nor PM.
pub fn parse_time_label(label: &str) -> Result<SlotTime> {
    let invalid = || BookingError::InvalidTimeLabel(label.to_string());

    let mut parts = label.split_whitespace();
    let (clock, meridiem) = match (parts.next(), parts.next(), parts.next()) {
        (Some(clock), Some(meridiem), None) => (clock, meridiem),
        _ => return Err(invalid()),
    };

    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let hour = if meridiem.eq_ignore_ascii_case("PM") {
        if hour == 12 {
            12
        } else {
            hour + 12
        }
    } else if meridiem.eq_ignore_ascii_case("AM") {
        if hour == 12 {
            0
        } else {
            hour
        }
    } else {
        return Err(invalid());
    };

    Ok(SlotTime(hour * 60 + minute))
}

/// Format minutes since midnight as a 12-hour label, e.g. `1260` → `"9:00 PM"`.
///
/// Values past midnight wrap into the next day, so a reservation ending at
/// minute 1530 displays as `"1:30 AM"`.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;

    let (display_hour, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{}:{:02} {}", display_hour, minute, meridiem)
}

