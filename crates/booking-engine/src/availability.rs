//! Table availability for the reservation form.
//!
//! Builds on [`crate::overlap`] to answer the questions the form asks while a
//! guest is still choosing: which tables fit the party, which one should be
//! offered, which start times are still open on a table, and where the gaps
//! are in a table's evening.

use serde::{Deserialize, Serialize};

use crate::clock::{format_minutes, SlotTime};
use crate::duration::DiningDuration;
use crate::overlap::check_table_availability;
use crate::reservation::{TableRequest, TableReservation};
use crate::venue::DiningTable;

/// Availability of one offered start time on one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub time: SlotTime,
    pub booked: bool,
    pub booked_until: Option<String>,
}

/// A gap between reservations on one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWindow {
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
}

/// Tables that seat the party, optionally restricted to one location.
///
/// Order follows the venue's table list.
pub fn eligible_tables<'a>(
    tables: &'a [DiningTable],
    guests: u32,
    location: Option<&str>,
) -> Vec<&'a DiningTable> {
    tables
        .iter()
        .filter(|t| location.is_none_or(|loc| t.location == loc))
        .filter(|t| t.seats >= guests)
        .collect()
}

/// The first eligible table that is free for the requested time and duration.
///
/// `reservations` must all be on the requested date.
pub fn suggest_table<'a>(
    tables: &'a [DiningTable],
    time: SlotTime,
    duration: DiningDuration,
    guests: u32,
    location: Option<&str>,
    reservations: &[TableReservation],
) -> Option<&'a DiningTable> {
    eligible_tables(tables, guests, location)
        .into_iter()
        .find(|table| {
            let request = TableRequest::new(table.id.as_str(), time, duration);
            !check_table_availability(&request, reservations).booked
        })
}

/// Evaluate every offered start time on one table.
///
/// Each entry is exactly what [`check_table_availability`] reports for that
/// start time, in the order the slots were given.
pub fn slot_availability(
    table_id: &str,
    duration: DiningDuration,
    slots: &[SlotTime],
    reservations: &[TableReservation],
) -> Vec<SlotStatus> {
    slots
        .iter()
        .map(|&time| {
            let request = TableRequest::new(table_id, time, duration);
            let occupancy = check_table_availability(&request, reservations);
            SlotStatus {
                time,
                booked: occupancy.booked,
                booked_until: occupancy.booked_until,
            }
        })
        .collect()
}

/// Merge the live reservations on one table into busy intervals.
///
/// Returns a sorted, non-overlapping list of `(start, end)` minute pairs
/// clipped to `[open, close)`. Adjacent reservations merge into one interval.
fn merge_busy_periods(
    table_id: &str,
    reservations: &[TableReservation],
    open: u32,
    close: u32,
) -> Vec<(u32, u32)> {
    let mut intervals: Vec<(u32, u32)> = reservations
        .iter()
        .filter(|r| r.table_id == table_id && !r.status.is_cancelled())
        .filter(|r| r.start_minutes() < close && r.end_minutes() > open)
        .map(|r| (r.start_minutes().max(open), r.end_minutes().min(close)))
        .collect();

    intervals.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Free windows on one table between `open` and `close`.
///
/// `close` may run past midnight (e.g. `SlotTime` 11:00 PM plus two hours is
/// expressed as minute 1500); labels wrap accordingly.
pub fn free_windows(
    table_id: &str,
    reservations: &[TableReservation],
    open: SlotTime,
    close: u32,
) -> Vec<FreeWindow> {
    let open = open.minutes();
    if open >= close {
        return Vec::new();
    }

    let window = |start: u32, end: u32| FreeWindow {
        start: format_minutes(start),
        end: format_minutes(end),
        duration_minutes: end - start,
    };

    let mut windows = Vec::new();
    let mut cursor = open;
    for (busy_start, busy_end) in merge_busy_periods(table_id, reservations, open, close) {
        if cursor < busy_start {
            windows.push(window(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    if cursor < close {
        windows.push(window(cursor, close));
    }

    windows
}
