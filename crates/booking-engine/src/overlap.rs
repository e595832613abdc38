//! Detect whether a requested table slot collides with existing reservations.
//!
//! Intervals are half-open in minutes since midnight. A reservation that ends
//! exactly when the request starts (or starts exactly when it ends) is a legal
//! back-to-back booking, NOT a conflict. Cancelled reservations and
//! reservations on other tables never conflict.
//!
//! All records passed in must already belong to the same calendar date; the
//! checker only reasons about time of day. Use [`reservations_on`] to narrow a
//! wider fetch down to one date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::format_minutes;
use crate::reservation::{TableRequest, TableReservation};

/// Result of checking one table slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub booked: bool,
    /// End time of the blocking reservation, e.g. `"8:00 PM"`.
    pub booked_until: Option<String>,
}

impl Occupancy {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn blocked_until(label: String) -> Self {
        Self {
            booked: true,
            booked_until: Some(label),
        }
    }
}

/// A reservation that blocks the requested slot.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConflict<'a> {
    pub reservation: &'a TableReservation,
    /// Formatted end time of the blocking reservation.
    pub ends_at: String,
    pub overlap_minutes: u32,
}

/// Whether `reservation` can collide with `request` at all.
fn competes(request: &TableRequest, reservation: &TableReservation) -> bool {
    reservation.table_id == request.table_id && !reservation.status.is_cancelled()
}

/// Two intervals overlap iff `a.start < b.end && a.end > b.start`.
fn overlaps(request: &TableRequest, reservation: &TableReservation) -> bool {
    request.start_minutes() < reservation.end_minutes()
        && request.end_minutes() > reservation.start_minutes()
}

/// Check whether the requested table is free for the requested slot.
///
/// Reservations are scanned in the given order and the first conflict wins:
/// `booked_until` is the end time of that reservation, which is not
/// necessarily the latest end among all conflicts. Use
/// [`latest_blocking_end`] when the true end of unavailability matters.
pub fn check_table_availability(
    request: &TableRequest,
    reservations: &[TableReservation],
) -> Occupancy {
    for reservation in reservations {
        if !competes(request, reservation) {
            continue;
        }
        if overlaps(request, reservation) {
            let until = format_minutes(reservation.end_minutes());
            log::debug!(
                "table {} at {} blocked by reservation {:?} until {}",
                request.table_id,
                request.time,
                reservation.id,
                until
            );
            return Occupancy::blocked_until(until);
        }
    }

    Occupancy::free()
}

/// Find every reservation that blocks the requested slot, in scan order.
///
/// The overlap duration is `min(end) - max(start)`.
pub fn find_table_conflicts<'a>(
    request: &TableRequest,
    reservations: &'a [TableReservation],
) -> Vec<TableConflict<'a>> {
    reservations
        .iter()
        .filter(|r| competes(request, r) && overlaps(request, r))
        .map(|reservation| {
            let overlap_start = request.start_minutes().max(reservation.start_minutes());
            let overlap_end = request.end_minutes().min(reservation.end_minutes());
            TableConflict {
                reservation,
                ends_at: format_minutes(reservation.end_minutes()),
                overlap_minutes: overlap_end - overlap_start,
            }
        })
        .collect()
}

/// The latest end time among all reservations blocking the requested slot.
pub fn latest_blocking_end(
    request: &TableRequest,
    reservations: &[TableReservation],
) -> Option<String> {
    find_table_conflicts(request, reservations)
        .iter()
        .map(|c| c.reservation.end_minutes())
        .max()
        .map(format_minutes)
}

/// Keep only the reservations on `date`.
pub fn reservations_on(date: NaiveDate, reservations: &[TableReservation]) -> Vec<TableReservation> {
    reservations
        .iter()
        .filter(|r| r.date == date)
        .cloned()
        .collect()
}
