//! Guest and admin views over stored bookings.

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::reservation::{ReservationStatus, TableReservation};
use crate::stay::RoomBooking;

/// One guest's bookings, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestBookings {
    pub room_bookings: Vec<RoomBooking>,
    pub table_reservations: Vec<TableReservation>,
}

/// Collect the bookings that belong to `user_id`, newest first.
///
/// Records without a creation time sort as the oldest.
pub fn my_bookings(
    user_id: &str,
    rooms: &[RoomBooking],
    tables: &[TableReservation],
) -> GuestBookings {
    let mut room_bookings: Vec<RoomBooking> = rooms
        .iter()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect();
    room_bookings.sort_by_key(|b| std::cmp::Reverse(b.created_at.unwrap_or(0)));

    let mut table_reservations: Vec<TableReservation> = tables
        .iter()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect();
    table_reservations.sort_by_key(|r| std::cmp::Reverse(r.created_at.unwrap_or(0)));

    GuestBookings {
        room_bookings,
        table_reservations,
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_room_bookings: usize,
    /// Room bookings still confirmed.
    pub active_room_bookings: usize,
    /// Sum of `total_price` over room bookings that were not cancelled.
    pub total_revenue: f64,
    /// Guests across confirmed room bookings.
    pub total_guests: u32,
    pub total_table_reservations: usize,
    pub confirmed_table_reservations: usize,
}

impl DashboardStats {
    pub fn compute(rooms: &[RoomBooking], tables: &[TableReservation]) -> Self {
        let confirmed_rooms = || {
            rooms
                .iter()
                .filter(|b| b.status == ReservationStatus::Confirmed)
        };

        Self {
            total_room_bookings: rooms.len(),
            active_room_bookings: confirmed_rooms().count(),
            total_revenue: rooms
                .iter()
                .filter(|b| !b.status.is_cancelled())
                .map(|b| b.total_price)
                .sum(),
            total_guests: confirmed_rooms().map(|b| b.guests).sum(),
            total_table_reservations: tables.len(),
            confirmed_table_reservations: tables
                .iter()
                .filter(|r| r.status == ReservationStatus::Confirmed)
                .count(),
        }
    }
}

/// Set the status of the room booking with `id`. Returns whether it was found.
pub fn set_room_status(rooms: &mut [RoomBooking], id: &str, status: ReservationStatus) -> bool {
    match rooms.iter_mut().find(|b| b.id == id) {
        Some(booking) => {
            booking.status = status;
            true
        }
        None => false,
    }
}

/// Set the status of the table reservation with `id`. Returns whether it was found.
pub fn set_table_status(
    tables: &mut [TableReservation],
    id: &str,
    status: ReservationStatus,
) -> bool {
    match tables.iter_mut().find(|r| r.id == id) {
        Some(reservation) => {
            reservation.status = status;
            true
        }
        None => false,
    }
}

/// Fields shared by room bookings and table reservations.
trait GuestRecord {
    fn id(&self) -> &str;
    fn owner(&self) -> &str;
    fn status(&self) -> ReservationStatus;
}

impl GuestRecord for RoomBooking {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner(&self) -> &str {
        &self.user_id
    }
    fn status(&self) -> ReservationStatus {
        self.status
    }
}

impl GuestRecord for TableReservation {
    fn id(&self) -> &str {
        &self.id
    }
    fn owner(&self) -> &str {
        &self.user_id
    }
    fn status(&self) -> ReservationStatus {
        self.status
    }
}

fn cancel_own<T: GuestRecord>(records: &mut Vec<T>, user_id: &str, id: &str) -> Result<T> {
    let index = records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| BookingError::UnknownBooking(id.to_string()))?;

    let record = &records[index];
    if record.owner() != user_id {
        return Err(BookingError::CannotCancel(format!(
            "{} does not belong to {}",
            id, user_id
        )));
    }
    if record.status() != ReservationStatus::Confirmed {
        return Err(BookingError::CannotCancel(format!(
            "{} is {}, only confirmed bookings can be cancelled",
            id,
            record.status()
        )));
    }

    log::debug!("{} cancelled booking {}", user_id, id);
    Ok(records.remove(index))
}

fn remove_by_id<T: GuestRecord>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let index = records.iter().position(|r| r.id() == id)?;
    Some(records.remove(index))
}

/// Cancel one of the guest's own room bookings, removing it from `rooms`.
///
/// # Errors
/// Returns `BookingError::UnknownBooking` if no booking has this id, and
/// `BookingError::CannotCancel` if it belongs to someone else or is no
/// longer confirmed.
pub fn cancel_room_booking(
    rooms: &mut Vec<RoomBooking>,
    user_id: &str,
    id: &str,
) -> Result<RoomBooking> {
    cancel_own(rooms, user_id, id)
}

/// Cancel one of the guest's own table reservations, removing it from `tables`.
///
/// # Errors
/// Same rules as [`cancel_room_booking`].
pub fn cancel_table_reservation(
    tables: &mut Vec<TableReservation>,
    user_id: &str,
    id: &str,
) -> Result<TableReservation> {
    cancel_own(tables, user_id, id)
}

/// Admin delete of a room booking, whatever its owner or status.
pub fn remove_room_booking(rooms: &mut Vec<RoomBooking>, id: &str) -> Option<RoomBooking> {
    remove_by_id(rooms, id)
}

/// Admin delete of a table reservation, whatever its owner or status.
pub fn remove_table_reservation(
    tables: &mut Vec<TableReservation>,
    id: &str,
) -> Option<TableReservation> {
    remove_by_id(tables, id)
}
