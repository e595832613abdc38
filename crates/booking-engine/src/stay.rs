//! Room stays: night counts, price quotes and date-range conflicts.
//!
//! A stay occupies the half-open range `[check_in, check_out)`, so a guest
//! checking out on the 12th does not collide with another checking in on
//! the 12th.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::reservation::ReservationStatus;
use crate::venue::Room;

/// A stored room booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBooking {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub room_id: String,
    #[serde(default)]
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub nights: u32,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::timestamp::deserialize_created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}

/// Price breakdown for a prospective stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub room_id: String,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub nights: u32,
    pub price_per_night: f64,
    pub total_price: f64,
}

/// Nights between two dates, clamped at zero when check-out is not after check-in.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Quote a stay in `room`.
///
/// # Errors
/// Returns `BookingError::InvalidStay` when check-in is before `today`,
/// check-out is not after check-in, or the party is empty or larger than the
/// room's capacity.
pub fn quote_stay(
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    today: NaiveDate,
) -> Result<StayQuote> {
    if check_in < today {
        return Err(BookingError::InvalidStay(format!(
            "Check-in date {} is in the past",
            check_in
        )));
    }

    let nights = nights_between(check_in, check_out);
    if nights == 0 {
        return Err(BookingError::InvalidStay(
            "Check-out date must be after check-in date".to_string(),
        ));
    }

    if guests == 0 || guests > room.capacity {
        return Err(BookingError::InvalidStay(format!(
            "{} sleeps 1 to {} guests, got {}",
            room.name, room.capacity, guests
        )));
    }

    Ok(StayQuote {
        room_id: room.id.clone(),
        room_name: room.name.clone(),
        check_in,
        check_out,
        guests,
        nights,
        price_per_night: room.price,
        total_price: f64::from(nights) * room.price,
    })
}

impl StayQuote {
    /// Turn an accepted quote into a confirmed booking for `user_id`.
    pub fn into_booking(self, id: impl Into<String>, user_id: impl Into<String>) -> RoomBooking {
        RoomBooking {
            id: id.into(),
            user_id: user_id.into(),
            room_id: self.room_id,
            room_name: self.room_name,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            nights: self.nights,
            price_per_night: self.price_per_night,
            total_price: self.total_price,
            status: ReservationStatus::Confirmed,
            special_requests: None,
            created_at: None,
        }
    }
}

/// Find the first live booking of `room_id` whose dates overlap the requested stay.
///
/// Two stays overlap iff `a.check_in < b.check_out && b.check_in < a.check_out`.
/// Cancelled bookings never conflict.
pub fn find_room_conflict<'a>(
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    bookings: &'a [RoomBooking],
) -> Option<&'a RoomBooking> {
    bookings.iter().find(|b| {
        b.room_id == room_id
            && !b.status.is_cancelled()
            && check_in < b.check_out
            && b.check_in < check_out
    })
}
