//! Table reservation records as read back from the booking store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::SlotTime;
use crate::duration::DiningDuration;

/// Lifecycle status shared by room bookings and table reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl ReservationStatus {
    /// Every status, in the order the admin status picker lists them.
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
        ReservationStatus::NoShow,
    ];

    pub fn is_cancelled(self) -> bool {
        self == ReservationStatus::Cancelled
    }

    /// Label used on status badges and in the admin picker.
    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::NoShow => "No Show",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// An existing table reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReservation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub table_id: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub duration: DiningDuration,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Creation time in unix seconds, used to sort guest views newest first.
    #[serde(
        default,
        deserialize_with = "crate::timestamp::deserialize_created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}

impl TableReservation {
    /// Start of the reservation in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.time.minutes()
    }

    /// End of the reservation in minutes since midnight. May exceed one day.
    pub fn end_minutes(&self) -> u32 {
        self.time.minutes() + self.duration.minutes()
    }
}

/// The slot a prospective guest wants: a reservation without a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    pub table_id: String,
    pub time: SlotTime,
    pub duration: DiningDuration,
}

impl TableRequest {
    pub fn new(table_id: impl Into<String>, time: SlotTime, duration: DiningDuration) -> Self {
        Self {
            table_id: table_id.into(),
            time,
            duration,
        }
    }

    pub fn start_minutes(&self) -> u32 {
        self.time.minutes()
    }

    pub fn end_minutes(&self) -> u32 {
        self.time.minutes() + self.duration.minutes()
    }

    /// The same slot on another table.
    pub fn on_table(&self, table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            ..self.clone()
        }
    }
}
