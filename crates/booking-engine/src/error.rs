//! Error types for booking-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time label: {0}")]
    InvalidTimeLabel(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid stay: {0}")]
    InvalidStay(String),

    #[error("Invalid menu item: {0}")]
    InvalidMenuItem(String),

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("Unknown booking: {0}")]
    UnknownBooking(String),

    #[error("Cannot cancel booking: {0}")]
    CannotCancel(String),

    #[error("Invalid venue configuration: {0}")]
    Venue(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BookingError>;
