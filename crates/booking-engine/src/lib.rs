//! # booking-engine
//!
//! Booking decisions for a hotel with a restaurant: can this table be reserved
//! at this time, which slots are still open tonight, what does a stay cost, and
//! what is on the menu.
//!
//! Everything here is a pure function over records the caller has already
//! fetched from its store. Nothing is persisted and nothing is cached between
//! calls, so a booking form can re-run any check whenever an input changes.
//!
//! ## Modules
//!
//! - [`clock`] — "7:00 PM" labels ↔ minutes since midnight
//! - [`duration`] — "1.5 hours" labels → minute counts
//! - [`reservation`] — Table reservation records and statuses
//! - [`overlap`] — Detect whether a requested table slot collides with existing reservations
//! - [`availability`] — Per-slot availability, table suggestion, free windows
//! - [`stay`] — Room stay quotes and date-range conflicts
//! - [`menu`] — Restaurant menu catalog, filtering and admin edits
//! - [`dashboard`] — Guest "my bookings" view, cancellation and admin totals
//! - [`venue`] — Tables, rooms and time slots offered by the house
//! - [`error`] — Error types

pub mod availability;
pub mod clock;
pub mod dashboard;
pub mod duration;
pub mod error;
pub mod menu;
pub mod overlap;
pub mod reservation;
pub mod stay;
mod timestamp;
pub mod venue;

pub use availability::{
    eligible_tables, free_windows, slot_availability, suggest_table, FreeWindow, SlotStatus,
};
pub use clock::{format_minutes, parse_time_label, SlotTime};
pub use dashboard::{
    cancel_room_booking, cancel_table_reservation, my_bookings, remove_room_booking,
    remove_table_reservation, set_room_status, set_table_status, DashboardStats, GuestBookings,
};
pub use duration::{duration_minutes, DiningDuration};
pub use error::{BookingError, Result};
pub use menu::{
    default_menu, filter_menu, group_by_category, MenuBook, MenuDraft, MenuItem, MenuSection,
};
pub use overlap::{
    check_table_availability, find_table_conflicts, latest_blocking_end, reservations_on,
    Occupancy, TableConflict,
};
pub use reservation::{ReservationStatus, TableRequest, TableReservation};
pub use stay::{find_room_conflict, nights_between, quote_stay, RoomBooking, StayQuote};
pub use venue::{DiningTable, Room, Venue};
