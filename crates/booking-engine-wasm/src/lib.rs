//! WASM bindings for booking-engine.
//!
//! Exposes the table availability check, slot labels and stay quotes to the
//! browser booking forms via `wasm-bindgen`. All complex types are passed as
//! JSON strings, in the field names the booking store already uses
//! (`tableId`, `bookedUntil`, ...).
//!
//! The JSON plumbing lives in [`api`] with plain `String` errors so it can be
//! exercised natively; the exports below only convert errors to `JsValue`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

pub mod api;

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Check whether `tableId` is free at `time` for `duration`.
///
/// `reservationsJson` is a JSON array of reservations for the selected date,
/// each with at least `tableId`, `time` and `duration` (and optionally
/// `status`). Returns `{"booked": bool, "bookedUntil": string | null}`.
#[wasm_bindgen(js_name = "checkTableAvailability")]
pub fn check_table_availability(
    table_id: &str,
    time: &str,
    duration: &str,
    reservations_json: &str,
) -> Result<String, JsValue> {
    api::check_table_availability(table_id, time, duration, reservations_json).map_err(js_err)
}

/// Convert a `"7:00 PM"` label into minutes since midnight.
#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(label: &str) -> Result<u32, JsValue> {
    api::time_to_minutes(label).map_err(js_err)
}

/// Convert minutes since midnight into a `"7:00 PM"` label.
#[wasm_bindgen(js_name = "minutesToTime")]
pub fn minutes_to_time(minutes: u32) -> String {
    booking_engine::format_minutes(minutes)
}

/// Minutes for a duration label; unknown labels count as 60.
#[wasm_bindgen(js_name = "durationToMinutes")]
pub fn duration_to_minutes(label: &str) -> u32 {
    booking_engine::duration_minutes(label)
}

/// Availability of every offered start time on one table.
///
/// `slotsJson` is a JSON array of time labels. Returns a JSON array of
/// `{time, booked, bookedUntil}` objects in the same order.
#[wasm_bindgen(js_name = "slotAvailability")]
pub fn slot_availability(
    table_id: &str,
    duration: &str,
    slots_json: &str,
    reservations_json: &str,
) -> Result<String, JsValue> {
    api::slot_availability(table_id, duration, slots_json, reservations_json).map_err(js_err)
}

/// The first table that seats the party and is free for the slot, or `null`.
#[wasm_bindgen(js_name = "suggestTable")]
pub fn suggest_table(
    tables_json: &str,
    time: &str,
    duration: &str,
    guests: u32,
    location: Option<String>,
    reservations_json: &str,
) -> Result<String, JsValue> {
    api::suggest_table(
        tables_json,
        time,
        duration,
        guests,
        location.as_deref(),
        reservations_json,
    )
    .map_err(js_err)
}

/// Quote a stay. Dates are `YYYY-MM-DD`; `roomJson` is one room object.
#[wasm_bindgen(js_name = "quoteStay")]
pub fn quote_stay(
    room_json: &str,
    check_in: &str,
    check_out: &str,
    guests: u32,
    today: &str,
) -> Result<String, JsValue> {
    api::quote_stay(room_json, check_in, check_out, guests, today).map_err(js_err)
}
