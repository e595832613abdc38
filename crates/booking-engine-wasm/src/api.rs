//! JSON-in, JSON-out wrappers behind the WASM exports.

use booking_engine::{
    DiningDuration, DiningTable, ReservationStatus, Room, SlotTime, TableRequest,
    TableReservation,
};
use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Reservation as the browser holds it. Only the fields the checker needs are
/// required; the date is optional because the form fetches one date at a time.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReservationInput {
    #[serde(default)]
    id: String,
    table_id: String,
    time: String,
    duration: String,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    guests: u32,
    #[serde(default)]
    status: ReservationStatus,
}

impl ReservationInput {
    fn into_reservation(self) -> Result<TableReservation, String> {
        Ok(TableReservation {
            id: self.id,
            user_id: String::new(),
            table_id: self.table_id,
            date: self.date.unwrap_or_default(),
            time: parse_time(&self.time)?,
            duration: DiningDuration::from_label(&self.duration),
            guests: self.guests,
            status: self.status,
            special_requests: None,
            created_at: None,
        })
    }
}

fn parse_time(label: &str) -> Result<SlotTime, String> {
    booking_engine::parse_time_label(label).map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", s, e))
}

/// Convert a JSON array of reservation objects into `Vec<TableReservation>`.
fn parse_reservations_json(json: &str) -> Result<Vec<TableReservation>, String> {
    let inputs: Vec<ReservationInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid reservations JSON: {}", e))?;

    inputs
        .into_iter()
        .map(ReservationInput::into_reservation)
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

pub fn check_table_availability(
    table_id: &str,
    time: &str,
    duration: &str,
    reservations_json: &str,
) -> Result<String, String> {
    let reservations = parse_reservations_json(reservations_json)?;
    let request = TableRequest::new(table_id, parse_time(time)?, DiningDuration::from_label(duration));

    to_json(&booking_engine::check_table_availability(&request, &reservations))
}

pub fn time_to_minutes(label: &str) -> Result<u32, String> {
    parse_time(label).map(SlotTime::minutes)
}

pub fn slot_availability(
    table_id: &str,
    duration: &str,
    slots_json: &str,
    reservations_json: &str,
) -> Result<String, String> {
    let labels: Vec<String> =
        serde_json::from_str(slots_json).map_err(|e| format!("Invalid slots JSON: {}", e))?;
    let slots = labels
        .iter()
        .map(|l| parse_time(l))
        .collect::<Result<Vec<_>, _>>()?;
    let reservations = parse_reservations_json(reservations_json)?;

    let statuses = booking_engine::slot_availability(
        table_id,
        DiningDuration::from_label(duration),
        &slots,
        &reservations,
    );
    to_json(&statuses)
}

pub fn suggest_table(
    tables_json: &str,
    time: &str,
    duration: &str,
    guests: u32,
    location: Option<&str>,
    reservations_json: &str,
) -> Result<String, String> {
    let tables: Vec<DiningTable> =
        serde_json::from_str(tables_json).map_err(|e| format!("Invalid tables JSON: {}", e))?;
    let reservations = parse_reservations_json(reservations_json)?;

    let pick = booking_engine::suggest_table(
        &tables,
        parse_time(time)?,
        DiningDuration::from_label(duration),
        guests,
        location.filter(|l| !l.is_empty()),
        &reservations,
    );
    to_json(&pick)
}

pub fn quote_stay(
    room_json: &str,
    check_in: &str,
    check_out: &str,
    guests: u32,
    today: &str,
) -> Result<String, String> {
    let room: Room =
        serde_json::from_str(room_json).map_err(|e| format!("Invalid room JSON: {}", e))?;

    let quote = booking_engine::quote_stay(
        &room,
        parse_date(check_in)?,
        parse_date(check_out)?,
        guests,
        parse_date(today)?,
    )
    .map_err(|e| e.to_string())?;
    to_json(&quote)
}
