//! Tests for table-slot conflict detection.

use booking_engine::{
    check_table_availability, find_table_conflicts, latest_blocking_end, reservations_on,
    DiningDuration, Occupancy, ReservationStatus, TableConflict, TableRequest, TableReservation,
};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn reservation(
    id: &str,
    table: &str,
    time: &str,
    duration: &str,
    status: ReservationStatus,
) -> TableReservation {
    TableReservation {
        id: id.to_string(),
        user_id: "guest-1".to_string(),
        table_id: table.to_string(),
        date: date(),
        time: time.parse().unwrap(),
        duration: DiningDuration::from_label(duration),
        guests: 2,
        status,
        special_requests: None,
        created_at: None,
    }
}

fn confirmed(id: &str, table: &str, time: &str, duration: &str) -> TableReservation {
    reservation(id, table, time, duration, ReservationStatus::Confirmed)
}

fn request(table: &str, time: &str, duration: &str) -> TableRequest {
    TableRequest::new(table, time.parse().unwrap(), DiningDuration::from_label(duration))
}

fn booked(until: &str) -> Occupancy {
    Occupancy {
        booked: true,
        booked_until: Some(until.to_string()),
    }
}

// ── Documented scenarios ────────────────────────────────────────────────────

#[test]
fn overlapping_request_reports_end_of_existing_reservation() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "1 hour")];

    let result = check_table_availability(&request("T1", "7:30 PM", "1 hour"), &existing);

    assert_eq!(result, booked("8:00 PM"));
}

#[test]
fn back_to_back_booking_is_not_a_conflict() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "1 hour")];

    let result = check_table_availability(&request("T1", "8:00 PM", "1 hour"), &existing);

    assert_eq!(result, Occupancy::free());
    assert_eq!(result.booked_until, None);
}

#[test]
fn request_ending_when_reservation_starts_is_not_a_conflict() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "1 hour")];

    let result = check_table_availability(&request("T1", "6:00 PM", "1 hour"), &existing);

    assert!(!result.booked);
}

#[test]
fn different_table_never_conflicts() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "1 hour")];

    let result = check_table_availability(&request("T2", "7:30 PM", "1 hour"), &existing);

    assert!(!result.booked);
}

#[test]
fn cancelled_reservation_never_conflicts() {
    let existing = vec![reservation(
        "r1",
        "T1",
        "7:00 PM",
        "1 hour",
        ReservationStatus::Cancelled,
    )];

    let result = check_table_availability(&request("T1", "7:30 PM", "1 hour"), &existing);

    assert!(!result.booked);
}

// ── Other statuses and shapes ───────────────────────────────────────────────

#[test]
fn completed_and_no_show_reservations_still_block() {
    for status in [ReservationStatus::Completed, ReservationStatus::NoShow] {
        let existing = vec![reservation("r1", "T1", "7:00 PM", "1 hour", status)];
        let result = check_table_availability(&request("T1", "7:30 PM", "1 hour"), &existing);
        assert_eq!(result, booked("8:00 PM"), "status {:?}", status);
    }
}

#[test]
fn request_fully_containing_reservation_conflicts() {
    let existing = vec![confirmed("r1", "T1", "8:00 PM", "30 mins")];

    let result = check_table_availability(&request("T1", "7:00 PM", "3 hours"), &existing);

    assert_eq!(result, booked("8:30 PM"));
}

#[test]
fn request_inside_reservation_conflicts() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "3 hours")];

    let result = check_table_availability(&request("T1", "8:00 PM", "30 mins"), &existing);

    assert_eq!(result, booked("10:00 PM"));
}

#[test]
fn no_reservations_means_free() {
    let result = check_table_availability(&request("T1", "7:00 PM", "2 hours"), &[]);
    assert_eq!(result, Occupancy::free());
}

#[test]
fn unknown_duration_counts_as_one_hour() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "a while")];

    assert!(check_table_availability(&request("T1", "7:59 PM", "30 mins"), &existing).booked);
    assert!(!check_table_availability(&request("T1", "8:00 PM", "30 mins"), &existing).booked);
}

#[test]
fn late_reservation_end_wraps_past_midnight() {
    let existing = vec![confirmed("r1", "T1", "10:30 PM", "3 hours")];

    let result = check_table_availability(&request("T1", "11:00 PM", "1 hour"), &existing);

    assert_eq!(result, booked("1:30 AM"));
}

// ── Ordering policy ─────────────────────────────────────────────────────────

#[test]
fn first_conflict_in_scan_order_wins() {
    let existing = vec![
        confirmed("r1", "T1", "7:00 PM", "1 hour"),
        confirmed("r2", "T1", "7:30 PM", "2 hours"),
    ];
    let req = request("T1", "7:30 PM", "30 mins");

    assert_eq!(check_table_availability(&req, &existing), booked("8:00 PM"));

    let reversed: Vec<_> = existing.iter().rev().cloned().collect();
    assert_eq!(check_table_availability(&req, &reversed), booked("9:30 PM"));
}

#[test]
fn skipped_records_do_not_affect_the_result() {
    let req = request("T1", "7:30 PM", "1 hour");
    let blocking = confirmed("r1", "T1", "7:00 PM", "1 hour");
    let noise = vec![
        confirmed("n1", "T2", "7:00 PM", "3 hours"),
        reservation("n2", "T1", "7:00 PM", "3 hours", ReservationStatus::Cancelled),
        confirmed("n3", "T1", "5:00 PM", "1 hour"),
    ];

    let mut before = noise.clone();
    before.push(blocking.clone());
    let mut after = vec![blocking];
    after.extend(noise);

    assert_eq!(check_table_availability(&req, &before), booked("8:00 PM"));
    assert_eq!(check_table_availability(&req, &after), booked("8:00 PM"));
}

#[test]
fn checking_twice_gives_the_same_answer() {
    let existing = vec![confirmed("r1", "T1", "7:00 PM", "1 hour")];
    let req = request("T1", "7:30 PM", "1 hour");

    let first = check_table_availability(&req, &existing);
    let second = check_table_availability(&req, &existing);

    assert_eq!(first, second);
}

// ── All conflicts ───────────────────────────────────────────────────────────

#[test]
fn all_conflicts_are_listed_with_overlap() {
    let existing = vec![
        confirmed("r1", "T1", "7:00 PM", "1 hour"),
        confirmed("r2", "T1", "8:00 PM", "2 hours"),
        confirmed("r3", "T1", "10:00 PM", "1 hour"),
        confirmed("r4", "T2", "7:30 PM", "1 hour"),
    ];
    let req = request("T1", "7:30 PM", "1.5 hours"); // 7:30 PM - 9:00 PM

    let conflicts: Vec<TableConflict<'_>> = find_table_conflicts(&req, &existing);

    let ids: Vec<&str> = conflicts.iter().map(|c| c.reservation.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[0].ends_at, "8:00 PM");
    assert_eq!(conflicts[1].overlap_minutes, 60);
    assert_eq!(conflicts[1].ends_at, "10:00 PM");
}

#[test]
fn latest_blocking_end_takes_the_maximum() {
    let existing = vec![
        confirmed("r2", "T1", "7:30 PM", "2 hours"),
        confirmed("r1", "T1", "7:00 PM", "1 hour"),
    ];
    let req = request("T1", "7:30 PM", "30 mins");

    assert_eq!(
        latest_blocking_end(&req, &existing),
        Some("9:30 PM".to_string())
    );
    assert_eq!(latest_blocking_end(&request("T3", "7:30 PM", "30 mins"), &existing), None);
}

// ── Date filtering ──────────────────────────────────────────────────────────

#[test]
fn reservations_on_keeps_only_that_date() {
    let mut other_day = confirmed("r2", "T1", "7:00 PM", "1 hour");
    other_day.date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let all = vec![confirmed("r1", "T1", "7:00 PM", "1 hour"), other_day];

    let today = reservations_on(date(), &all);

    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, "r1");
}

// ── Serde shape ─────────────────────────────────────────────────────────────

#[test]
fn reservation_deserializes_from_store_shape() {
    let json = r#"{
        "id": "abc",
        "userId": "u1",
        "tableId": "t2",
        "date": "2026-03-14",
        "time": "7:00 PM",
        "duration": "1.5 hours",
        "guests": 4,
        "status": "no-show",
        "specialRequests": "Birthday",
        "createdAt": 1760000000
    }"#;

    let r: TableReservation = serde_json::from_str(json).unwrap();

    assert_eq!(r.table_id, "t2");
    assert_eq!(r.start_minutes(), 19 * 60);
    assert_eq!(r.end_minutes(), 20 * 60 + 30);
    assert_eq!(r.status, ReservationStatus::NoShow);
    assert_eq!(r.special_requests.as_deref(), Some("Birthday"));
}

#[test]
fn occupancy_serializes_with_camel_case() {
    let json = serde_json::to_string(&booked("8:00 PM")).unwrap();
    assert_eq!(json, r#"{"booked":true,"bookedUntil":"8:00 PM"}"#);

    let json = serde_json::to_string(&Occupancy::free()).unwrap();
    assert_eq!(json, r#"{"booked":false,"bookedUntil":null}"#);
}
