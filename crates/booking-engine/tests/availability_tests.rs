//! Tests for slot availability, table suggestion and free windows.

use booking_engine::{
    check_table_availability, eligible_tables, free_windows, slot_availability, suggest_table,
    DiningDuration, DiningTable, FreeWindow, ReservationStatus, SlotStatus, SlotTime,
    TableRequest, TableReservation, Venue,
};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn t(label: &str) -> SlotTime {
    label.parse().unwrap()
}

fn table(id: &str, location: &str, seats: u32) -> DiningTable {
    DiningTable {
        id: id.to_string(),
        name: format!("Table {}", id),
        location: location.to_string(),
        seats,
    }
}

fn reservation(table: &str, time: &str, duration: DiningDuration) -> TableReservation {
    TableReservation {
        id: format!("{}@{}", table, time),
        user_id: "guest".to_string(),
        table_id: table.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        time: t(time),
        duration,
        guests: 2,
        status: ReservationStatus::Confirmed,
        special_requests: None,
        created_at: None,
    }
}

fn floor() -> Vec<DiningTable> {
    vec![
        table("t1", "Main Hall", 2),
        table("t2", "Main Hall", 4),
        table("t3", "Terrace", 4),
        table("t4", "Terrace", 8),
    ]
}

// ── eligible_tables ─────────────────────────────────────────────────────────

#[test]
fn eligible_tables_filter_by_seats() {
    let tables = floor();
    let ids: Vec<&str> = eligible_tables(&tables, 3, None)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t2", "t3", "t4"]);
}

#[test]
fn eligible_tables_filter_by_location() {
    let tables = floor();
    let ids: Vec<&str> = eligible_tables(&tables, 2, Some("Terrace"))
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t3", "t4"]);
}

#[test]
fn oversized_party_has_no_tables() {
    assert!(eligible_tables(&floor(), 9, None).is_empty());
}

// ── suggest_table ───────────────────────────────────────────────────────────

#[test]
fn suggestion_is_first_eligible_table_when_all_free() {
    let tables = floor();
    let pick = suggest_table(&tables, t("7:00 PM"), DiningDuration::OneHour, 2, None, &[]);
    assert_eq!(pick.map(|t| t.id.as_str()), Some("t1"));
}

#[test]
fn suggestion_skips_booked_tables() {
    let tables = floor();
    let existing = vec![
        reservation("t2", "7:00 PM", DiningDuration::TwoHours),
        reservation("t3", "6:30 PM", DiningDuration::OneHour),
    ];

    let pick = suggest_table(
        &tables,
        t("7:00 PM"),
        DiningDuration::OneHour,
        4,
        None,
        &existing,
    );

    assert_eq!(pick.map(|t| t.id.as_str()), Some("t4"));
}

#[test]
fn suggestion_honours_back_to_back_bookings() {
    let tables = floor();
    let existing = vec![reservation("t1", "6:00 PM", DiningDuration::OneHour)];

    let pick = suggest_table(&tables, t("7:00 PM"), DiningDuration::OneHour, 2, None, &existing);

    assert_eq!(pick.map(|t| t.id.as_str()), Some("t1"));
}

#[test]
fn suggestion_is_none_when_everything_is_taken() {
    let tables = floor();
    let existing = vec![
        reservation("t3", "7:00 PM", DiningDuration::ThreeHours),
        reservation("t4", "8:00 PM", DiningDuration::OneHour),
    ];

    let pick = suggest_table(
        &tables,
        t("7:30 PM"),
        DiningDuration::OneHour,
        2,
        Some("Terrace"),
        &existing,
    );

    assert!(pick.is_none());
}

// ── slot_availability ───────────────────────────────────────────────────────

#[test]
fn slot_availability_marks_blocked_slots() {
    let slots = vec![t("6:00 PM"), t("6:30 PM"), t("7:00 PM"), t("8:00 PM")];
    let existing = vec![reservation("t1", "7:00 PM", DiningDuration::OneHour)];

    let statuses = slot_availability("t1", DiningDuration::OneHour, &slots, &existing);

    assert_eq!(
        statuses,
        vec![
            SlotStatus {
                time: t("6:00 PM"),
                booked: false,
                booked_until: None
            },
            SlotStatus {
                time: t("6:30 PM"),
                booked: true,
                booked_until: Some("8:00 PM".to_string())
            },
            SlotStatus {
                time: t("7:00 PM"),
                booked: true,
                booked_until: Some("8:00 PM".to_string())
            },
            SlotStatus {
                time: t("8:00 PM"),
                booked: false,
                booked_until: None
            },
        ]
    );
}

#[test]
fn slot_availability_agrees_with_checker_on_default_venue() {
    let venue = Venue::default();
    let existing = vec![
        reservation("t2", "7:30 PM", DiningDuration::NinetyMinutes),
        reservation("t2", "12:00 PM", DiningDuration::TwoHours),
    ];
    let slots = venue.slot_times();

    let statuses = slot_availability("t2", DiningDuration::OneHour, &slots, &existing);

    assert_eq!(statuses.len(), slots.len());
    for status in statuses {
        let request = TableRequest::new("t2", status.time, DiningDuration::OneHour);
        let direct = check_table_availability(&request, &existing);
        assert_eq!(status.booked, direct.booked);
        assert_eq!(status.booked_until, direct.booked_until);
    }
}

// ── free_windows ────────────────────────────────────────────────────────────

#[test]
fn free_windows_fill_gaps_between_reservations() {
    let existing = vec![
        reservation("t1", "7:00 PM", DiningDuration::OneHour),
        reservation("t1", "9:00 PM", DiningDuration::ThirtyMinutes),
        reservation("t2", "8:00 PM", DiningDuration::OneHour),
    ];

    let windows = free_windows("t1", &existing, t("6:00 PM"), 23 * 60);

    assert_eq!(
        windows,
        vec![
            FreeWindow {
                start: "6:00 PM".to_string(),
                end: "7:00 PM".to_string(),
                duration_minutes: 60
            },
            FreeWindow {
                start: "8:00 PM".to_string(),
                end: "9:00 PM".to_string(),
                duration_minutes: 60
            },
            FreeWindow {
                start: "9:30 PM".to_string(),
                end: "11:00 PM".to_string(),
                duration_minutes: 90
            },
        ]
    );
}

#[test]
fn free_windows_merge_overlapping_and_adjacent_reservations() {
    let existing = vec![
        reservation("t1", "7:00 PM", DiningDuration::OneHour),
        reservation("t1", "7:30 PM", DiningDuration::OneHour),
        reservation("t1", "8:30 PM", DiningDuration::OneHour),
    ];

    let windows = free_windows("t1", &existing, t("7:00 PM"), 22 * 60);

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, "9:30 PM");
    assert_eq!(windows[0].duration_minutes, 30);
}

#[test]
fn free_windows_ignore_cancelled_reservations() {
    let mut cancelled = reservation("t1", "7:00 PM", DiningDuration::ThreeHours);
    cancelled.status = ReservationStatus::Cancelled;

    let windows = free_windows("t1", &[cancelled], t("6:00 PM"), 23 * 60);

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].duration_minutes, 300);
}

#[test]
fn free_windows_empty_when_closed() {
    assert!(free_windows("t1", &[], t("10:00 PM"), 22 * 60).is_empty());
}

#[test]
fn free_windows_run_past_midnight() {
    let existing = vec![reservation("t1", "10:30 PM", DiningDuration::OneHour)];

    let windows = free_windows("t1", &existing, t("10:00 PM"), 25 * 60);

    assert_eq!(windows.len(), 2);
    assert_eq!(windows[1].start, "11:30 PM");
    assert_eq!(windows[1].end, "1:00 AM");
    assert_eq!(windows[1].duration_minutes, 90);
}
