use booking_engine::{
    check_table_availability, slot_availability, DiningDuration, ReservationStatus, SlotTime,
    TableRequest, TableReservation, Venue,
};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A full evening: every table booked back-to-back from noon to midnight.
fn busy_evening(venue: &Venue) -> Vec<TableReservation> {
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    venue
        .tables
        .iter()
        .flat_map(|table| {
            (12 * 60..24 * 60).step_by(90).map(move |start| TableReservation {
                id: format!("{}-{}", table.id, start),
                user_id: "bench".to_string(),
                table_id: table.id.clone(),
                date,
                time: SlotTime::from_minutes(start).unwrap(),
                duration: DiningDuration::NinetyMinutes,
                guests: 2,
                status: ReservationStatus::Confirmed,
                special_requests: None,
                created_at: None,
            })
        })
        .collect()
}

fn bench_overlap(c: &mut Criterion) {
    let venue = Venue::default();
    let reservations = busy_evening(&venue);
    let last_table = venue.tables.last().unwrap().id.clone();
    let request = TableRequest::new(
        last_table.as_str(),
        "11:00 PM".parse().unwrap(),
        DiningDuration::OneHour,
    );
    let slots = venue.slot_times();

    c.bench_function("check_table_availability/busy_evening", |b| {
        b.iter(|| check_table_availability(black_box(&request), black_box(&reservations)))
    });

    c.bench_function("slot_availability/busy_evening", |b| {
        b.iter(|| {
            slot_availability(
                black_box(&last_table),
                DiningDuration::TwoHours,
                black_box(&slots),
                black_box(&reservations),
            )
        })
    });
}

criterion_group!(benches, bench_overlap);
criterion_main!(benches);
