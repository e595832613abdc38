//! `booking` CLI — check table availability, quote stays and browse the menu.
//!
//! ## Usage
//!
//! ```sh
//! # Is table t1 free at 7:30 PM for an hour? (reservations from stdin)
//! cat reservations.json | booking check --table t1 --time "7:30 PM" --duration "1 hour"
//!
//! # Same, narrowing a multi-day export to one date
//! booking check -i reservations.json --date 2026-03-14 --table t1 --time "7:30 PM" --duration "1 hour"
//!
//! # Every offered start time on a table
//! booking slots -i reservations.json --date 2026-03-14 --table t1 --duration "2 hours"
//!
//! # First free table for a party of four on the terrace
//! booking suggest -i reservations.json --time "8:00 PM" --duration "1.5 hours" --guests 4 --location "Garden Terrace"
//!
//! # Quote a stay
//! booking quote --room deluxe --check-in 2026-05-10 --check-out 2026-05-13 --guests 2
//!
//! # Menu, dashboard
//! booking menu --section south --search dosa
//! booking stats --rooms rooms.json --tables reservations.json
//! ```
//!
//! Set `RUST_LOG=debug` to see which reservation blocked a slot.

use anyhow::{Context, Result};
use booking_engine::{
    default_menu, filter_menu, group_by_category, DashboardStats, DiningDuration, MenuSection,
    Occupancy, RoomBooking, SlotTime, TableRequest, TableReservation, Venue,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Hotel and restaurant booking checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Venue configuration file (JSON); the built-in venue is used if omitted
    #[arg(long, global = true)]
    venue: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a table is free for a time and duration
    Check {
        /// Reservations file (JSON array; reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Only consider reservations on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        table: String,
        /// Start time label, e.g. "7:30 PM"
        #[arg(long)]
        time: String,
        /// Duration label, e.g. "1.5 hours"
        #[arg(long, default_value = "1 hour")]
        duration: String,
        /// List every conflicting reservation instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Show availability of every offered start time on a table
    Slots {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        table: String,
        #[arg(long, default_value = "1 hour")]
        duration: String,
    },
    /// Suggest the first free table that seats the party
    Suggest {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "1 hour")]
        duration: String,
        #[arg(long)]
        guests: u32,
        /// Preferred area, e.g. "Garden Terrace"
        #[arg(long)]
        location: Option<String>,
    },
    /// Quote a room stay
    Quote {
        #[arg(long)]
        room: String,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
        #[arg(long, default_value_t = 1)]
        guests: u32,
        /// Reference date for "check-in is in the past" (defaults to today)
        #[arg(long)]
        today: Option<String>,
        /// Existing room bookings (JSON array) to check the dates against
        #[arg(long)]
        bookings: Option<String>,
    },
    /// Print the restaurant menu
    Menu {
        /// north, south, desserts or beverages
        #[arg(long)]
        section: Option<String>,
        /// Case-insensitive match on dish name or category
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print dashboard totals for room bookings and table reservations
    Stats {
        /// Room bookings file (JSON array)
        #[arg(long)]
        rooms: Option<String>,
        /// Table reservations file (JSON array)
        #[arg(long)]
        tables: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let venue = load_venue(cli.venue.as_deref())?;

    match cli.command {
        Commands::Check {
            input,
            date,
            table,
            time,
            duration,
            all,
        } => {
            let reservations = load_reservations(input.as_deref(), date.as_deref())?;
            let request = TableRequest::new(table, parse_time(&time)?, parse_duration(&duration));

            if all {
                let conflicts: Vec<ConflictRow> =
                    booking_engine::find_table_conflicts(&request, &reservations)
                        .into_iter()
                        .map(|c| ConflictRow {
                            id: c.reservation.id.clone(),
                            time: c.reservation.time,
                            duration: c.reservation.duration,
                            ends_at: c.ends_at,
                            overlap_minutes: c.overlap_minutes,
                        })
                        .collect();
                print_json(&conflicts)?;
            } else {
                let occupancy: Occupancy =
                    booking_engine::check_table_availability(&request, &reservations);
                print_json(&occupancy)?;
            }
        }
        Commands::Slots {
            input,
            date,
            table,
            duration,
        } => {
            if venue.table(&table).is_none() {
                log::warn!("table '{}' is not part of the venue", table);
            }
            let reservations = load_reservations(input.as_deref(), date.as_deref())?;
            let statuses = booking_engine::slot_availability(
                &table,
                parse_duration(&duration),
                &venue.slot_times(),
                &reservations,
            );
            for status in statuses {
                match status.booked_until {
                    Some(until) if status.booked => {
                        println!("{:>8}  booked until {}", status.time, until)
                    }
                    _ => println!("{:>8}  free", status.time),
                }
            }
        }
        Commands::Suggest {
            input,
            date,
            time,
            duration,
            guests,
            location,
        } => {
            let reservations = load_reservations(input.as_deref(), date.as_deref())?;
            let location = location.as_deref().filter(|l| !l.is_empty());
            let eligible = booking_engine::eligible_tables(&venue.tables, guests, location);
            let pick = booking_engine::suggest_table(
                &venue.tables,
                parse_time(&time)?,
                parse_duration(&duration),
                guests,
                location,
                &reservations,
            );
            match pick {
                Some(table) => {
                    println!("{} table(s) seat your party", eligible.len());
                    println!(
                        "Best match: {} ({}, {} seats)",
                        table.name, table.location, table.seats
                    );
                }
                None => {
                    println!("No tables available for this selection. Try different options.")
                }
            }
        }
        Commands::Quote {
            room,
            check_in,
            check_out,
            guests,
            today,
            bookings,
        } => {
            let room = venue.room(&room)?;
            let check_in = parse_date(&check_in)?;
            let check_out = parse_date(&check_out)?;
            let today = match today {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            if let Some(path) = bookings {
                let existing: Vec<RoomBooking> = read_json(Some(path.as_str()))?;
                if let Some(clash) =
                    booking_engine::find_room_conflict(&room.id, check_in, check_out, &existing)
                {
                    anyhow::bail!(
                        "{} is already booked from {} to {}",
                        room.name,
                        clash.check_in,
                        clash.check_out
                    );
                }
            }

            let quote = booking_engine::quote_stay(room, check_in, check_out, guests, today)
                .context("Failed to quote stay")?;
            print_json(&quote)?;
        }
        Commands::Menu { section, search } => {
            let section = section
                .as_deref()
                .map(str::parse::<MenuSection>)
                .transpose()?;
            let menu = default_menu();
            let sections: Vec<MenuSection> = match section {
                Some(s) => vec![s],
                None => MenuSection::ALL.to_vec(),
            };

            for section in sections {
                let matching: Vec<_> = filter_menu(&menu, Some(section), &search)
                    .into_iter()
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    continue;
                }
                println!("== {}", section);
                for (category, items) in group_by_category(&matching, section) {
                    println!("-- {}", category);
                    for item in items {
                        let marker = if item.is_veg { "veg" } else { "non-veg" };
                        println!("  {:<28} {:>6.0}  [{}]", item.name, item.price, marker);
                    }
                }
            }
        }
        Commands::Stats { rooms, tables } => {
            let rooms: Vec<RoomBooking> = match rooms {
                Some(path) => read_json(Some(path.as_str()))?,
                None => Vec::new(),
            };
            let tables: Vec<TableReservation> = match tables {
                Some(path) => read_json(Some(path.as_str()))?,
                None => Vec::new(),
            };
            let stats = DashboardStats::compute(&rooms, &tables);
            println!("Room bookings:       {}", stats.total_room_bookings);
            println!("Active bookings:     {}", stats.active_room_bookings);
            println!("Total revenue:       {:.2}", stats.total_revenue);
            println!("Guests staying:      {}", stats.total_guests);
            println!("Table reservations:  {}", stats.total_table_reservations);
            println!("Confirmed tables:    {}", stats.confirmed_table_reservations);
        }
    }

    Ok(())
}

/// One line of `check --all` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictRow {
    id: String,
    time: SlotTime,
    duration: DiningDuration,
    ends_at: String,
    overlap_minutes: u32,
}

fn load_venue(path: Option<&str>) -> Result<Venue> {
    match path {
        Some(path) => {
            let json = read_input(Some(path))?;
            Venue::from_json(&json).with_context(|| format!("Invalid venue file: {}", path))
        }
        None => Ok(Venue::default()),
    }
}

/// Read reservations and narrow them to one date.
///
/// Without `--date` every record must already share a date, since the checker
/// only compares times of day.
fn load_reservations(input: Option<&str>, date: Option<&str>) -> Result<Vec<TableReservation>> {
    let reservations: Vec<TableReservation> = read_json(input)?;

    match date {
        Some(date) => Ok(booking_engine::reservations_on(parse_date(date)?, &reservations)),
        None => {
            let dates: BTreeSet<NaiveDate> = reservations.iter().map(|r| r.date).collect();
            if dates.len() > 1 {
                anyhow::bail!(
                    "Reservations span {} dates; pass --date to pick one",
                    dates.len()
                );
            }
            Ok(reservations)
        }
    }
}

fn parse_time(label: &str) -> Result<SlotTime> {
    label
        .parse()
        .with_context(|| format!("Invalid --time '{}'", label))
}

fn parse_duration(label: &str) -> DiningDuration {
    DiningDuration::from_label(label)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn read_json<T: DeserializeOwned>(path: Option<&str>) -> Result<T> {
    let json = read_input(path)?;
    serde_json::from_str(&json).with_context(|| match path {
        Some(path) => format!("Failed to parse JSON from {}", path),
        None => "Failed to parse JSON from stdin".to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{}", pretty);
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
