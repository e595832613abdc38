//! Tables, rooms and time slots offered by the house.
//!
//! [`Venue::default`] is the built-in configuration. A JSON file with the same
//! shape can replace it, e.g. for a different floor plan:
//!
//! ```json
//! {
//!   "tables": [{"id": "t1", "name": "Table 1", "location": "Terrace", "seats": 2}],
//!   "rooms": [{"id": "deluxe", "name": "Deluxe Room", "price": 180, "capacity": 2}],
//!   "timeSlots": ["7:00 PM", "7:30 PM"]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::clock::{parse_time_label, SlotTime};
use crate::error::{BookingError, Result};

/// A restaurant table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub location: String,
    pub seats: u32,
}

/// A hotel room type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price per night.
    pub price: f64,
    pub capacity: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Everything the booking forms offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub tables: Vec<DiningTable>,
    pub rooms: Vec<Room>,
    /// Start-time labels offered by the reservation form, in display order.
    pub time_slots: Vec<String>,
}

impl Venue {
    /// Load and validate a venue from JSON.
    ///
    /// # Errors
    /// Returns `BookingError::Json` if the document does not parse, and
    /// `BookingError::Venue` if ids repeat, a table has no seats, a room has
    /// no capacity or a non-positive price, or a time slot is not a valid label.
    pub fn from_json(json: &str) -> Result<Self> {
        let venue: Venue = serde_json::from_str(json)?;
        venue.validate()?;
        Ok(venue)
    }

    pub fn validate(&self) -> Result<()> {
        let mut table_ids = HashSet::new();
        for table in &self.tables {
            if !table_ids.insert(table.id.as_str()) {
                return Err(BookingError::Venue(format!("duplicate table id '{}'", table.id)));
            }
            if table.seats == 0 {
                return Err(BookingError::Venue(format!("table '{}' has no seats", table.id)));
            }
        }

        let mut room_ids = HashSet::new();
        for room in &self.rooms {
            if !room_ids.insert(room.id.as_str()) {
                return Err(BookingError::Venue(format!("duplicate room id '{}'", room.id)));
            }
            if room.capacity == 0 {
                return Err(BookingError::Venue(format!("room '{}' has no capacity", room.id)));
            }
            if room.price <= 0.0 {
                return Err(BookingError::Venue(format!(
                    "room '{}' must have a positive price",
                    room.id
                )));
            }
        }

        for slot in &self.time_slots {
            parse_time_label(slot)
                .map_err(|_| BookingError::Venue(format!("invalid time slot '{}'", slot)))?;
        }

        Ok(())
    }

    pub fn table(&self, id: &str) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// # Errors
    /// Returns `BookingError::UnknownRoom` if no room has this id.
    pub fn room(&self, id: &str) -> Result<&Room> {
        self.rooms
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| BookingError::UnknownRoom(id.to_string()))
    }

    /// Distinct table locations, in first-seen order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tables
            .iter()
            .map(|t| t.location.as_str())
            .filter(|loc| seen.insert(*loc))
            .collect()
    }

    /// The offered time slots as parsed times. Invalid labels are skipped.
    pub fn slot_times(&self) -> Vec<SlotTime> {
        self.time_slots
            .iter()
            .filter_map(|s| parse_time_label(s).ok())
            .collect()
    }
}

impl Default for Venue {
    fn default() -> Self {
        let table = |id: &str, name: &str, location: &str, seats: u32| DiningTable {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            seats,
        };
        let room = |id: &str, name: &str, description: &str, price: f64, capacity: u32, amenities: &[&str]| Room {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            capacity,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        };

        // Lunch 12:00 PM - 3:00 PM, dinner 7:00 PM - 10:30 PM, every 30 minutes.
        let time_slots = (12 * 60..=15 * 60)
            .step_by(30)
            .chain((19 * 60..=22 * 60 + 30).step_by(30))
            .map(crate::clock::format_minutes)
            .collect();

        Venue {
            tables: vec![
                table("t1", "Table 1", "Main Hall", 2),
                table("t2", "Table 2", "Main Hall", 4),
                table("t3", "Table 3", "Main Hall", 6),
                table("t4", "Table 4", "Window Side", 2),
                table("t5", "Table 5", "Window Side", 4),
                table("t6", "Table 6", "Garden Terrace", 4),
                table("t7", "Table 7", "Garden Terrace", 6),
                table("t8", "Private Dining", "Private Room", 8),
            ],
            rooms: vec![
                room(
                    "standard",
                    "Standard Room",
                    "Comfortable room with a queen bed and city view",
                    120.0,
                    2,
                    &["Free Wi-Fi", "Air Conditioning", "TV"],
                ),
                room(
                    "deluxe",
                    "Deluxe Room",
                    "Spacious room with a king bed and a seating area",
                    180.0,
                    2,
                    &["Free Wi-Fi", "Air Conditioning", "Mini Bar", "City View"],
                ),
                room(
                    "family",
                    "Family Suite",
                    "Two connected bedrooms with a shared living space",
                    260.0,
                    4,
                    &["Free Wi-Fi", "Air Conditioning", "Kitchenette", "Two Bathrooms"],
                ),
                room(
                    "presidential",
                    "Presidential Suite",
                    "Top-floor suite with a private terrace and butler service",
                    450.0,
                    4,
                    &["Free Wi-Fi", "Private Terrace", "Butler Service", "Jacuzzi"],
                ),
            ],
            time_slots,
        }
    }
}
