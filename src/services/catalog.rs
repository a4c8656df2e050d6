use chrono::NaiveTime;
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::room::{Room, TimeSlot};

/// The immutable rooms and daily time slots a ledger is built over.
///
/// Record order is preserved: it is the order rooms and slots are listed in
/// the booking view and laid out on the schedule grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    /// Build a catalog from records supplied by a configuration source.
    ///
    /// Room ids and time labels must be unique, capacities positive, names
    /// non-empty and labels of the form `HH:MM`.
    pub fn new(rooms: Vec<Room>, time_slots: Vec<TimeSlot>) -> Result<Self, CatalogError> {
        validate_rooms(&rooms)?;
        validate_time_slots(&time_slots)?;

        Ok(Self { rooms, time_slots })
    }

    /// The seed data the booking UI ships with.
    pub fn builtin() -> Self {
        Self {
            rooms: builtin_rooms(),
            time_slots: builtin_time_slots(),
        }
    }

    /// Load rooms and time slots from CSV files, falling back to the built-in
    /// seed for any path that is not given.
    pub fn load(
        rooms_path: Option<&Path>,
        time_slots_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let rooms = match rooms_path {
            Some(path) => {
                info!("Loading room catalog from {}", path.display());
                read_csv(path)?
            }
            None => {
                info!("No room catalog file configured, using built-in rooms");
                builtin_rooms()
            }
        };

        let time_slots = match time_slots_path {
            Some(path) => {
                info!("Loading time slot catalog from {}", path.display());
                read_csv(path)?
            }
            None => {
                info!("No time slot catalog file configured, using built-in time slots");
                builtin_time_slots()
            }
        };

        let catalog = Self::new(rooms, time_slots)?;
        info!(
            "Catalog loaded with {} rooms and {} time slots",
            catalog.rooms.len(),
            catalog.time_slots.len()
        );

        Ok(catalog)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn into_parts(self) -> (Vec<Room>, Vec<TimeSlot>) {
        (self.rooms, self.time_slots)
    }
}

/// Returns true for a zero-padded 24-hour `HH:MM` label.
pub fn is_valid_time_label(label: &str) -> bool {
    label.len() == 5 && NaiveTime::parse_from_str(label, "%H:%M").is_ok()
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let to_error = |source: csv::Error| CatalogError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(to_error)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(to_error)?);
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

fn validate_rooms(rooms: &[Room]) -> Result<(), CatalogError> {
    if rooms.is_empty() {
        return Err(CatalogError::Empty("room"));
    }

    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(room.id) {
            return Err(CatalogError::DuplicateRoomId(room.id));
        }
        if room.name.trim().is_empty() {
            return Err(CatalogError::EmptyRoomName(room.id));
        }
        if room.capacity == 0 {
            return Err(CatalogError::ZeroCapacity(room.id));
        }
    }

    Ok(())
}

fn validate_time_slots(time_slots: &[TimeSlot]) -> Result<(), CatalogError> {
    if time_slots.is_empty() {
        return Err(CatalogError::Empty("time slot"));
    }

    let mut seen = HashSet::new();
    for slot in time_slots {
        if !is_valid_time_label(&slot.time) {
            return Err(CatalogError::InvalidTimeLabel(slot.time.clone()));
        }
        if !seen.insert(slot.time.as_str()) {
            return Err(CatalogError::DuplicateTimeSlot(slot.time.clone()));
        }
    }

    Ok(())
}

fn builtin_rooms() -> Vec<Room> {
    let room = |id, name: &str, capacity, available, floor| Room {
        id,
        name: name.to_string(),
        capacity,
        floor,
        available,
    };

    vec![
        room(1, "Конференц-зал А", 12, true, 1),
        room(2, "Переговорная Б", 6, true, 2),
        // Out of service
        room(3, "Креативная комната", 8, false, 2),
        room(4, "Зал совещаний", 20, true, 1),
    ]
}

fn builtin_time_slots() -> Vec<TimeSlot> {
    (9..=18)
        .map(|hour| TimeSlot {
            time: format!("{:02}:00", hour),
            // 11:00 and 14:00 are outside operating hours
            available: hour != 11 && hour != 14,
        })
        .collect()
}
