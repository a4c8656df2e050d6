use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::models::booking::Booking;
use crate::models::room::{Room, TimeSlot};
use crate::services::catalog::Catalog;

/// The authoritative in-memory collection of bookings.
///
/// The ledger owns every `Booking` and the room and time slot catalogs it was
/// built from. For any (room, date, time) key at most one booking exists;
/// `create_booking` and `cancel_booking` are the only transitions.
///
/// Operations are synchronous and take `&mut self`, so the availability check
/// and the insert in `create_booking` cannot interleave with another caller.
/// Callers sharing a ledger across tasks wrap it in a single lock.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
    // Creation order
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new(catalog: Catalog) -> Self {
        let (rooms, time_slots) = catalog.into_parts();
        Self {
            rooms,
            time_slots,
            bookings: Vec::new(),
        }
    }

    /// Whether `room` can be booked for `time` on `date`.
    ///
    /// False when the room is out of service or not in the catalog, when the
    /// slot is outside operating hours or unknown, or when the key is already
    /// booked. Room status comes from the catalog, not from `room`.
    pub fn is_slot_available(&self, room: &Room, date: NaiveDate, time: &str) -> bool {
        match self.catalog_room(room.id) {
            Some(known) if known.available => {}
            _ => return false,
        }

        match self.time_slot(time) {
            Some(slot) if slot.available => {}
            _ => return false,
        }

        self.position(room.id, date, time).is_none()
    }

    /// Reserve `room` for `time` on `date`.
    ///
    /// Fails with `BookingError::Conflict` when the slot is not available at
    /// call time, including when the identical booking already exists.
    pub fn create_booking(
        &mut self,
        room: &Room,
        date: NaiveDate,
        time: &str,
    ) -> Result<Booking, BookingError> {
        let room_name = match self.catalog_room(room.id) {
            Some(known) if self.is_slot_available(room, date, time) => known.name.clone(),
            _ => {
                warn!(
                    "Rejected booking of room {} on {} at {}: slot not available",
                    room.id, date, time
                );
                return Err(BookingError::Conflict {
                    room_id: room.id,
                    date,
                    time: time.to_string(),
                });
            }
        };

        let booking = Booking {
            room_id: room.id,
            room_name,
            date,
            time: time.to_string(),
            created_at: Utc::now(),
        };
        self.bookings.push(booking.clone());

        info!(
            "Booked room {} ({}) on {} at {}, ledger size {}",
            room.id,
            booking.room_name,
            date,
            time,
            self.bookings.len()
        );

        Ok(booking)
    }

    /// Remove the booking for `room` at `time` on `date` and return it.
    pub fn cancel_booking(
        &mut self,
        room: &Room,
        date: NaiveDate,
        time: &str,
    ) -> Result<Booking, BookingError> {
        let Some(index) = self.position(room.id, date, time) else {
            warn!(
                "No booking to cancel for room {} on {} at {}",
                room.id, date, time
            );
            return Err(BookingError::NotFound {
                room_id: room.id,
                date,
                time: time.to_string(),
            });
        };

        // `remove` keeps the remaining bookings in creation order
        let booking = self.bookings.remove(index);

        info!(
            "Cancelled booking of room {} on {} at {}, ledger size {}",
            room.id,
            date,
            time,
            self.bookings.len()
        );

        Ok(booking)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// All bookings in creation order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn bookings_on(&self, date: NaiveDate) -> impl Iterator<Item = &Booking> + '_ {
        self.bookings.iter().filter(move |booking| booking.date == date)
    }

    pub fn bookings_for_room(&self, room_id: u32) -> impl Iterator<Item = &Booking> + '_ {
        self.bookings
            .iter()
            .filter(move |booking| booking.room_id == room_id)
    }

    pub fn find_booking(&self, room_id: u32, date: NaiveDate, time: &str) -> Option<&Booking> {
        self.position(room_id, date, time)
            .map(|index| &self.bookings[index])
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms that are in service; the only ones offered for booking.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|room| room.available)
    }

    pub fn room(&self, room_id: u32) -> Option<&Room> {
        debug!("Looking up room {}", room_id);
        self.catalog_room(room_id)
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn time_slot(&self, time: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.time == time)
    }

    fn catalog_room(&self, room_id: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    fn position(&self, room_id: u32, date: NaiveDate, time: &str) -> Option<usize> {
        self.bookings
            .iter()
            .position(|booking| booking.matches(room_id, date, time))
    }
}
