use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// A confirmed reservation of one room for one time slot on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room_id: u32,
    // Snapshot of the room's display name for schedule listings
    pub room_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Returns true when this booking holds the (room, date, time) key.
    pub fn matches(&self, room_id: u32, date: NaiveDate, time: &str) -> bool {
        self.room_id == room_id && self.date == date && self.time == time
    }
}

// Request body for creating or cancelling a booking
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingRequest {
    pub room_id: u32,
    // "2024-06-15" or "15.06.2024"
    pub date: String,
    pub time: String,
}

// Response structure for the availability endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub room_id: u32,
    pub date: NaiveDate,
    pub time: String,
    pub available: bool,
}

// Response structure for the booking list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub total_count: usize,
    pub bookings: Vec<Booking>,
}
