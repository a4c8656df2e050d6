use serde::{Deserialize, Serialize};

/// A bookable meeting room from the room catalog.
///
/// `available` is the operational flag (a room taken out of service). It is
/// independent of bookings and never changes after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub capacity: u32,
    pub floor: i32,
    pub available: bool,
}

/// A fixed daily time slot such as "09:00".
///
/// `available` marks slots outside operating hours; it applies to every date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}
