use chrono::NaiveDate;
use serde::Deserialize;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const RU_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a calendar date in ISO (`2024-06-15`) or Russian locale
/// (`15.06.2024`) form.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, RU_DATE_FORMAT))
}

// Query parameters for the room list
#[derive(Debug, Deserialize)]
pub struct RoomsQuery {
    #[serde(default)]
    pub available_only: bool,
}

// Query parameters for a single slot availability check
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub room_id: u32,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub date: Option<String>,
    pub room_id: Option<u32>,
}
