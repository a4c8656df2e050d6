use chrono::NaiveDate;
use std::path::PathBuf;

/// Errors returned by the booking ledger's mutating operations.
///
/// Both variants are recoverable: the ledger is left unchanged when either is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The room or slot is out of service, or the key is already booked.
    #[error("room {room_id} is not available on {date} at {time}")]
    Conflict {
        room_id: u32,
        date: NaiveDate,
        time: String,
    },
    /// Cancellation of a key that has no booking.
    #[error("no booking for room {room_id} on {date} at {time}")]
    NotFound {
        room_id: u32,
        date: NaiveDate,
        time: String,
    },
}

// Errors raised while loading or validating the room and time slot catalogs
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{0} catalog is empty")]
    Empty(&'static str),
    #[error("duplicate room id {0}")]
    DuplicateRoomId(u32),
    #[error("room {0} has an empty name")]
    EmptyRoomName(u32),
    #[error("room {0} must have a positive capacity")]
    ZeroCapacity(u32),
    #[error("duplicate time slot {0}")]
    DuplicateTimeSlot(String),
    #[error("invalid time slot label {0:?}, expected HH:MM")]
    InvalidTimeLabel(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
