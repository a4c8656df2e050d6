use axum::{
    extract::{Json as ExtractJson, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::handlers::error::ApiError;
use crate::models::booking::{AvailabilityResponse, Booking, BookingRequest, BookingsResponse};
use crate::models::common::{
    parse_date, AvailabilityQuery, BookingsQuery, RoomsQuery, ScheduleQuery,
};
use crate::models::room::{Room, TimeSlot};
use crate::services::clock::SharedClock;
use crate::services::ledger::BookingLedger;
use crate::services::schedule::{build_schedule, DaySchedule};

// AppState struct containing shared resources
pub struct AppState {
    // Every ledger call runs under this one lock, never held across an await
    pub ledger: Mutex<BookingLedger>,
    pub clock: SharedClock,
    pub reject_past_dates: bool,
}

impl AppState {
    pub fn new(
        ledger: BookingLedger,
        clock: SharedClock,
        reject_past_dates: bool,
    ) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            clock,
            reject_past_dates,
        }
    }

    fn lock_ledger(&self) -> Result<MutexGuard<'_, BookingLedger>, ApiError> {
        self.ledger
            .lock()
            .map_err(|e| ApiError::internal(&format!("ledger lock poisoned: {}", e)))
    }
}

fn parse_request_date(value: &str) -> Result<NaiveDate, ApiError> {
    parse_date(value).map_err(|e| {
        warn!("Rejected malformed date {:?}: {}", value, e);
        ApiError::invalid_date(value)
    })
}

fn find_room(ledger: &BookingLedger, room_id: u32) -> Result<Room, ApiError> {
    ledger.room(room_id).cloned().ok_or_else(|| {
        warn!("Request for unknown room {}", room_id);
        ApiError::room_not_found(room_id)
    })
}

// List rooms endpoint
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RoomsQuery>,
) -> Result<Json<Vec<Room>>, ApiError> {
    info!(
        "Received request to list rooms with available_only={}",
        params.available_only
    );

    let ledger = state.lock_ledger()?;
    let rooms: Vec<Room> = if params.available_only {
        ledger.available_rooms().cloned().collect()
    } else {
        ledger.rooms().to_vec()
    };

    info!("Returning {} rooms", rooms.len());
    Ok(Json(rooms))
}

// List time slots endpoint
pub async fn list_time_slots(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TimeSlot>>, ApiError> {
    let ledger = state.lock_ledger()?;
    Ok(Json(ledger.time_slots().to_vec()))
}

// Single slot availability endpoint
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    debug!(
        "Checking availability of room {} on {} at {}",
        params.room_id, params.date, params.time
    );

    let date = parse_request_date(&params.date)?;
    let ledger = state.lock_ledger()?;
    let room = find_room(&ledger, params.room_id)?;
    let available = ledger.is_slot_available(&room, date, &params.time);

    Ok(Json(AvailabilityResponse {
        room_id: room.id,
        date,
        time: params.time,
        available,
    }))
}

// Schedule grid endpoint
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScheduleQuery>,
) -> Result<Json<DaySchedule>, ApiError> {
    info!("Received request for schedule on {}", params.date);

    let date = parse_request_date(&params.date)?;
    let ledger = state.lock_ledger()?;
    let schedule = build_schedule(&ledger, date);

    info!(
        "Schedule for {} has {} bookings",
        date, schedule.total_bookings
    );
    Ok(Json(schedule))
}

// List bookings endpoint, optionally filtered by date and room
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, ApiError> {
    let date = match params.date.as_deref() {
        Some(value) => Some(parse_request_date(value)?),
        None => None,
    };

    let ledger = state.lock_ledger()?;
    let bookings: Vec<Booking> = ledger
        .bookings()
        .iter()
        .filter(|booking| date.map_or(true, |d| booking.date == d))
        .filter(|booking| params.room_id.map_or(true, |id| booking.room_id == id))
        .cloned()
        .collect();

    info!("Returning {} bookings", bookings.len());
    Ok(Json(BookingsResponse {
        total_count: bookings.len(),
        bookings,
    }))
}

// Create booking endpoint, called after the user confirms
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    info!(
        "Received request to book room {} on {} at {}",
        request.room_id, request.date, request.time
    );

    let date = parse_request_date(&request.date)?;

    if state.reject_past_dates {
        let today = state.clock.today();
        if date < today {
            warn!("Rejected booking for past date {} (today is {})", date, today);
            return Err(ApiError::past_date(date, today));
        }
    }

    let mut ledger = state.lock_ledger()?;
    let room = find_room(&ledger, request.room_id)?;
    let booking = ledger.create_booking(&room, date, &request.time)?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// Cancel booking endpoint, called after the user confirms
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<BookingRequest>,
) -> Result<Json<Booking>, ApiError> {
    info!(
        "Received request to cancel booking of room {} on {} at {}",
        request.room_id, request.date, request.time
    );

    let date = parse_request_date(&request.date)?;
    let mut ledger = state.lock_ledger()?;
    let room = find_room(&ledger, request.room_id)?;
    let booking = ledger.cancel_booking(&room, date, &request.time)?;

    Ok(Json(booking))
}
