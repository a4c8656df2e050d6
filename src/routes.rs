use axum::{routing::get, Router};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    cancel_booking, check_availability, create_booking, get_schedule, list_bookings, list_rooms,
    list_time_slots, AppState,
};
use crate::handlers::health::health_check;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));

    // Catalog and schedule reads
    let catalog_routes = Router::new()
        .route("/rooms", get(list_rooms))
        .route("/time-slots", get(list_time_slots))
        .route("/availability", get(check_availability))
        .route("/schedule", get(get_schedule));

    // Booking commands
    let booking_routes = Router::new().route(
        "/bookings",
        get(list_bookings).post(create_booking).delete(cancel_booking),
    );

    info!("Booking API routes enabled");

    Router::new()
        .merge(health_route)
        .merge(catalog_routes)
        .merge(booking_routes)
        .with_state(app_state)
}
