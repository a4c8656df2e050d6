use chrono::NaiveDate;
use serde_json::Value;

use crate::handlers::error::ErrorResponse;
use crate::models::booking::{Booking, BookingsResponse};
use crate::models::room::{Room, TimeSlot};
use crate::services::schedule::{DaySchedule, SlotStatus};
use crate::tests::common::fixtures::{
    booking_body, fetch_availability, fixed_clock, ledger_size, setup_test_server,
    setup_test_server_with,
};

/// API handler tests
#[cfg(test)]
mod api_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = setup_test_server();

        let response = server.get("/health").await;
        assert_eq!(response.status_code().as_u16(), 200);
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_list_rooms() {
        let (server, _) = setup_test_server();

        let response = server.get("/rooms").await;
        assert_eq!(response.status_code().as_u16(), 200);
        let rooms: Vec<Room> = response.json();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms[0].name, "Конференц-зал А");

        let response = server
            .get("/rooms")
            .add_query_param("available_only", true)
            .await;
        let rooms: Vec<Room> = response.json();
        let ids: Vec<u32> = rooms.iter().map(|room| room.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_list_time_slots() {
        let (server, _) = setup_test_server();

        let response = server.get("/time-slots").await;
        assert_eq!(response.status_code().as_u16(), 200);
        let slots: Vec<TimeSlot> = response.json();
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[2].time, "11:00");
        assert!(!slots[2].available);
    }

    #[tokio::test]
    async fn test_create_booking() {
        let (server, state) = setup_test_server();

        let response = server
            .post("/bookings")
            .json(&booking_body(1, "15.06.2024", "09:00"))
            .await;

        assert_eq!(response.status_code().as_u16(), 201);
        let booking: Booking = response.json();
        assert_eq!(booking.room_id, 1);
        assert_eq!(booking.room_name, "Конференц-зал А");
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert_eq!(booking.time, "09:00");
        assert_eq!(ledger_size(&state), 1);
    }

    #[tokio::test]
    async fn test_duplicate_booking_conflicts() {
        let (server, state) = setup_test_server();
        let body = booking_body(1, "15.06.2024", "09:00");

        let first = server.post("/bookings").json(&body).await;
        assert_eq!(first.status_code().as_u16(), 201);

        // ISO form of the same date is the same key
        let second = server
            .post("/bookings")
            .json(&booking_body(1, "2024-06-15", "09:00"))
            .await;
        assert_eq!(second.status_code().as_u16(), 409);
        let error: ErrorResponse = second.json();
        assert_eq!(error.code, "conflict");
        assert_eq!(ledger_size(&state), 1);
    }

    #[tokio::test]
    async fn test_booking_unavailable_room_or_slot_conflicts() {
        let (server, state) = setup_test_server();

        let response = server
            .post("/bookings")
            .json(&booking_body(3, "15.06.2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 409);

        let response = server
            .post("/bookings")
            .json(&booking_body(1, "15.06.2024", "14:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 409);

        assert_eq!(ledger_size(&state), 0);
    }

    #[tokio::test]
    async fn test_unknown_room_not_found() {
        let (server, _) = setup_test_server();

        let response = server
            .post("/bookings")
            .json(&booking_body(42, "15.06.2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 404);
        let error: ErrorResponse = response.json();
        assert_eq!(error.code, "room_not_found");

        let response = server
            .get("/availability")
            .add_query_param("room_id", 42)
            .add_query_param("date", "2024-06-15")
            .add_query_param("time", "09:00")
            .await;
        assert_eq!(response.status_code().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_invalid_date_rejected() {
        let (server, state) = setup_test_server();

        let response = server
            .post("/bookings")
            .json(&booking_body(1, "15/06/2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 400);
        let error: ErrorResponse = response.json();
        assert_eq!(error.code, "invalid_date");

        let response = server
            .get("/schedule")
            .add_query_param("date", "someday")
            .await;
        assert_eq!(response.status_code().as_u16(), 400);

        assert_eq!(ledger_size(&state), 0);
    }

    #[tokio::test]
    async fn test_cancel_booking() {
        let (server, state) = setup_test_server();
        let body = booking_body(2, "2024-06-15", "10:00");

        let created: Booking = server.post("/bookings").json(&body).await.json();

        let response = server.delete("/bookings").json(&body).await;
        assert_eq!(response.status_code().as_u16(), 200);
        let removed: Booking = response.json();
        assert_eq!(removed, created);
        assert_eq!(ledger_size(&state), 0);

        let response = server.delete("/bookings").json(&body).await;
        assert_eq!(response.status_code().as_u16(), 404);
        let error: ErrorResponse = response.json();
        assert_eq!(error.code, "booking_not_found");
    }

    #[tokio::test]
    async fn test_availability_endpoint() {
        let (server, _) = setup_test_server();
        let before = fetch_availability(&server, 4, "15.06.2024", "12:00").await;
        assert!(before.available);

        server
            .post("/bookings")
            .json(&booking_body(4, "15.06.2024", "12:00"))
            .await;

        let after = fetch_availability(&server, 4, "15.06.2024", "12:00").await;
        assert!(!after.available);
        assert_eq!(after.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[tokio::test]
    async fn test_list_bookings_filters() {
        let (server, _) = setup_test_server();

        for (room_id, date, time) in [
            (1, "2024-06-15", "09:00"),
            (2, "2024-06-15", "10:00"),
            (1, "2024-06-16", "09:00"),
        ] {
            server
                .post("/bookings")
                .json(&booking_body(room_id, date, time))
                .await;
        }

        let all: BookingsResponse = server.get("/bookings").await.json();
        assert_eq!(all.total_count, 3);

        let on_day: BookingsResponse = server
            .get("/bookings")
            .add_query_param("date", "15.06.2024")
            .await
            .json();
        assert_eq!(on_day.total_count, 2);

        let for_room: BookingsResponse = server
            .get("/bookings")
            .add_query_param("room_id", 1)
            .await
            .json();
        assert_eq!(for_room.total_count, 2);

        let both: BookingsResponse = server
            .get("/bookings")
            .add_query_param("room_id", 1)
            .add_query_param("date", "2024-06-16")
            .await
            .json();
        assert_eq!(both.total_count, 1);
        assert_eq!(both.bookings[0].time, "09:00");
    }

    #[tokio::test]
    async fn test_schedule_endpoint() {
        let (server, _) = setup_test_server();

        server
            .post("/bookings")
            .json(&booking_body(1, "2024-06-15", "09:00"))
            .await;

        let response = server
            .get("/schedule")
            .add_query_param("date", "2024-06-15")
            .await;
        assert_eq!(response.status_code().as_u16(), 200);

        let raw: Value = response.json();
        assert_eq!(raw["rows"][0]["cells"][0]["status"], "booked");

        let schedule: DaySchedule = response.json();
        assert_eq!(schedule.total_bookings, 1);
        assert_eq!(schedule.rows[0].cells[0].status, SlotStatus::Booked);
        assert_eq!(schedule.rows[0].free_slots, 7);
    }

    #[tokio::test]
    async fn test_past_dates_rejected_when_enabled() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let (server, state) = setup_test_server_with(fixed_clock(today), true);

        let response = server
            .post("/bookings")
            .json(&booking_body(1, "14.06.2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 422);
        let error: ErrorResponse = response.json();
        assert_eq!(error.code, "past_date");

        // Today is still bookable
        let response = server
            .post("/bookings")
            .json(&booking_body(1, "15.06.2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 201);
        assert_eq!(ledger_size(&state), 1);
    }

    #[tokio::test]
    async fn test_past_dates_allowed_by_default() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let (server, _) = setup_test_server_with(fixed_clock(today), false);

        let response = server
            .post("/bookings")
            .json(&booking_body(1, "15.06.2024", "09:00"))
            .await;
        assert_eq!(response.status_code().as_u16(), 201);
    }
}
