use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::room::Room;
use crate::services::ledger::BookingLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    // Room out of service or slot outside operating hours
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCell {
    pub time: String,
    pub status: SlotStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub room: Room,
    pub free_slots: usize,
    pub cells: Vec<ScheduleCell>,
}

/// The room x time slot grid for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub total_bookings: usize,
    pub rows: Vec<ScheduleRow>,
}

/// Build the schedule grid for `date`, rooms and slots in catalog order.
pub fn build_schedule(ledger: &BookingLedger, date: NaiveDate) -> DaySchedule {
    let rows: Vec<ScheduleRow> = ledger
        .rooms()
        .iter()
        .map(|room| {
            let cells: Vec<ScheduleCell> = ledger
                .time_slots()
                .iter()
                .map(|slot| {
                    let status = if ledger.find_booking(room.id, date, &slot.time).is_some() {
                        SlotStatus::Booked
                    } else if ledger.is_slot_available(room, date, &slot.time) {
                        SlotStatus::Available
                    } else {
                        SlotStatus::Unavailable
                    };

                    ScheduleCell {
                        time: slot.time.clone(),
                        status,
                    }
                })
                .collect();

            ScheduleRow {
                room: room.clone(),
                free_slots: cells
                    .iter()
                    .filter(|cell| cell.status == SlotStatus::Available)
                    .count(),
                cells,
            }
        })
        .collect();

    DaySchedule {
        date,
        total_bookings: ledger.bookings_on(date).count(),
        rows,
    }
}
