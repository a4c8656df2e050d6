use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of "today" for rejecting bookings dated in the past.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

// Local calendar date of the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub type SharedClock = Arc<dyn Clock + Send + Sync>;
