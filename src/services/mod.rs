pub mod catalog;
pub mod clock;
pub mod ledger;
pub mod schedule;
