//! Shared domain types for the machimeshi shop directory.
//!
//! Holds the shop record as persisted in the data file, the structured
//! business-hours model produced by `machimeshi-hours`, and the genre
//! cleanup helpers used during enrichment. No I/O happens here.

pub mod days;
pub mod error;
pub mod genre;
pub mod hours;
pub mod shop;

pub use days::DayKey;
pub use error::CoreError;
pub use hours::{DaySchedule, StructuredHours, TimeRange};
pub use shop::ShopRecord;
