//! Business-hours parsing and openness queries for the shop directory.
//!
//! Scraped hours strings are free-form Japanese text — `月～金 11:00～14:00`,
//! `１７：００～２３：００（土・日）`, `18:00～25:00■定休日：月` all occur.
//! [`parse_hours`] turns one such string into a [`StructuredHours`]: a
//! per-day schedule of minute ranges plus the captured closing-day label.
//! [`is_shop_open`] then answers day/time filter queries against it.
//!
//! Parsing is deterministic and pure: the structured form is a cache of the
//! parse, recomputed whenever the raw text changes. Malformed input never
//! errors — unrecognizable text degrades to an all-`None` schedule that
//! queries treat as "unknown, assume open".

mod closure;
mod days;
mod normalize;
mod schedule;
mod timeblock;

pub mod error;
pub mod query;

pub use error::HoursError;
pub use machimeshi_core::{DayKey, DaySchedule, StructuredHours, TimeRange};
pub use query::{is_open, TimeOfDay};

/// Parses a raw hours string into its structured schedule.
///
/// Returns `None` for missing, empty, or whitespace-only input — the shop's
/// hours are simply unknown. Every other input yields a schedule, possibly
/// an unparseable one that still carries the raw text for display.
#[must_use]
pub fn parse_hours(raw: Option<&str>) -> Option<StructuredHours> {
    let raw = raw?;
    let normalized = normalize::normalize(raw)?;
    Some(schedule::assemble(raw, &normalized))
}

/// Answers whether a shop is open on `day` at `time` (`HH:MM`).
///
/// Missing structured hours and unparseable schedules both answer open:
/// withholding a shop from the map over a parse miss is worse than
/// occasionally over-showing it.
///
/// # Errors
///
/// Returns [`HoursError::InvalidTimeFilter`] if `time` is not a `HH:MM`
/// clock time. That is a caller bug, not a data problem — scraped data
/// never reaches this argument.
pub fn is_shop_open(
    hours: Option<&StructuredHours>,
    day: Option<DayKey>,
    time: Option<&str>,
) -> Result<bool, HoursError> {
    let time = time.map(str::parse::<TimeOfDay>).transpose()?;
    Ok(match hours {
        None => true,
        Some(hours) => query::is_open(hours, day, time),
    })
}
