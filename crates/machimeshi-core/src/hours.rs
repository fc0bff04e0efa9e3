//! Structured business-hours model.
//!
//! Times are minute counts since local midnight. A close time may run past
//! midnight and is then stored in extended form (24:00–29:59 becomes
//! 1440–1799 minutes) so that range comparisons stay monotonic. The display
//! layer is responsible for folding extended hours back into clock notation;
//! everything here stores and compares the extended form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::days::DayKey;
use crate::CoreError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Latest representable close time: 30:00 extended, i.e. 06:00 next day.
pub const CLOSE_CEILING: u16 = 30 * 60;

/// A single service window, e.g. `11:30～14:00` or `17:00～26:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    open: u16,
    close: u16,
}

impl TimeRange {
    /// Builds a range from minute counts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimeRange`] if `open` is not a clock time
    /// (`>= 1440`), if `close` does not come strictly after `open`, or if
    /// `close` exceeds the 06:00-next-day ceiling.
    pub fn new(open: u16, close: u16) -> Result<Self, CoreError> {
        if open >= MINUTES_PER_DAY {
            return Err(CoreError::InvalidTimeRange {
                open,
                close,
                reason: "open time must be before midnight",
            });
        }
        if close <= open {
            return Err(CoreError::InvalidTimeRange {
                open,
                close,
                reason: "close time must come after open time",
            });
        }
        if close > CLOSE_CEILING {
            return Err(CoreError::InvalidTimeRange {
                open,
                close,
                reason: "close time past the 06:00 next-day ceiling",
            });
        }
        Ok(Self { open, close })
    }

    #[must_use]
    pub fn open(self) -> u16 {
        self.open
    }

    #[must_use]
    pub fn close(self) -> u16 {
        self.close
    }

    /// Whether `minutes` falls inside the half-open window `[open, close)`.
    #[must_use]
    pub fn contains(self, minutes: u16) -> bool {
        self.open <= minutes && minutes < self.close
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}～{:02}:{:02}",
            self.open / 60,
            self.open % 60,
            self.close / 60,
            self.close % 60
        )
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    /// Parses the persisted form `HH:MM～HH:MM`, extended close hours
    /// included. This is the data-file codec, not the free-text parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::MalformedRangeText(s.to_string());
        let (open_text, close_text) = s.split_once('～').ok_or_else(malformed)?;
        let open = minutes_from_clock(open_text.trim()).ok_or_else(malformed)?;
        let close = minutes_from_clock(close_text.trim()).ok_or_else(malformed)?;
        Self::new(open, close)
    }
}

fn minutes_from_clock(s: &str) -> Option<u16> {
    let (h, m) = s.split_once(':')?;
    let hours: u16 = h.parse().ok()?;
    let minutes: u16 = m.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Per-day schedule: each canonical key maps to `None` (closed or
/// unspecified) or a chronological list of non-overlapping service windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ParsedDays", try_from = "ParsedDays")]
pub struct DaySchedule {
    days: [Option<Vec<TimeRange>>; 8],
}

impl DaySchedule {
    #[must_use]
    pub fn get(&self, day: DayKey) -> Option<&[TimeRange]> {
        self.days[day.index()].as_deref()
    }

    /// Appends ranges to a day, creating the list if absent. Existing ranges
    /// are kept — a shop may describe lunch and dinner in separate segments.
    pub fn append(&mut self, day: DayKey, ranges: impl IntoIterator<Item = TimeRange>) {
        self.days[day.index()]
            .get_or_insert_with(Vec::new)
            .extend(ranges);
    }

    /// Forces a day back to `None`. Used for explicit closures, which win
    /// over any merged ranges.
    pub fn close_day(&mut self, day: DayKey) {
        self.days[day.index()] = None;
    }

    /// `true` when no day carries any ranges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    /// First day in canonical order with ranges, if any.
    #[must_use]
    pub fn first_scheduled_day(&self) -> Option<DayKey> {
        DayKey::ALL.into_iter().find(|d| self.get(*d).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, Option<&[TimeRange]>)> + '_ {
        DayKey::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Restores the per-day invariant after merging: sorts each day by open
    /// time and unions ranges that overlap (duplicates included). Abutting
    /// windows stay separate — lunch and dinner remain distinct entries.
    pub fn coalesce(&mut self) {
        for slot in &mut self.days {
            let Some(ranges) = slot else { continue };
            ranges.sort_by_key(|r| (r.open, r.close));
            let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
            for range in ranges.drain(..) {
                match merged.last_mut() {
                    Some(last) if range.open < last.close => {
                        last.close = last.close.max(range.close);
                    }
                    _ => merged.push(range),
                }
            }
            *ranges = merged;
        }
    }
}

/// Persisted `parsed` mapping: every key present, value is the
/// `HH:MM～HH:MM [/ ...]` string or `null`.
#[derive(Serialize, Deserialize)]
struct ParsedDays {
    mon: Option<String>,
    tue: Option<String>,
    wed: Option<String>,
    thu: Option<String>,
    fri: Option<String>,
    sat: Option<String>,
    sun: Option<String>,
    holiday: Option<String>,
}

fn format_day(ranges: Option<&[TimeRange]>) -> Option<String> {
    ranges.map(|rs| {
        rs.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    })
}

fn parse_day(text: Option<&str>) -> Result<Option<Vec<TimeRange>>, CoreError> {
    text.map(|t| {
        t.split(" / ")
            .map(|part| part.trim().parse::<TimeRange>())
            .collect::<Result<Vec<_>, _>>()
    })
    .transpose()
}

impl From<DaySchedule> for ParsedDays {
    fn from(schedule: DaySchedule) -> Self {
        ParsedDays {
            mon: format_day(schedule.get(DayKey::Mon)),
            tue: format_day(schedule.get(DayKey::Tue)),
            wed: format_day(schedule.get(DayKey::Wed)),
            thu: format_day(schedule.get(DayKey::Thu)),
            fri: format_day(schedule.get(DayKey::Fri)),
            sat: format_day(schedule.get(DayKey::Sat)),
            sun: format_day(schedule.get(DayKey::Sun)),
            holiday: format_day(schedule.get(DayKey::Holiday)),
        }
    }
}

impl TryFrom<ParsedDays> for DaySchedule {
    type Error = CoreError;

    fn try_from(parsed: ParsedDays) -> Result<Self, Self::Error> {
        Ok(DaySchedule {
            days: [
                parse_day(parsed.mon.as_deref())?,
                parse_day(parsed.tue.as_deref())?,
                parse_day(parsed.wed.as_deref())?,
                parse_day(parsed.thu.as_deref())?,
                parse_day(parsed.fri.as_deref())?,
                parse_day(parsed.sat.as_deref())?,
                parse_day(parsed.sun.as_deref())?,
                parse_day(parsed.holiday.as_deref())?,
            ],
        })
    }
}

/// The structured parse of one raw hours string, persisted alongside it.
///
/// `closed_days` is a parse-time artifact: the assembler records which keys an
/// explicit closure clause resolved to, and guarantees those days are `None`
/// in `schedule`. It is not persisted — the `closed` label carries the
/// human-readable closure text instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredHours {
    /// The raw scraped text, never discarded.
    pub text: String,
    #[serde(rename = "parsed", default)]
    pub schedule: DaySchedule,
    /// Captured closure label, e.g. `日` or `不定休`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<String>,
    #[serde(skip)]
    pub closed_days: Vec<DayKey>,
}

impl StructuredHours {
    /// Builds the aggregate, forcing every closed day back to `None` so the
    /// closure-wins invariant holds by construction.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        mut schedule: DaySchedule,
        closed: Option<String>,
        closed_days: Vec<DayKey>,
    ) -> Self {
        for day in &closed_days {
            schedule.close_day(*day);
        }
        Self {
            text: text.into(),
            schedule,
            closed,
            closed_days,
        }
    }

    /// No day parsed and no closure captured: the text yielded nothing.
    /// Callers treat such a schedule as "unknown hours — default to open".
    #[must_use]
    pub fn is_unparseable(&self) -> bool {
        self.schedule.is_empty() && self.closed.is_none()
    }
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod hours_test;
