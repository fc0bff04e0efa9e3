//! Openness queries over a structured schedule.

use std::fmt;
use std::str::FromStr;

use machimeshi_core::{DayKey, StructuredHours};

use crate::HoursError;

/// Latest hour a query is treated as "after midnight": a 01:00 filter also
/// matches a previous-day block that closes at 25:00+.
const AFTER_MIDNIGHT_CUTOFF_HOUR: u16 = 5;

/// A clock time used as an openness filter. Always a civil 0–23 hour — the
/// extended 24–29 form is internal to stored schedules, never to queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// Returns [`HoursError::InvalidTimeFilter`] unless `hour < 24` and
    /// `minute < 60`.
    pub fn new(hour: u16, minute: u16) -> Result<Self, HoursError> {
        if hour >= 24 || minute >= 60 {
            return Err(HoursError::InvalidTimeFilter(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    #[must_use]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    #[must_use]
    pub fn hour(self) -> u16 {
        self.minutes / 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HoursError::InvalidTimeFilter(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

/// Answers whether a schedule is open on `day` at `time`.
///
/// Either filter may be omitted; supplying both requires both to hold. An
/// unparseable schedule always answers open — hiding a shop over a parse
/// miss is worse than over-showing it.
#[must_use]
pub fn is_open(hours: &StructuredHours, day: Option<DayKey>, time: Option<TimeOfDay>) -> bool {
    if hours.is_unparseable() {
        return true;
    }

    let ranges = match day {
        Some(day) => match hours.schedule.get(day) {
            Some(ranges) => Some(ranges),
            None => return false,
        },
        // No day filter: the time check runs against a representative day —
        // the first scheduled one in canonical order.
        None => hours
            .schedule
            .first_scheduled_day()
            .and_then(|d| hours.schedule.get(d)),
    };

    let Some(time) = time else {
        return true;
    };
    let Some(ranges) = ranges else {
        // Time filter with no scheduled day anywhere: unknown, assume open.
        return true;
    };

    let target = time.minutes();
    // An early-morning query means "after midnight" to the user: 01:00 also
    // probes the 25:00 extension of the previous service day.
    let extended = (time.hour() <= AFTER_MIDNIGHT_CUTOFF_HOUR).then_some(target + 24 * 60);

    ranges
        .iter()
        .any(|r| r.contains(target) || extended.is_some_and(|e| r.contains(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_parses_clock_times() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn time_of_day_rejects_extended_hours() {
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!(TimeOfDay::new(24, 0).is_err());
    }

    #[test]
    fn time_of_day_rejects_garbage() {
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("12".parse::<TimeOfDay>().is_err());
        assert!("12:61".parse::<TimeOfDay>().is_err());
    }
}
