//! Canonical day keys for the per-day schedule.
//!
//! Exactly eight keys: the seven weekdays plus `holiday` (祝). Variants like
//! 祝前日/祝後日 are not modeled — the parser ignores them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
    Holiday,
}

impl DayKey {
    /// The seven weekdays in canonical order. `Holiday` is excluded — it is
    /// never part of a day range.
    pub const WEEK: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    /// All eight keys in canonical order, `Holiday` last.
    pub const ALL: [DayKey; 8] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
        DayKey::Holiday,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
            DayKey::Sun => "sun",
            DayKey::Holiday => "holiday",
        }
    }

    /// Index into [`DayKey::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position within [`DayKey::WEEK`], or `None` for `Holiday`.
    #[must_use]
    pub fn week_index(self) -> Option<usize> {
        match self {
            DayKey::Holiday => None,
            other => Some(other as usize),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(DayKey::Mon),
            "tue" => Ok(DayKey::Tue),
            "wed" => Ok(DayKey::Wed),
            "thu" => Ok(DayKey::Thu),
            "fri" => Ok(DayKey::Fri),
            "sat" => Ok(DayKey::Sat),
            "sun" => Ok(DayKey::Sun),
            "holiday" => Ok(DayKey::Holiday),
            other => Err(CoreError::InvalidDayKey(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_ordering_matches_indices() {
        for (i, day) in DayKey::WEEK.iter().enumerate() {
            assert_eq!(day.week_index(), Some(i));
        }
    }

    #[test]
    fn holiday_has_no_week_index() {
        assert_eq!(DayKey::Holiday.week_index(), None);
    }

    #[test]
    fn round_trips_through_str() {
        for day in DayKey::ALL {
            assert_eq!(day.as_str().parse::<DayKey>().unwrap(), day);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("monday".parse::<DayKey>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&DayKey::Holiday).unwrap();
        assert_eq!(json, "\"holiday\"");
    }
}
