//! Schedule assembly: merges closure and time-block extraction into one
//! [`StructuredHours`].

use machimeshi_core::{DayKey, DaySchedule, StructuredHours};

use crate::closure::extract_closure;
use crate::timeblock::extract_blocks;

/// Builds the structured schedule for one normalized hours string.
///
/// Qualified blocks append their ranges to each named day. Unqualified
/// blocks fill every day not named by the closure clause. Closure wins
/// last, unconditionally: a day the clause names ends up `None` even when a
/// qualified block also mentioned it.
pub(crate) fn assemble(raw_text: &str, normalized: &str) -> StructuredHours {
    let clause = extract_closure(normalized);
    let blocks = extract_blocks(&clause.remainder);

    let mut schedule = DaySchedule::default();
    for block in &blocks {
        if block.ranges.is_empty() {
            continue;
        }
        if block.days.is_empty() {
            for day in DayKey::ALL {
                if !clause.days.contains(&day) {
                    schedule.append(day, block.ranges.iter().copied());
                }
            }
        } else {
            for day in &block.days {
                schedule.append(*day, block.ranges.iter().copied());
            }
        }
    }
    schedule.coalesce();

    let hours = StructuredHours::new(
        raw_text,
        schedule,
        clause.label,
        clause.days.into_iter().collect(),
    );
    if hours.is_unparseable() {
        tracing::debug!(text = raw_text, "no day or time tokens recognized");
    }
    hours
}
