//! Day-token resolution for Japanese weekday/holiday glyphs.
//!
//! A qualifier segment like `月～金`, `月・水・金` or `土日祝` resolves to a
//! set of canonical day keys. Range expressions may wrap around the week
//! boundary (`金～月` covers Fri, Sat, Sun, Mon) — real schedules do span
//! the weekend. Enumerated lists need no separator handling: once ranges
//! are consumed, every remaining glyph contributes its day individually,
//! which covers `・`/`･` lists and bare mentions alike.

use std::collections::BTreeSet;

use machimeshi_core::DayKey;

/// Maps a single weekday glyph to its key. 祝 is handled separately because
/// it heads the compound tokens 祝日/祝前日/祝後日.
fn weekday_glyph(c: char) -> Option<DayKey> {
    match c {
        '月' => Some(DayKey::Mon),
        '火' => Some(DayKey::Tue),
        '水' => Some(DayKey::Wed),
        '木' => Some(DayKey::Thu),
        '金' => Some(DayKey::Fri),
        '土' => Some(DayKey::Sat),
        '日' => Some(DayKey::Sun),
        _ => None,
    }
}

/// Resolves every day token in `segment`.
///
/// An empty result means the segment names no days — the caller applies the
/// associated time block to all non-closed days.
pub(crate) fn resolve_day_tokens(segment: &str) -> BTreeSet<DayKey> {
    let chars: Vec<char> = segment.chars().collect();
    let mut days = BTreeSet::new();
    let mut consumed = vec![false; chars.len()];

    // Range pass: glyph ～ glyph. Consumed positions are excluded from the
    // glyph pass below so a range endpoint is not double-counted.
    for i in 0..chars.len().saturating_sub(2) {
        if consumed[i] {
            continue;
        }
        let (Some(start), Some(end)) = (weekday_glyph(chars[i]), weekday_glyph(chars[i + 2]))
        else {
            continue;
        };
        if chars[i + 1] != '～' {
            continue;
        }
        let start_idx = start.week_index().unwrap_or(0);
        let end_idx = end.week_index().unwrap_or(0);
        if start_idx <= end_idx {
            days.extend(&DayKey::WEEK[start_idx..=end_idx]);
        } else {
            // Wraparound: the schedule crosses the week boundary.
            days.extend(&DayKey::WEEK[start_idx..]);
            days.extend(&DayKey::WEEK[..=end_idx]);
        }
        consumed[i] = true;
        consumed[i + 1] = true;
        consumed[i + 2] = true;
    }

    // Glyph pass with compound-token lookahead.
    let mut i = 0;
    while i < chars.len() {
        if consumed[i] {
            i += 1;
            continue;
        }
        match chars[i] {
            '祝' => {
                // 祝前日/祝後日 (day before/after a holiday) are ignored
                // outright — consuming them keeps the 祝 and 日 glyphs from
                // leaking into holiday/Sunday matches.
                if chars.get(i + 1).is_some_and(|c| *c == '前' || *c == '後')
                    && chars.get(i + 2) == Some(&'日')
                {
                    i += 3;
                } else if chars.get(i + 1) == Some(&'日') {
                    days.insert(DayKey::Holiday);
                    i += 2;
                } else {
                    days.insert(DayKey::Holiday);
                    i += 1;
                }
            }
            // 曜/曜日 suffix as in 月曜日 — skip so the trailing 日 is not
            // read as Sunday.
            '曜' => {
                i += if chars.get(i + 1) == Some(&'日') { 2 } else { 1 };
            }
            c => {
                if let Some(day) = weekday_glyph(c) {
                    days.insert(day);
                }
                i += 1;
            }
        }
    }

    days
}

#[cfg(test)]
#[path = "days_test.rs"]
mod days_test;
