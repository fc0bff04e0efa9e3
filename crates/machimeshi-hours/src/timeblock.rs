//! Extraction of `HH:MM～HH:MM` time blocks and their day qualifiers.
//!
//! A block is one or more time ranges plus the day set they apply to. Day
//! qualifiers come in two shapes: a parenthetical next to the times
//! (`11:00～14:00（月～金）` or `（土・日）17:00～23:00`) or a bare day
//! prefix at the start of a segment (`月・水・金: 18:00～23:00`). A block
//! with no qualifier at all applies to every non-closed day; that decision
//! belongs to the assembler, so the day set is left empty here.
//!
//! Close times that roll past midnight are stored in extended form: the
//! textual close hour being smaller than the open hour signals the
//! rollover (`17:00～02:00` closes at 26:00). Text that already uses
//! extended notation (24–29 hours) passes through unchanged.

use std::collections::BTreeSet;

use machimeshi_core::{DayKey, TimeRange};
use regex::Regex;

use crate::days::resolve_day_tokens;

pub(crate) struct TimeBlock {
    pub days: BTreeSet<DayKey>,
    pub ranges: Vec<TimeRange>,
}

/// Splits `text` into time blocks, preserving left-to-right order.
pub(crate) fn extract_blocks(text: &str) -> Vec<TimeBlock> {
    let paren_re = Regex::new(r"[（(]([^（）()]*)[）)]").expect("valid regex");

    // Cut the text into alternating plain runs and parenthetical qualifiers.
    // Times inside parentheses (e.g. last-order notes) are ignored; paren
    // content only ever contributes day information.
    let mut plains: Vec<(&str, Vec<TimeRange>)> = Vec::new();
    let mut qualifiers: Vec<&str> = Vec::new();
    let mut cursor = 0;
    for caps in paren_re.captures_iter(text) {
        let full = caps.get(0).expect("match has a full capture");
        let plain = &text[cursor..full.start()];
        plains.push((plain, parse_time_ranges(plain)));
        qualifiers.push(caps.get(1).map_or("", |m| m.as_str()));
        cursor = full.end();
    }
    let tail = &text[cursor..];
    plains.push((tail, parse_time_ranges(tail)));

    // Attach each day-bearing qualifier to the nearest time-bearing plain
    // run. A qualifier after its times claims the whole preceding run (all
    // ranges back to the previous parenthetical belong to it); a qualifier
    // before its times claims only the first segment of the following run.
    // Two qualifiers landing on one run union their days.
    let mut whole_claims: Vec<Option<BTreeSet<DayKey>>> = vec![None; plains.len()];
    let mut head_claims: Vec<Option<BTreeSet<DayKey>>> = vec![None; plains.len()];
    for (j, qualifier) in qualifiers.iter().enumerate() {
        let days = resolve_day_tokens(qualifier);
        if days.is_empty() {
            continue;
        }
        if !plains[j].1.is_empty() {
            whole_claims[j].get_or_insert_with(BTreeSet::new).extend(days);
        } else if !plains[j + 1].1.is_empty() {
            head_claims[j + 1]
                .get_or_insert_with(BTreeSet::new)
                .extend(days);
        } else {
            tracing::debug!(qualifier, "day qualifier has no adjacent time block");
        }
    }

    let mut blocks = Vec::new();
    for (j, (plain, ranges)) in plains.into_iter().enumerate() {
        if let Some(mut days) = whole_claims[j].take() {
            if let Some(head) = head_claims[j].take() {
                days.extend(head);
            }
            blocks.push(TimeBlock { days, ranges });
        } else if let Some(days) = head_claims[j].take() {
            let (head, rest) = split_first_segment(plain);
            let head_ranges = parse_time_ranges(head);
            if head_ranges.is_empty() {
                tracing::debug!(head, "qualified segment lost its time ranges");
            } else {
                blocks.push(TimeBlock {
                    days,
                    ranges: head_ranges,
                });
            }
            blocks.extend(unqualified_blocks(rest));
        } else {
            blocks.extend(unqualified_blocks(plain));
        }
    }
    blocks
}

/// Splits a run at its first segment delimiter. The head belongs to a
/// preceding parenthetical qualifier; the rest stands on its own.
fn split_first_segment(run: &str) -> (&str, &str) {
    match run.find(['、', '，', '■']) {
        Some(i) => {
            let delim_len = run[i..].chars().next().map_or(0, char::len_utf8);
            (&run[..i], &run[i + delim_len..])
        }
        None => (run, ""),
    }
}

/// Splits an unqualified run into `、`/`，`/`■` segments, resolving the day
/// prefix (text before the first digit) of each.
fn unqualified_blocks(run: &str) -> Vec<TimeBlock> {
    let mut blocks = Vec::new();
    for segment in run.split(['、', '，', '■']) {
        let ranges = parse_time_ranges(segment);
        if ranges.is_empty() {
            continue;
        }
        let prefix = segment
            .find(|c: char| c.is_ascii_digit())
            .map_or(segment, |i| &segment[..i]);
        blocks.push(TimeBlock {
            days: resolve_day_tokens(prefix),
            ranges,
        });
    }
    blocks
}

/// Extracts every `HH:MM～HH:MM` pair in `segment`, left to right.
/// Malformed matches are dropped and parsing continues.
fn parse_time_ranges(segment: &str) -> Vec<TimeRange> {
    let time_re =
        Regex::new(r"(\d{1,2}):(\d{2})\s*～\s*(\d{1,2}):(\d{2})").expect("valid regex");

    let mut ranges = Vec::new();
    for caps in time_re.captures_iter(segment) {
        let Some(range) = range_from_captures(&caps) else {
            tracing::debug!(text = &caps[0], "discarding malformed time range");
            continue;
        };
        ranges.push(range);
    }
    ranges
}

fn range_from_captures(caps: &regex::Captures<'_>) -> Option<TimeRange> {
    let open_hour: u16 = caps[1].parse().ok()?;
    let open_minute: u16 = caps[2].parse().ok()?;
    let close_hour: u16 = caps[3].parse().ok()?;
    let close_minute: u16 = caps[4].parse().ok()?;
    if open_hour >= 24 || open_minute >= 60 || close_minute >= 60 {
        return None;
    }

    let open = open_hour * 60 + open_minute;
    let mut close = close_hour * 60 + close_minute;
    // A smaller textual close hour signals a past-midnight close. Hours
    // already written in extended 24–29 notation pass through.
    if close_hour < open_hour {
        close += 24 * 60;
    }
    TimeRange::new(open, close).ok()
}

#[cfg(test)]
#[path = "timeblock_test.rs"]
mod timeblock_test;
