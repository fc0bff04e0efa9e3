use machimeshi_core::{DayKey, TimeRange};

use super::{extract_blocks, TimeBlock};

fn range(open: u16, close: u16) -> TimeRange {
    TimeRange::new(open, close).unwrap()
}

fn days(block: &TimeBlock) -> Vec<DayKey> {
    block.days.iter().copied().collect()
}

#[test]
fn bare_range_has_empty_day_set() {
    let blocks = extract_blocks("11:00～14:00");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].days.is_empty());
    assert_eq!(blocks[0].ranges, vec![range(660, 840)]);
}

#[test]
fn slash_separated_ranges_share_one_block() {
    let blocks = extract_blocks("11:00～14:00 / 17:00～22:00");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].ranges, vec![range(660, 840), range(1020, 1320)]);
}

#[test]
fn comma_separated_ranges_keep_their_own_day_prefixes() {
    let blocks = extract_blocks("月～金 11:00～14:00、土 11:00～15:00");
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        days(&blocks[0]),
        vec![DayKey::Mon, DayKey::Tue, DayKey::Wed, DayKey::Thu, DayKey::Fri]
    );
    assert_eq!(blocks[0].ranges, vec![range(660, 840)]);
    assert_eq!(days(&blocks[1]), vec![DayKey::Sat]);
    assert_eq!(blocks[1].ranges, vec![range(660, 900)]);
}

#[test]
fn day_prefix_with_interpunct_list() {
    let blocks = extract_blocks("月・水・金: 18:00～23:00");
    assert_eq!(blocks.len(), 1);
    assert_eq!(days(&blocks[0]), vec![DayKey::Mon, DayKey::Wed, DayKey::Fri]);
    assert_eq!(blocks[0].ranges, vec![range(1080, 1380)]);
}

#[test]
fn qualifier_after_times_claims_preceding_run() {
    let blocks = extract_blocks("17:00～23:00（土・日）");
    assert_eq!(blocks.len(), 1);
    assert_eq!(days(&blocks[0]), vec![DayKey::Sat, DayKey::Sun]);
}

#[test]
fn qualifier_before_times_claims_following_segment() {
    let blocks = extract_blocks("（土・日）17:00～23:00");
    assert_eq!(blocks.len(), 1);
    assert_eq!(days(&blocks[0]), vec![DayKey::Sat, DayKey::Sun]);
    assert_eq!(blocks[0].ranges, vec![range(1020, 1380)]);
}

#[test]
fn leading_qualifier_does_not_leak_past_segment_boundary() {
    let blocks = extract_blocks("（土・日）17:00～23:00、月～金は11:00～14:00");
    assert_eq!(blocks.len(), 2);
    assert_eq!(days(&blocks[0]), vec![DayKey::Sat, DayKey::Sun]);
    assert_eq!(
        days(&blocks[1]),
        vec![DayKey::Mon, DayKey::Tue, DayKey::Wed, DayKey::Thu, DayKey::Fri]
    );
}

#[test]
fn two_qualified_blocks_stay_separate() {
    let blocks = extract_blocks("11:00～14:00（月～金）、17:00～23:00（金・土）");
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        days(&blocks[0]),
        vec![DayKey::Mon, DayKey::Tue, DayKey::Wed, DayKey::Thu, DayKey::Fri]
    );
    assert_eq!(days(&blocks[1]), vec![DayKey::Fri, DayKey::Sat]);
}

#[test]
fn ascii_parentheses_work_too() {
    let blocks = extract_blocks("(土)12:00～15:00");
    assert_eq!(blocks.len(), 1);
    assert_eq!(days(&blocks[0]), vec![DayKey::Sat]);
}

#[test]
fn overnight_close_extends_past_midnight() {
    let blocks = extract_blocks("17:00～02:00");
    assert_eq!(blocks[0].ranges, vec![range(1020, 1560)]);
}

#[test]
fn extended_notation_passes_through() {
    let blocks = extract_blocks("17:00～26:00");
    assert_eq!(blocks[0].ranges, vec![range(1020, 1560)]);
}

#[test]
fn malformed_minute_field_is_discarded() {
    // 17:75 is not a clock time; the block survives with the valid range.
    let blocks = extract_blocks("17:75～23:00、11:00～14:00");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].ranges, vec![range(660, 840)]);
}

#[test]
fn close_past_the_ceiling_is_discarded() {
    // 14:00～13:00 would roll over to 37:00 — nonsense, dropped.
    assert!(extract_blocks("14:00～13:00").is_empty());
}

#[test]
fn times_inside_parentheses_are_ignored() {
    // Last-order notes contribute no ranges of their own.
    let blocks = extract_blocks("17:00～23:00（L.O.22:30）");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].ranges, vec![range(1020, 1380)]);
}

#[test]
fn no_times_yields_no_blocks() {
    assert!(extract_blocks("営業中").is_empty());
    assert!(extract_blocks("").is_empty());
}
