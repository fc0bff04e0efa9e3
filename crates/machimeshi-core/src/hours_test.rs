use super::*;

fn range(open: u16, close: u16) -> TimeRange {
    TimeRange::new(open, close).unwrap()
}

// -----------------------------------------------------------------------
// TimeRange
// -----------------------------------------------------------------------

#[test]
fn rejects_open_past_midnight() {
    assert!(TimeRange::new(1440, 1500).is_err());
}

#[test]
fn rejects_close_not_after_open() {
    assert!(TimeRange::new(600, 600).is_err());
    assert!(TimeRange::new(600, 540).is_err());
}

#[test]
fn rejects_close_past_ceiling() {
    assert!(TimeRange::new(600, 1801).is_err());
}

#[test]
fn accepts_extended_close() {
    let r = range(1020, 1560);
    assert_eq!(r.open(), 1020);
    assert_eq!(r.close(), 1560);
}

#[test]
fn contains_is_half_open() {
    let r = range(600, 1140);
    assert!(r.contains(600));
    assert!(r.contains(1139));
    assert!(!r.contains(1140));
    assert!(!r.contains(599));
}

#[test]
fn displays_extended_form() {
    assert_eq!(range(1020, 1560).to_string(), "17:00～26:00");
    assert_eq!(range(600, 1140).to_string(), "10:00～19:00");
}

#[test]
fn parses_persisted_form() {
    let r: TimeRange = "17:00～26:00".parse().unwrap();
    assert_eq!((r.open(), r.close()), (1020, 1560));
}

#[test]
fn rejects_malformed_persisted_form() {
    assert!("17時～23時".parse::<TimeRange>().is_err());
    assert!("17:00-23:00".parse::<TimeRange>().is_err());
    assert!("17:99～23:00".parse::<TimeRange>().is_err());
}

// -----------------------------------------------------------------------
// DaySchedule
// -----------------------------------------------------------------------

#[test]
fn append_concatenates_ranges() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Mon, [range(660, 840)]);
    schedule.append(DayKey::Mon, [range(1020, 1320)]);
    assert_eq!(schedule.get(DayKey::Mon).unwrap().len(), 2);
}

#[test]
fn close_day_overrides_ranges() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Sun, [range(1020, 1380)]);
    schedule.close_day(DayKey::Sun);
    assert!(schedule.get(DayKey::Sun).is_none());
}

#[test]
fn coalesce_sorts_and_merges_overlaps() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Fri, [range(1020, 1320), range(660, 840)]);
    schedule.append(DayKey::Fri, [range(1020, 1320), range(1200, 1380)]);
    schedule.coalesce();
    let ranges = schedule.get(DayKey::Fri).unwrap();
    assert_eq!(ranges, &[range(660, 840), range(1020, 1380)]);
}

#[test]
fn coalesce_keeps_abutting_windows_separate() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Sat, [range(660, 840), range(840, 1020)]);
    schedule.coalesce();
    assert_eq!(schedule.get(DayKey::Sat).unwrap().len(), 2);
}

#[test]
fn first_scheduled_day_uses_canonical_order() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Holiday, [range(600, 900)]);
    schedule.append(DayKey::Wed, [range(600, 900)]);
    assert_eq!(schedule.first_scheduled_day(), Some(DayKey::Wed));
}

// -----------------------------------------------------------------------
// Persisted layout
// -----------------------------------------------------------------------

#[test]
fn serializes_to_the_data_file_shape() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Mon, [range(660, 840), range(1020, 1320)]);
    let hours = StructuredHours::new(
        "11:00～14:00 / 17:00～22:00（月）",
        schedule,
        Some("日".to_string()),
        vec![DayKey::Sun],
    );

    let value = serde_json::to_value(&hours).unwrap();
    assert_eq!(value["text"], "11:00～14:00 / 17:00～22:00（月）");
    assert_eq!(value["parsed"]["mon"], "11:00～14:00 / 17:00～22:00");
    assert_eq!(value["parsed"]["tue"], serde_json::Value::Null);
    assert_eq!(value["parsed"]["sun"], serde_json::Value::Null);
    assert_eq!(value["closed"], "日");
    // closed_days is a parse-time artifact, never persisted.
    assert!(value.get("closed_days").is_none());
}

#[test]
fn omits_closed_when_absent() {
    let hours = StructuredHours::new("10:00～19:00", DaySchedule::default(), None, vec![]);
    let value = serde_json::to_value(&hours).unwrap();
    assert!(value.get("closed").is_none());
}

#[test]
fn round_trips_extended_hours() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Fri, [range(1020, 1560)]);
    let hours = StructuredHours::new("17:00～26:00", schedule, None, vec![]);

    let json = serde_json::to_string(&hours).unwrap();
    let back: StructuredHours = serde_json::from_str(&json).unwrap();
    assert_eq!(back.schedule.get(DayKey::Fri), hours.schedule.get(DayKey::Fri));
    assert_eq!(back.text, hours.text);
}

#[test]
fn new_enforces_closure_wins() {
    let mut schedule = DaySchedule::default();
    schedule.append(DayKey::Sun, [range(1020, 1380)]);
    let hours = StructuredHours::new("17:00～23:00 定休日：日", schedule, Some("日".to_string()), vec![DayKey::Sun]);
    assert!(hours.schedule.get(DayKey::Sun).is_none());
}

#[test]
fn unparseable_means_empty_and_unlabeled() {
    let empty = StructuredHours::new("営業時間は店舗にお問い合わせください", DaySchedule::default(), None, vec![]);
    assert!(empty.is_unparseable());

    let labeled = StructuredHours::new("不定休", DaySchedule::default(), Some("不定休".to_string()), vec![]);
    assert!(!labeled.is_unparseable());
}
