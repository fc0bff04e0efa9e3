//! Parse-coverage summary for the data file.

use std::path::Path;

use machimeshi_core::ShopRecord;

use crate::data;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct StatsSummary {
    pub total: usize,
    pub with_hours_text: usize,
    pub structured: usize,
    pub unparseable: usize,
    pub closed_labeled: usize,
    pub with_coordinates: usize,
}

pub(crate) fn run(data_file: &Path) -> anyhow::Result<()> {
    let shops = data::load_shops(data_file)?;
    let summary = summarize(&shops);

    println!("shops: {}", summary.total);
    println!("  with hours text:   {}", summary.with_hours_text);
    println!("  structured:        {}", summary.structured);
    println!("  unparseable:       {}", summary.unparseable);
    println!("  with closed label: {}", summary.closed_labeled);
    println!("  with coordinates:  {}", summary.with_coordinates);
    Ok(())
}

pub(crate) fn summarize(shops: &[ShopRecord]) -> StatsSummary {
    let mut summary = StatsSummary {
        total: shops.len(),
        ..StatsSummary::default()
    };
    for shop in shops {
        if shop.hours.as_deref().is_some_and(|h| !h.trim().is_empty()) {
            summary.with_hours_text += 1;
        }
        if let Some(structured) = &shop.hours_structured {
            if structured.is_unparseable() {
                summary.unparseable += 1;
            } else {
                summary.structured += 1;
            }
            if structured.closed.is_some() {
                summary.closed_labeled += 1;
            }
        }
        if shop.has_coordinates() {
            summary.with_coordinates += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use machimeshi_hours::parse_hours;

    fn shop(hours: Option<&str>, lat: Option<f64>) -> ShopRecord {
        let mut shop: ShopRecord = serde_json::from_value(serde_json::json!({
            "name": "shop",
            "url": "https://example.jp/shops/shop",
            "hours": hours,
            "lat": lat,
            "lng": lat,
        }))
        .unwrap();
        shop.hours_structured = parse_hours(hours);
        shop
    }

    #[test]
    fn counts_cover_every_bucket() {
        let shops = vec![
            shop(Some("11:00～15:00 定休日：火"), Some(33.26)),
            shop(Some("営業時間はお問い合わせください"), None),
            shop(None, None),
        ];
        let summary = summarize(&shops);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.with_hours_text, 2);
        assert_eq!(summary.structured, 1);
        assert_eq!(summary.unparseable, 1);
        assert_eq!(summary.closed_labeled, 1);
        assert_eq!(summary.with_coordinates, 1);
    }
}
