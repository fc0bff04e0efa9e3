//! Hours enrichment: re-parse every shop's raw hours text and store the
//! structured result back on the record.
//!
//! Re-parsing is idempotent, so running over an already-enriched file only
//! rewrites records whose persisted parse actually differs.

use std::path::Path;

use machimeshi_core::{ShopRecord, StructuredHours};
use machimeshi_hours::parse_hours;

use crate::data;

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct EnrichOutcome {
    /// Shops that gained a structured parse for the first time.
    pub created: usize,
    /// Shops whose previously unparseable hours now parse.
    pub fixed: usize,
    /// Shops whose existing parse changed.
    pub updated: usize,
    /// Shops whose hours text vanished, clearing the stale parse.
    pub cleared: usize,
    /// Shops whose hours text yielded no recognizable tokens.
    pub unparsed: usize,
}

pub(crate) fn run(data_file: &Path, limit: Option<usize>, dry_run: bool) -> anyhow::Result<()> {
    let mut shops = data::load_shops(data_file)?;
    if let Some(limit) = limit {
        println!("processing first {limit} of {} shops", shops.len());
    }

    let outcome = enrich_shops(&mut shops, limit);
    println!(
        "enrich: {} created, {} fixed, {} updated, {} cleared, {} unparseable",
        outcome.created, outcome.fixed, outcome.updated, outcome.cleared, outcome.unparsed
    );

    if dry_run {
        println!("dry-run: no changes saved");
        return Ok(());
    }
    data::save_shops(data_file, &shops)
}

/// Re-parses hours for the first `limit` shops (all when `None`).
pub(crate) fn enrich_shops(shops: &mut [ShopRecord], limit: Option<usize>) -> EnrichOutcome {
    let mut outcome = EnrichOutcome::default();
    let count = limit.unwrap_or(shops.len());

    for shop in shops.iter_mut().take(count) {
        let parsed = parse_hours(shop.hours.as_deref());

        match (&shop.hours_structured, &parsed) {
            (None, None) => {}
            (Some(_), None) => {
                outcome.cleared += 1;
                tracing::debug!(shop = %shop.name, "hours text removed, clearing stale parse");
            }
            (None, Some(_)) => {
                outcome.created += 1;
                tracing::debug!(shop = %shop.name, "structured hours created");
            }
            (Some(old), Some(new)) => {
                if !persisted_eq(old, new) {
                    if old.is_unparseable() && !new.is_unparseable() {
                        outcome.fixed += 1;
                    } else {
                        outcome.updated += 1;
                    }
                    tracing::debug!(shop = %shop.name, "structured hours changed");
                }
            }
        }

        if parsed.as_ref().is_some_and(StructuredHours::is_unparseable) {
            outcome.unparsed += 1;
            tracing::warn!(shop = %shop.name, hours = ?shop.hours, "hours text did not parse");
        }

        shop.hours_structured = parsed;
        shop.refresh_search_keywords();
    }

    outcome
}

/// Compares the persisted forms, so the parse-time-only `closed_days` field
/// never forces a rewrite of records loaded from disk.
fn persisted_eq(a: &StructuredHours, b: &StructuredHours) -> bool {
    match (serde_json::to_value(a), serde_json::to_value(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
