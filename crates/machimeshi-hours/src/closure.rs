//! Extraction of explicit closing-day declarations.
//!
//! A 定休日 clause is authoritative: days it names end up `None` in the
//! final schedule no matter what the time blocks said. The clause is also
//! cut out of the text before time-block parsing so its weekday glyphs are
//! not misread as opening-hours qualifiers.

use std::collections::BTreeSet;

use machimeshi_core::DayKey;
use regex::Regex;

use crate::days::resolve_day_tokens;

/// Result of scanning the full normalized text for a closure declaration.
pub(crate) struct ClosureClause {
    /// Captured closure label, e.g. `日`, `月曜日`, `不定休`.
    pub label: Option<String>,
    /// Day keys the label resolves to. Empty for 不定休/無休.
    pub days: BTreeSet<DayKey>,
    /// The input with the closure clause removed.
    pub remainder: String,
}

/// Clause patterns in priority order: colon form, day-prefix form, marker
/// followed by bare day glyphs, day-suffix form. The capture is the
/// closed-days text.
const CLOSURE_PATTERNS: &[&str] = &[
    r"定休日:\s*([^\s、，■]+)",
    r"休業日:\s*([^\s、，■]+)",
    r"([月火水木金土日祝・･～]+)\s*曜?日?\s*定休日?",
    r"定休日\s*([月火水木金土日祝・･～]+)",
    r"([月火水木金土日祝・･～]+)\s*曜?日?\s*休み?",
];

pub(crate) fn extract_closure(text: &str) -> ClosureClause {
    for pattern in CLOSURE_PATTERNS {
        let re = Regex::new(pattern).expect("valid regex");
        let Some(caps) = re.captures(text) else {
            continue;
        };
        let full = caps.get(0).expect("match has a full capture");
        let captured = caps.get(1).map_or("", |m| m.as_str());

        let mut remainder = String::with_capacity(text.len());
        remainder.push_str(&text[..full.start()]);
        remainder.push_str(&text[full.end()..]);

        // 不定休 (irregular) and 無休 (no closing day) stay literal labels;
        // there is no day set to resolve. 無休 wins when both appear.
        if captured.contains("無休") {
            tracing::debug!(label = "無休", "closure clause is a literal label");
            return ClosureClause {
                label: Some("無休".to_string()),
                days: BTreeSet::new(),
                remainder,
            };
        }
        if captured.contains("不定休") {
            tracing::debug!(label = "不定休", "closure clause is a literal label");
            return ClosureClause {
                label: Some("不定休".to_string()),
                days: BTreeSet::new(),
                remainder,
            };
        }

        let days = resolve_day_tokens(captured);
        tracing::debug!(label = captured, days = days.len(), "resolved closure clause");
        return ClosureClause {
            label: Some(captured.to_string()),
            days,
            remainder,
        };
    }

    // No clause pattern, but a bare irregular/no-closure token still counts
    // as a label so the schedule is not reported unparseable.
    for token in ["無休", "不定休"] {
        if text.contains(token) {
            return ClosureClause {
                label: Some((*token).to_string()),
                days: BTreeSet::new(),
                remainder: text.replace(token, ""),
            };
        }
    }

    ClosureClause {
        label: None,
        days: BTreeSet::new(),
        remainder: text.to_string(),
    }
}
