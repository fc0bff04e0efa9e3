//! The shop record as stored in the directory data file.

use serde::{Deserialize, Serialize};

use crate::hours::StructuredHours;

/// One shop entry from `shops.json`.
///
/// The enrichment pipeline only ever reads `hours` and writes
/// `hours_structured` and `search_keywords`; every other field is produced by
/// the scraping and geocoding collaborators and passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopRecord {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub url: String,
    #[serde(rename = "tabelogUrl", default, skip_serializing_if = "Option::is_none")]
    pub tabelog_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    /// Raw hours text as scraped; kept verbatim for display.
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub hours_structured: Option<StructuredHours>,
    #[serde(rename = "searchKeywords", default, skip_serializing_if = "Vec::is_empty")]
    pub search_keywords: Vec<String>,
}

impl ShopRecord {
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Keywords the name filter matches against: the lowercased name, the
    /// name with whitespace stripped, and each genre lowercased.
    #[must_use]
    pub fn build_search_keywords(&self) -> Vec<String> {
        let mut keywords = vec![
            self.name.to_lowercase(),
            self.name.split_whitespace().collect::<String>().to_lowercase(),
        ];
        keywords.extend(self.genre.iter().map(|g| g.to_lowercase()));
        keywords.dedup();
        keywords
    }

    pub fn refresh_search_keywords(&mut self) {
        self.search_keywords = self.build_search_keywords();
    }
}
