//! Shop filtering rules.

use machimeshi_core::{DayKey, ShopRecord};
use machimeshi_hours::{is_open, TimeOfDay};

/// Active filter set. Unset fields pass everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Free-text name query. Whitespace-separated terms must all match
    /// (AND), each against the lowercased name or any search keyword.
    pub name: Option<String>,
    /// Genre labels, OR-combined.
    pub genres: Vec<String>,
    pub day: Option<DayKey>,
    pub time: Option<TimeOfDay>,
}

impl SearchFilters {
    /// Whether one shop passes every active filter.
    #[must_use]
    pub fn matches(&self, shop: &ShopRecord) -> bool {
        self.matches_name(shop) && self.matches_genre(shop) && self.matches_hours(shop)
    }

    fn matches_name(&self, shop: &ShopRecord) -> bool {
        let Some(query) = self.name.as_deref() else {
            return true;
        };
        let name = shop.name.to_lowercase();
        query.split_whitespace().all(|term| {
            let term = term.to_lowercase();
            name.contains(&term) || shop.search_keywords.iter().any(|k| k.contains(&term))
        })
    }

    fn matches_genre(&self, shop: &ShopRecord) -> bool {
        if self.genres.is_empty() {
            return true;
        }
        self.genres.iter().any(|genre| shop.genre.contains(genre))
    }

    fn matches_hours(&self, shop: &ShopRecord) -> bool {
        if self.day.is_none() && self.time.is_none() {
            return true;
        }
        // Shops with no structured hours stay visible: hiding over missing
        // data loses more than over-showing.
        match &shop.hours_structured {
            None => true,
            Some(hours) => is_open(hours, self.day, self.time),
        }
    }
}

/// Applies `filters` over `shops`, preserving order.
#[must_use]
pub fn search_shops<'a>(shops: &'a [ShopRecord], filters: &SearchFilters) -> Vec<&'a ShopRecord> {
    shops.iter().filter(|shop| filters.matches(shop)).collect()
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;
