//! Genre cleanup and inference.
//!
//! Scraped genre lists pick up stray tokens (area names, currency marks,
//! bare separators). `clean_genres` drops anything matching an exclusion
//! list and dedupes; `infer_genres` recovers genres from the shop name and
//! URL when the scrape produced none.

/// Tokens that are never genres: separator and price noise from listing
/// pages. Callers append their own municipality-specific exclusions (station
/// and district names) on top.
pub const DEFAULT_EXCLUDED_GENRES: &[&str] = &["×", "-", "￥", "～"];

/// Keyword → canonical genre table, matched against the lowercased
/// name + URL. Romanized and Japanese spellings both map to one label.
const GENRE_KEYWORDS: &[(&str, &str)] = &[
    ("yakiniku", "焼肉"),
    ("焼肉", "焼肉"),
    ("sushi", "寿司"),
    ("鮨", "寿司"),
    ("すし", "寿司"),
    ("ramen", "ラーメン"),
    ("らぁめん", "ラーメン"),
    ("ラーメン", "ラーメン"),
    ("izakaya", "居酒屋"),
    ("居酒屋", "居酒屋"),
    ("cafe", "カフェ"),
    ("カフェ", "カフェ"),
    ("bar", "バー"),
    ("バー", "バー"),
    ("lounge", "バー"),
    ("pub", "バー"),
    ("udon", "うどん"),
    ("うどん", "うどん"),
    ("tempura", "天ぷら"),
    ("天ぷら", "天ぷら"),
    ("yakitori", "焼鳥"),
    ("焼鳥", "焼鳥"),
    ("やきとり", "焼鳥"),
    ("unagi", "うなぎ"),
    ("うなぎ", "うなぎ"),
    ("韓国", "韓国料理"),
    ("korean", "韓国料理"),
    ("中華", "中華料理"),
    ("中国料理", "中華料理"),
    ("海鮮", "海鮮料理"),
    ("和食", "和食"),
    ("洋食", "洋食"),
    ("snack", "スナック"),
    ("スナック", "スナック"),
];

/// Drops genres containing any excluded token, then dedupes while keeping
/// the original order.
#[must_use]
pub fn clean_genres(genres: &[String], excluded: &[&str]) -> Vec<String> {
    let mut seen = Vec::new();
    for genre in genres {
        if excluded.iter().any(|pattern| genre.contains(pattern)) {
            continue;
        }
        if !seen.contains(genre) {
            seen.push(genre.clone());
        }
    }
    seen
}

/// Infers genres from a shop's category field, name, and URL.
///
/// The category field (a comma-separated scrape artifact) contributes its
/// entries directly; the keyword table contributes canonical labels matched
/// in the name or URL.
#[must_use]
pub fn infer_genres(name: &str, url: &str, category: Option<&str>) -> Vec<String> {
    let mut genres = Vec::new();

    if let Some(category) = category {
        for part in category.split(',') {
            let part = part.trim();
            if !part.is_empty() && !genres.iter().any(|g| g == part) {
                genres.push(part.to_string());
            }
        }
    }

    let haystack = format!("{name} {url}").to_lowercase();
    for (keyword, label) in GENRE_KEYWORDS {
        if haystack.contains(keyword) && !genres.iter().any(|g| g == label) {
            genres.push((*label).to_string());
        }
    }

    genres
}
