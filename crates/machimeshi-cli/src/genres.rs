//! Genre cleanup over the data file.

use std::path::Path;

use machimeshi_core::genre::{clean_genres, infer_genres, DEFAULT_EXCLUDED_GENRES};
use machimeshi_core::ShopRecord;

use crate::data;

pub(crate) fn run(data_file: &Path, excluded: &[String], dry_run: bool) -> anyhow::Result<()> {
    let mut shops = data::load_shops(data_file)?;
    let changed = clean_shop_genres(&mut shops, excluded);
    println!("clean-genres: {changed} of {} shops changed", shops.len());

    if dry_run {
        println!("dry-run: no changes saved");
        return Ok(());
    }
    data::save_shops(data_file, &shops)
}

/// Cleans every shop's genre list; shops left with no genres get inferred
/// ones from their name, URL, and category. Returns how many shops changed.
pub(crate) fn clean_shop_genres(shops: &mut [ShopRecord], extra_excluded: &[String]) -> usize {
    let excluded: Vec<&str> = DEFAULT_EXCLUDED_GENRES
        .iter()
        .copied()
        .chain(extra_excluded.iter().map(String::as_str))
        .collect();

    let mut changed = 0;
    for shop in &mut *shops {
        let mut genres = clean_genres(&shop.genre, &excluded);
        if genres.is_empty() {
            genres = infer_genres(&shop.name, &shop.url, shop.category.as_deref());
        }
        if genres != shop.genre {
            tracing::debug!(shop = %shop.name, before = shop.genre.len(), after = genres.len(), "genres changed");
            shop.genre = genres;
            shop.refresh_search_keywords();
            changed += 1;
        }
    }
    changed
}
