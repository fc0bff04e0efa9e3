//! Data-file access shared by the pipeline commands.

use std::fs;
use std::path::Path;

use anyhow::Context;
use machimeshi_core::ShopRecord;

pub(crate) fn load_shops(path: &Path) -> anyhow::Result<Vec<ShopRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading data file {}", path.display()))?;
    let shops: Vec<ShopRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing data file {}", path.display()))?;
    Ok(shops)
}

pub(crate) fn save_shops(path: &Path, shops: &[ShopRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(shops).context("serializing shop records")?;
    fs::write(path, json).with_context(|| format!("writing data file {}", path.display()))?;
    Ok(())
}
