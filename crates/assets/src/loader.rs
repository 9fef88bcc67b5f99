use std::fs;
use std::path::Path;

use blockforge_core::RegistryKey;
use tracing::debug;

use crate::{AssetError, CreativeCatalog, CreativeItem};

/// Load a creative catalog from the provided JSON file path.
pub fn catalog_from_file(path: &Path) -> Result<CreativeCatalog, AssetError> {
    let data = fs::read_to_string(path)?;
    catalog_from_str(&data)
}

/// Load a creative catalog from an in-memory JSON string.
///
/// Entries whose id is not a valid registry key are skipped.
pub fn catalog_from_str(input: &str) -> Result<CreativeCatalog, AssetError> {
    let defs = crate::load_creative_items_from_str(input)?;
    let mut catalog = CreativeCatalog::new();
    for def in defs {
        match RegistryKey::parse(&def.id) {
            Ok(id) => {
                catalog.add(CreativeItem::new(id, def.damage, def.durable));
            }
            Err(err) => debug!(id = %def.id, %err, "skipping unknown creative item"),
        }
    }
    Ok(catalog)
}
