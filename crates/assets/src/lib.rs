#![warn(missing_docs)]
//! Data-file schema + loaders for static catalogs.

mod creative;
mod loader;

pub use creative::{CreativeCatalog, CreativeItem};
pub use loader::{catalog_from_file, catalog_from_str};

use serde::Deserialize;
use thiserror::Error;

/// Creative item entry as written in the data file.
#[derive(Debug, Deserialize)]
pub struct CreativeItemDefinition {
    /// Item id (e.g., "minecraft:stone").
    pub id: String,
    /// Damage/variant value.
    #[serde(default)]
    pub damage: u16,
    /// Whether the item has durability.
    #[serde(default)]
    pub durable: bool,
}

/// Errors emitted during catalog loading.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading data files.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON string into a list of creative item definitions.
pub fn load_creative_items_from_str(input: &str) -> Result<Vec<CreativeItemDefinition>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
