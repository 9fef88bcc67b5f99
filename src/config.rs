//! TOML configuration for the simulation context.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/blockforge.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimConfig {
    /// JSON creative catalog to load, if any.
    pub creative_items: Option<PathBuf>,
    /// Plugin attributes registered after the built-ins.
    pub attributes: Vec<AttributeConfig>,
}

/// One plugin-defined attribute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttributeConfig {
    /// Attribute id (`namespace:path`).
    pub id: String,
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
    /// Starting value.
    pub default: f32,
    /// Whether changes are sent to clients.
    #[serde(default = "default_syncable")]
    pub syncable: bool,
}

fn default_syncable() -> bool {
    true
}

impl SimConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SimConfig::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("Config not found at {}. Using defaults", path.display());
                SimConfig::default()
            }
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                SimConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plugin_attributes() {
        let cfg: SimConfig = toml::from_str(
            r#"
            creative_items = "data/creative.json"

            [[attributes]]
            id = "plugin:mana"
            min = 0.0
            max = 100.0
            default = 50.0

            [[attributes]]
            id = "plugin:heat"
            min = -10.0
            max = 10.0
            default = 0.0
            syncable = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.creative_items, Some(PathBuf::from("data/creative.json")));
        assert_eq!(cfg.attributes.len(), 2);
        assert!(cfg.attributes[0].syncable);
        assert!(!cfg.attributes[1].syncable);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: SimConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn missing_or_malformed_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            SimConfig::load_from_path(&dir.path().join("missing.toml")),
            SimConfig::default()
        );

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "attributes = 7").unwrap();
        assert_eq!(SimConfig::load_from_path(&bad), SimConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/blockforge.toml");
        let cfg = SimConfig {
            attributes: vec![AttributeConfig {
                id: "plugin:mana".into(),
                min: 0.0,
                max: 100.0,
                default: 50.0,
                syncable: true,
            }],
            creative_items: None,
        };
        cfg.save_to_path(&path).unwrap();
        assert_eq!(SimConfig::load_from_path(&path), cfg);
    }
}
