//! blockforge - entity attribute and block break-time primitives
//!
//! [`SimContext`] owns every process-wide catalog. Build it once at startup
//! and pass it by reference to the systems that need it.

pub mod config;

use anyhow::{Context, Result};
use blockforge_assets::{catalog_from_file, CreativeCatalog};
use blockforge_core::{AttributeInstance, AttributeRegistry};
use blockforge_world::BlockBreakRegistry;
use tracing::{info, warn};

pub use config::{AttributeConfig, SimConfig};

/// Catalogs shared by the simulation.
#[derive(Debug, Clone, Default)]
pub struct SimContext {
    /// Attribute definitions.
    pub attributes: AttributeRegistry,
    /// Break info per block type.
    pub blocks: BlockBreakRegistry,
    /// Creative inventory entries.
    pub creative: CreativeCatalog,
}

impl SimContext {
    /// Context with built-in attributes, vanilla blocks and an empty catalog.
    pub fn new() -> Self {
        Self {
            attributes: AttributeRegistry::with_builtins(),
            blocks: BlockBreakRegistry::new(),
            creative: CreativeCatalog::new(),
        }
    }

    /// Build a context and apply `config` on top of the built-ins.
    ///
    /// Malformed plugin attributes and unreadable catalogs are errors.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let mut ctx = Self::new();

        for attr in &config.attributes {
            if ctx.attributes.contains(&attr.id) {
                warn!(id = %attr.id, "plugin attribute overrides an existing definition");
            }
            ctx.attributes
                .register(&attr.id, attr.min, attr.max, attr.default, attr.syncable)
                .with_context(|| format!("invalid attribute {}", attr.id))?;
        }

        if let Some(path) = &config.creative_items {
            ctx.creative = catalog_from_file(path)
                .with_context(|| format!("failed to load creative items from {}", path.display()))?;
        }

        info!(
            attributes = ctx.attributes.len(),
            creative_items = ctx.creative.len(),
            "simulation context ready"
        );
        Ok(ctx)
    }

    /// Fresh attribute instance for an entity.
    pub fn attribute(&self, id: &str) -> Option<AttributeInstance> {
        self.attributes.instantiate(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_attributes_are_registered() {
        let config = SimConfig {
            attributes: vec![AttributeConfig {
                id: "plugin:mana".into(),
                min: 0.0,
                max: 100.0,
                default: 50.0,
                syncable: true,
            }],
            creative_items: None,
        };
        let ctx = SimContext::from_config(&config).unwrap();
        let mana = ctx.attribute("plugin:mana").unwrap();
        assert_eq!(mana.value(), 50.0);
        assert!(ctx.attribute("minecraft:health").is_some());
    }

    #[test]
    fn plugin_attributes_can_override_builtins() {
        let config = SimConfig {
            attributes: vec![AttributeConfig {
                id: "minecraft:health".into(),
                min: 0.0,
                max: 40.0,
                default: 40.0,
                syncable: true,
            }],
            creative_items: None,
        };
        let ctx = SimContext::from_config(&config).unwrap();
        assert_eq!(ctx.attribute("health").unwrap().max_value(), 40.0);
    }

    #[test]
    fn invalid_plugin_attribute_is_an_error() {
        let config = SimConfig {
            attributes: vec![AttributeConfig {
                id: "plugin:mana".into(),
                min: 10.0,
                max: 0.0,
                default: 5.0,
                syncable: true,
            }],
            creative_items: None,
        };
        let err = SimContext::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("plugin:mana"));
    }
}
