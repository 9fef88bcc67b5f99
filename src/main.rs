//! blockforge - headless bootstrap
//!
//! Loads configuration, builds the simulation context and reports what was
//! registered.

use anyhow::Result;
use blockforge::{SimConfig, SimContext};
use blockforge_core::{attribute_ids, HeldItem, ToolKind, ToolTier};
use blockforge_world::BLOCK_STONE;
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting blockforge v{}", env!("CARGO_PKG_VERSION"));

    let config = match config_path_from_args(env::args().skip(1)) {
        Some(path) => SimConfig::load_from_path(&path),
        None => SimConfig::load(),
    };
    let ctx = SimContext::from_config(&config)?;

    for def in ctx.attributes.iter() {
        info!(
            id = %def.id(),
            min = def.min_value(),
            max = def.max_value(),
            default = def.default_value(),
            syncable = def.is_syncable(),
            "attribute"
        );
    }

    if let Some(health) = ctx.attribute(attribute_ids::HEALTH) {
        info!(value = health.value(), dirty = health.is_dirty(), "fresh health instance");
    }

    let stone = ctx.blocks.get(BLOCK_STONE);
    for tool in [
        HeldItem::Hand,
        HeldItem::tool(ToolKind::Pickaxe, ToolTier::Wood),
        HeldItem::tool(ToolKind::Pickaxe, ToolTier::Diamond),
    ] {
        info!(?tool, seconds = stone.break_time(&tool)?, "stone break time");
    }

    Ok(())
}

fn config_path_from_args<I>(mut args: I) -> Option<PathBuf>
where
    I: Iterator<Item = String>,
{
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
