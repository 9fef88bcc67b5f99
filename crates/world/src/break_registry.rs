//! Per-block-type break info table.

use std::sync::Arc;

use blockforge_core::{BlockToolType, ToolTier};
use tracing::debug;

use crate::blocks::*;
use crate::break_info::{BreakInfo, BreakInfoOptions, INDESTRUCTIBLE_BLAST_RESISTANCE};

/// Number of block ids covered by the table.
const TABLE_SIZE: usize = 256;

/// Shared break info for every block type.
///
/// Entries are built once and handed out as `Arc`s so any number of readers
/// can hold them across threads.
#[derive(Debug, Clone)]
pub struct BlockBreakRegistry {
    entries: Vec<Arc<BreakInfo>>,
}

impl BlockBreakRegistry {
    /// Create a registry with vanilla break info.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: vec![Arc::new(BreakInfo::new(1.0, BlockToolType::NONE, 0)); TABLE_SIZE],
        };

        let wood = ToolTier::Wood.harvest_tier();
        let stone_tier = ToolTier::Stone.harvest_tier();
        let iron = ToolTier::Iron.harvest_tier();
        let diamond = ToolTier::Diamond.harvest_tier();
        let pickaxe = BlockToolType::PICKAXE;
        let shovel = BlockToolType::SHOVEL;
        let axe = BlockToolType::AXE;
        let shears = BlockToolType::SHEARS;

        registry.set(BLOCK_AIR, BreakInfo::indestructible(0.0));
        registry.set(BLOCK_STONE, with_blast(1.5, pickaxe, wood, 30.0));
        registry.set(BLOCK_GRASS, BreakInfo::new(0.6, shovel, 0));
        registry.set(BLOCK_DIRT, BreakInfo::new(0.5, shovel, 0));
        registry.set(BLOCK_COBBLESTONE, with_blast(2.0, pickaxe, wood, 30.0));
        registry.set(BLOCK_OAK_PLANKS, with_blast(2.0, axe, 0, 15.0));
        registry.set(
            BLOCK_BEDROCK,
            BreakInfo::indestructible(INDESTRUCTIBLE_BLAST_RESISTANCE),
        );
        registry.set(BLOCK_SAND, BreakInfo::new(0.5, shovel, 0));
        registry.set(BLOCK_GRAVEL, BreakInfo::new(0.6, shovel, 0));
        registry.set(BLOCK_GOLD_ORE, BreakInfo::new(3.0, pickaxe, iron));
        registry.set(BLOCK_IRON_ORE, BreakInfo::new(3.0, pickaxe, stone_tier));
        registry.set(BLOCK_COAL_ORE, BreakInfo::new(3.0, pickaxe, wood));
        registry.set(BLOCK_OAK_LOG, BreakInfo::new(2.0, axe, 0));
        registry.set(BLOCK_OAK_LEAVES, BreakInfo::new(0.2, shears, 0));
        registry.set(BLOCK_GLASS, BreakInfo::new(0.3, BlockToolType::NONE, 0));
        registry.set(
            BLOCK_COBWEB,
            BreakInfo::new(4.0, BlockToolType::SWORD | shears, 1),
        );
        registry.set(BLOCK_TALL_GRASS, BreakInfo::instant(shears, 1));
        registry.set(BLOCK_WOOL, BreakInfo::new(0.8, shears, 0));
        registry.set(BLOCK_OBSIDIAN, with_blast(35.0, pickaxe, diamond, 6000.0));
        registry.set(BLOCK_TORCH, BreakInfo::instant(BlockToolType::NONE, 0));
        registry.set(BLOCK_DIAMOND_ORE, BreakInfo::new(3.0, pickaxe, iron));
        registry.set(BLOCK_SNOW_LAYER, BreakInfo::new(0.1, shovel, wood));
        registry.set(BLOCK_ICE, BreakInfo::new(0.5, pickaxe, 0));
        registry.set(BLOCK_CLAY, BreakInfo::new(0.6, shovel, 0));
        registry.set(
            BLOCK_BARRIER,
            BreakInfo::indestructible(INDESTRUCTIBLE_BLAST_RESISTANCE),
        );

        debug!(entries = registry.entries.len(), "block break table ready");
        registry
    }

    /// Replace the break info for `block_id`. Returns false if the id is out of range.
    pub fn set(&mut self, block_id: BlockId, info: BreakInfo) -> bool {
        match self.entries.get_mut(block_id as usize) {
            Some(slot) => {
                *slot = Arc::new(info);
                true
            }
            None => false,
        }
    }

    /// Get break info for a block id. Unknown ids resolve to air.
    pub fn get(&self, block_id: BlockId) -> &BreakInfo {
        self.shared(block_id).as_ref()
    }

    /// Shared handle to the break info for a block id.
    pub fn shared(&self, block_id: BlockId) -> &Arc<BreakInfo> {
        self.entries
            .get(block_id as usize)
            .unwrap_or(&self.entries[BLOCK_AIR as usize])
    }
}

impl Default for BlockBreakRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn with_blast(
    hardness: f32,
    tool_type: BlockToolType,
    tool_harvest_tier: u32,
    blast_resistance: f32,
) -> BreakInfo {
    BreakInfo::with_options(
        hardness,
        tool_type,
        tool_harvest_tier,
        BreakInfoOptions {
            blast_resistance: Some(blast_resistance),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockforge_core::{HeldItem, ToolKind};

    #[test]
    fn test_mining_time_ordering() {
        let registry = BlockBreakRegistry::new();
        let stone = registry.get(BLOCK_STONE);

        let hand = stone.break_time(&HeldItem::Hand).unwrap();
        let wood_pick = stone
            .break_time(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Wood))
            .unwrap();
        let diamond_pick = stone
            .break_time(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Diamond))
            .unwrap();

        assert_eq!(hand, 7.5);
        assert!(wood_pick < hand);
        assert!(diamond_pick < wood_pick);
    }

    #[test]
    fn test_harvest_requirements() {
        let registry = BlockBreakRegistry::new();
        let diamond_ore = registry.get(BLOCK_DIAMOND_ORE);

        assert!(!diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Wood)));
        assert!(!diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Gold)));
        assert!(!diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Stone)));
        assert!(diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Iron)));
        assert!(diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Pickaxe, ToolTier::Diamond)));
        assert!(!diamond_ore.is_tool_compatible(&HeldItem::tool(ToolKind::Axe, ToolTier::Diamond)));
    }

    #[test]
    fn test_registry_defaults() {
        let registry = BlockBreakRegistry::new();

        assert!(!registry.get(BLOCK_BEDROCK).is_breakable());
        assert!(registry.get(BLOCK_TORCH).breaks_instantly());
        assert_eq!(registry.get(BLOCK_OBSIDIAN).blast_resistance(), 6000.0);
        assert_eq!(registry.get(BLOCK_DIRT).blast_resistance(), 2.5);
        assert_eq!(registry.get(BLOCK_OAK_LOG).tool_type(), BlockToolType::AXE);

        // Unknown ids fall back to air.
        assert_eq!(registry.get(999), registry.get(BLOCK_AIR));
        assert!(!registry.get(999).is_breakable());
    }

    #[test]
    fn test_air_cannot_be_mined() {
        let registry = BlockBreakRegistry::new();
        let air = registry.get(BLOCK_AIR);

        assert_eq!(air.hardness(), -1.0);
        assert_eq!(air.blast_resistance(), 0.0);
        assert!(!air.is_breakable());
        assert!(!air.breaks_instantly());
        assert!(!air.is_tool_compatible(&HeldItem::Hand));
        assert_eq!(registry.get(u16::MAX), air);
    }

    #[test]
    fn test_entries_are_shared() {
        let mut registry = BlockBreakRegistry::new();
        let handle = Arc::clone(registry.shared(BLOCK_STONE));
        assert!(Arc::ptr_eq(&handle, registry.shared(BLOCK_STONE)));

        assert!(registry.set(BLOCK_STONE, BreakInfo::new(9.0, BlockToolType::PICKAXE, 1)));
        assert_eq!(handle.hardness(), 1.5);
        assert_eq!(registry.get(BLOCK_STONE).hardness(), 9.0);
        assert!(!registry.set(4096, BreakInfo::instant(BlockToolType::NONE, 0)));
    }
}
