//! Tool capabilities consumed by block break-time computation.
//!
//! Break logic never looks at concrete item types. It only asks a held item
//! three questions through [`ToolCapabilities`]: which tool categories it
//! belongs to, what harvest tier it has, and how fast it mines.

bitflags::bitflags! {
    /// Tool categories. A block may accept several at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BlockToolType: u32 {
        /// Combat tool; cuts cobwebs and bamboo quickly.
        const SWORD = 1 << 0;
        /// Digs dirt, sand, gravel.
        const SHOVEL = 1 << 1;
        /// Mines stone and ores.
        const PICKAXE = 1 << 2;
        /// Chops wood.
        const AXE = 1 << 3;
        /// Cuts wool and leaves.
        const SHEARS = 1 << 4;
        /// Tills farmland, breaks plants.
        const HOE = 1 << 5;
    }
}

impl BlockToolType {
    /// No tool category.
    pub const NONE: Self = Self::empty();
}

impl Default for BlockToolType {
    fn default() -> Self {
        Self::NONE
    }
}

/// What a held item offers when breaking a block.
pub trait ToolCapabilities {
    /// Tool categories this item belongs to.
    fn tool_type(&self) -> BlockToolType;

    /// Harvest tier; 0 for items that are not tiered tools.
    fn harvest_tier(&self) -> u32;

    /// Mining speed. `type_matches` is true when the item's category overlaps
    /// the block's preferred tool. Must be positive.
    fn mining_efficiency(&self, type_matches: bool) -> f32;
}

/// Tiered tool materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolTier {
    /// Wooden tools.
    Wood,
    /// Golden tools: fast but only one step above wood.
    Gold,
    /// Stone tools.
    Stone,
    /// Iron tools.
    Iron,
    /// Diamond tools.
    Diamond,
}

impl ToolTier {
    /// Harvest tier compared against a block's required tier.
    pub fn harvest_tier(self) -> u32 {
        match self {
            ToolTier::Wood => 1,
            ToolTier::Gold => 2,
            ToolTier::Stone => 3,
            ToolTier::Iron => 4,
            ToolTier::Diamond => 5,
        }
    }

    /// Mining speed on blocks the tool is made for.
    pub fn base_efficiency(self) -> f32 {
        match self {
            ToolTier::Wood => 2.0,
            ToolTier::Gold => 12.0,
            ToolTier::Stone => 4.0,
            ToolTier::Iron => 6.0,
            ToolTier::Diamond => 8.0,
        }
    }
}

/// Kinds of tiered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Pickaxe.
    Pickaxe,
    /// Axe.
    Axe,
    /// Shovel.
    Shovel,
    /// Hoe.
    Hoe,
    /// Sword.
    Sword,
}

impl ToolKind {
    /// Tool category for this kind.
    pub fn tool_type(self) -> BlockToolType {
        match self {
            ToolKind::Pickaxe => BlockToolType::PICKAXE,
            ToolKind::Axe => BlockToolType::AXE,
            ToolKind::Shovel => BlockToolType::SHOVEL,
            ToolKind::Hoe => BlockToolType::HOE,
            ToolKind::Sword => BlockToolType::SWORD,
        }
    }
}

const SWORD_EFFICIENCY: f32 = 10.0;
const SHEARS_EFFICIENCY: f32 = 15.0;

/// Item held while breaking a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeldItem {
    /// Empty hand or any item that is not a tool.
    Hand,
    /// A tiered tool, optionally enchanted with Efficiency.
    Tool {
        /// Tool kind.
        kind: ToolKind,
        /// Tool material.
        tier: ToolTier,
        /// Efficiency enchantment level (0 = none).
        efficiency_level: u8,
    },
    /// Shears.
    Shears,
}

impl HeldItem {
    /// Unenchanted tiered tool.
    pub fn tool(kind: ToolKind, tier: ToolTier) -> Self {
        HeldItem::Tool {
            kind,
            tier,
            efficiency_level: 0,
        }
    }

    /// Tiered tool with an Efficiency enchantment.
    pub fn enchanted_tool(kind: ToolKind, tier: ToolTier, efficiency_level: u8) -> Self {
        HeldItem::Tool {
            kind,
            tier,
            efficiency_level,
        }
    }
}

impl ToolCapabilities for HeldItem {
    fn tool_type(&self) -> BlockToolType {
        match self {
            HeldItem::Hand => BlockToolType::NONE,
            HeldItem::Tool { kind, .. } => kind.tool_type(),
            HeldItem::Shears => BlockToolType::SHEARS,
        }
    }

    fn harvest_tier(&self) -> u32 {
        match self {
            HeldItem::Hand => 0,
            HeldItem::Tool { tier, .. } => tier.harvest_tier(),
            HeldItem::Shears => 1,
        }
    }

    fn mining_efficiency(&self, type_matches: bool) -> f32 {
        if !type_matches {
            return 1.0;
        }
        match *self {
            HeldItem::Hand => 1.0,
            HeldItem::Tool {
                kind,
                tier,
                efficiency_level,
            } => {
                let base = if kind == ToolKind::Sword {
                    SWORD_EFFICIENCY
                } else {
                    tier.base_efficiency()
                };
                if efficiency_level > 0 {
                    let level = f32::from(efficiency_level);
                    base + level * level + 1.0
                } else {
                    base
                }
            }
            HeldItem::Shears => SHEARS_EFFICIENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_tier_ordering() {
        assert!(ToolTier::Diamond.harvest_tier() > ToolTier::Iron.harvest_tier());
        assert!(ToolTier::Iron.harvest_tier() > ToolTier::Stone.harvest_tier());
        assert!(ToolTier::Stone.harvest_tier() > ToolTier::Gold.harvest_tier());
        assert!(ToolTier::Gold.harvest_tier() > ToolTier::Wood.harvest_tier());
    }

    #[test]
    fn test_gold_is_fastest() {
        let gold = HeldItem::tool(ToolKind::Pickaxe, ToolTier::Gold);
        let diamond = HeldItem::tool(ToolKind::Pickaxe, ToolTier::Diamond);
        assert!(gold.mining_efficiency(true) > diamond.mining_efficiency(true));
    }

    #[test]
    fn test_efficiency_only_applies_to_matching_type() {
        let pick = HeldItem::tool(ToolKind::Pickaxe, ToolTier::Iron);
        assert_eq!(pick.mining_efficiency(true), 6.0);
        assert_eq!(pick.mining_efficiency(false), 1.0);

        let sword = HeldItem::tool(ToolKind::Sword, ToolTier::Wood);
        assert_eq!(sword.mining_efficiency(true), 10.0);

        assert_eq!(HeldItem::Shears.mining_efficiency(true), 15.0);
        assert_eq!(HeldItem::Hand.mining_efficiency(true), 1.0);
    }

    #[test]
    fn test_efficiency_enchantment() {
        let pick = HeldItem::enchanted_tool(ToolKind::Pickaxe, ToolTier::Diamond, 3);
        // 8 + 3^2 + 1
        assert_eq!(pick.mining_efficiency(true), 18.0);
        assert_eq!(pick.mining_efficiency(false), 1.0);
    }

    #[test]
    fn test_tool_types() {
        assert_eq!(HeldItem::Hand.tool_type(), BlockToolType::NONE);
        assert_eq!(HeldItem::Hand.harvest_tier(), 0);
        assert_eq!(HeldItem::Shears.tool_type(), BlockToolType::SHEARS);
        assert_eq!(
            HeldItem::tool(ToolKind::Axe, ToolTier::Stone).tool_type(),
            BlockToolType::AXE
        );
        assert!(BlockToolType::NONE.is_empty());
        assert!(BlockToolType::default().is_empty());
    }
}
