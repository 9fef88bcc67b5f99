//! Block type identifiers.

/// Block type identifier referencing the break registry.
pub type BlockId = u16;

/// Reserved ID for air.
pub const BLOCK_AIR: BlockId = 0;
/// Stone.
pub const BLOCK_STONE: BlockId = 1;
/// Grass block.
pub const BLOCK_GRASS: BlockId = 2;
/// Dirt.
pub const BLOCK_DIRT: BlockId = 3;
/// Cobblestone.
pub const BLOCK_COBBLESTONE: BlockId = 4;
/// Oak planks.
pub const BLOCK_OAK_PLANKS: BlockId = 5;
/// Bedrock.
pub const BLOCK_BEDROCK: BlockId = 7;
/// Sand.
pub const BLOCK_SAND: BlockId = 12;
/// Gravel.
pub const BLOCK_GRAVEL: BlockId = 13;
/// Gold ore.
pub const BLOCK_GOLD_ORE: BlockId = 14;
/// Iron ore.
pub const BLOCK_IRON_ORE: BlockId = 15;
/// Coal ore.
pub const BLOCK_COAL_ORE: BlockId = 16;
/// Oak log.
pub const BLOCK_OAK_LOG: BlockId = 17;
/// Oak leaves.
pub const BLOCK_OAK_LEAVES: BlockId = 18;
/// Glass.
pub const BLOCK_GLASS: BlockId = 20;
/// Cobweb.
pub const BLOCK_COBWEB: BlockId = 30;
/// Tall grass.
pub const BLOCK_TALL_GRASS: BlockId = 31;
/// Wool.
pub const BLOCK_WOOL: BlockId = 35;
/// Obsidian.
pub const BLOCK_OBSIDIAN: BlockId = 49;
/// Torch.
pub const BLOCK_TORCH: BlockId = 50;
/// Diamond ore.
pub const BLOCK_DIAMOND_ORE: BlockId = 56;
/// Snow layer.
pub const BLOCK_SNOW_LAYER: BlockId = 78;
/// Ice.
pub const BLOCK_ICE: BlockId = 79;
/// Clay.
pub const BLOCK_CLAY: BlockId = 82;
/// Invisible bedrock used for world borders.
pub const BLOCK_BARRIER: BlockId = 95;
