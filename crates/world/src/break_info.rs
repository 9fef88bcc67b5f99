//! Block break info - hardness, blast resistance, tool requirements

use blockforge_core::{BlockToolType, ToolCapabilities};
use thiserror::Error;

/// Blast resistance given to indestructible blocks when none is specified.
pub const INDESTRUCTIBLE_BLAST_RESISTANCE: f32 = 18_000_000.0;

/// Break time multiplier when the held item can harvest the block.
const COMPATIBLE_TOOL_MULTIPLIER: f32 = 1.5;
/// Break time multiplier when it cannot.
const INCOMPATIBLE_TOOL_MULTIPLIER: f32 = 5.0;

/// Errors raised while computing break times.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakTimeError {
    /// The held item reported a non-positive mining efficiency.
    #[error("tool reported invalid mining efficiency {0}, expected a positive number")]
    InvalidEfficiency(f32),
}

/// Optional overrides applied when building a [`BreakInfo`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BreakInfoOptions {
    /// Overrides the derived `5 × hardness` blast resistance.
    pub blast_resistance: Option<f32>,
}

/// How a block type resists being mined and blown up.
///
/// Built once per block type and never mutated, so it can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakInfo {
    hardness: f32,
    blast_resistance: f32,
    tool_type: BlockToolType,
    tool_harvest_tier: u32,
}

impl BreakInfo {
    /// Normal block. Negative hardness makes it unbreakable, zero breaks instantly.
    pub fn new(hardness: f32, tool_type: BlockToolType, tool_harvest_tier: u32) -> Self {
        Self::with_options(
            hardness,
            tool_type,
            tool_harvest_tier,
            BreakInfoOptions::default(),
        )
    }

    /// Normal block with explicit overrides.
    pub fn with_options(
        hardness: f32,
        tool_type: BlockToolType,
        tool_harvest_tier: u32,
        options: BreakInfoOptions,
    ) -> Self {
        Self {
            hardness,
            blast_resistance: options.blast_resistance.unwrap_or(hardness * 5.0),
            tool_type,
            tool_harvest_tier,
        }
    }

    /// Block that breaks immediately whatever is held (torches, flowers).
    pub fn instant(tool_type: BlockToolType, tool_harvest_tier: u32) -> Self {
        Self::with_options(
            0.0,
            tool_type,
            tool_harvest_tier,
            BreakInfoOptions {
                blast_resistance: Some(0.0),
            },
        )
    }

    /// Block that can never be mined (bedrock, barriers).
    pub fn indestructible(blast_resistance: f32) -> Self {
        Self::with_options(
            -1.0,
            BlockToolType::NONE,
            0,
            BreakInfoOptions {
                blast_resistance: Some(blast_resistance),
            },
        )
    }

    /// Base value for break times.
    pub fn hardness(&self) -> f32 {
        self.hardness
    }

    /// Resistance to explosions.
    pub fn blast_resistance(&self) -> f32 {
        self.blast_resistance
    }

    /// Preferred tool categories.
    pub fn tool_type(&self) -> BlockToolType {
        self.tool_type
    }

    /// Minimum harvest tier a matching tool needs. 0 when no tool is required.
    pub fn tool_harvest_tier(&self) -> u32 {
        self.tool_harvest_tier
    }

    /// Whether the block can be broken at all.
    pub fn is_breakable(&self) -> bool {
        self.hardness >= 0.0
    }

    /// Whether the block breaks the moment it is hit.
    pub fn breaks_instantly(&self) -> bool {
        self.hardness == 0.0
    }

    /// Whether `tool` can properly harvest this block.
    ///
    /// Any one of these grants compatibility: the block wants no particular
    /// tool, the block needs no tier, or the tool's category matches and its
    /// tier is high enough. Indestructible blocks accept nothing.
    pub fn is_tool_compatible(&self, tool: &impl ToolCapabilities) -> bool {
        if self.hardness < 0.0 {
            return false;
        }

        self.tool_type.is_empty()
            || self.tool_harvest_tier == 0
            || (self.tool_type.intersects(tool.tool_type())
                && tool.harvest_tier() >= self.tool_harvest_tier)
    }

    /// Seconds needed to break this block with `tool`.
    ///
    /// Efficiency is queried with whether the tool's category matches the
    /// block, regardless of tier.
    pub fn break_time(&self, tool: &impl ToolCapabilities) -> Result<f32, BreakTimeError> {
        let multiplier = if self.is_tool_compatible(tool) {
            COMPATIBLE_TOOL_MULTIPLIER
        } else {
            INCOMPATIBLE_TOOL_MULTIPLIER
        };

        let type_matches = self.tool_type.intersects(tool.tool_type());
        let efficiency = tool.mining_efficiency(type_matches);
        if efficiency.is_nan() || efficiency <= 0.0 {
            return Err(BreakTimeError::InvalidEfficiency(efficiency));
        }

        Ok(self.hardness * multiplier / efficiency)
    }
}
