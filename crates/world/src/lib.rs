#![warn(missing_docs)]
//! Block-side simulation primitives: break info and per-block-type tables.

mod blocks;
mod break_info;
mod break_registry;

pub use blocks::*;
pub use break_info::{
    BreakInfo, BreakInfoOptions, BreakTimeError, INDESTRUCTIBLE_BLAST_RESISTANCE,
};
pub use break_registry::BlockBreakRegistry;
