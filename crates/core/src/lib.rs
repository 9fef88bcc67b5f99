#![warn(missing_docs)]
//! Core primitives shared across the workspace: entity attributes, registry
//! keys and the tool capability interface.

pub mod attribute;
pub mod attribute_registry;
pub mod registry;
pub mod tool;

pub use attribute::{AttributeDefinition, AttributeError, AttributeInstance};
pub use attribute_registry::{ids as attribute_ids, AttributeRegistry};
pub use registry::{RegistryKey, RegistryKeyError, DEFAULT_NAMESPACE};
pub use tool::{BlockToolType, HeldItem, ToolCapabilities, ToolKind, ToolTier};
