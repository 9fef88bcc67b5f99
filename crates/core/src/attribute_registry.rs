//! Catalog of attribute definitions keyed by id.
//!
//! The registry is an explicit value owned by the simulation context. It is
//! populated once at startup ([`AttributeRegistry::with_builtins`]) and may
//! receive further [`register`](AttributeRegistry::register) calls for
//! plugin-defined attributes before the simulation starts.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::attribute::{AttributeDefinition, AttributeError, AttributeInstance};
use crate::registry::RegistryKey;

/// Built-in attribute ids.
pub mod ids {
    /// Absorption hearts.
    pub const ABSORPTION: &str = "minecraft:absorption";
    /// Food saturation.
    pub const SATURATION: &str = "minecraft:player.saturation";
    /// Food exhaustion (server-side only).
    pub const EXHAUSTION: &str = "minecraft:player.exhaustion";
    /// Knockback resistance.
    pub const KNOCKBACK_RESISTANCE: &str = "minecraft:knockback_resistance";
    /// Health points.
    pub const HEALTH: &str = "minecraft:health";
    /// Walking speed.
    pub const MOVEMENT_SPEED: &str = "minecraft:movement";
    /// Mob follow range (server-side only).
    pub const FOLLOW_RANGE: &str = "minecraft:follow_range";
    /// Hunger bar.
    pub const HUNGER: &str = "minecraft:player.hunger";
    /// Alias of [`HUNGER`].
    pub const FOOD: &str = HUNGER;
    /// Melee damage (server-side only).
    pub const ATTACK_DAMAGE: &str = "minecraft:attack_damage";
    /// Experience level.
    pub const EXPERIENCE_LEVEL: &str = "minecraft:player.level";
    /// Progress towards the next experience level.
    pub const EXPERIENCE: &str = "minecraft:player.experience";
    /// Swimming speed.
    pub const UNDERWATER_MOVEMENT: &str = "minecraft:underwater_movement";
    /// Loot luck.
    pub const LUCK: &str = "minecraft:luck";
    /// Fall damage multiplier.
    pub const FALL_DAMAGE: &str = "minecraft:fall_damage";
    /// Horse jump strength.
    pub const HORSE_JUMP_STRENGTH: &str = "minecraft:horse.jump_strength";
    /// Chance for zombies to call reinforcements.
    pub const ZOMBIE_SPAWN_REINFORCEMENTS: &str = "minecraft:zombie.spawn_reinforcements";
}

/// `(id, min, max, default, syncable)`
const BUILTINS: &[(&str, f32, f32, f32, bool)] = &[
    (ids::ABSORPTION, 0.0, f32::MAX, 0.0, true),
    (ids::SATURATION, 0.0, 20.0, 20.0, true),
    (ids::EXHAUSTION, 0.0, 5.0, 0.0, false),
    (ids::KNOCKBACK_RESISTANCE, 0.0, 1.0, 0.0, true),
    (ids::HEALTH, 0.0, 20.0, 20.0, true),
    (ids::MOVEMENT_SPEED, 0.0, f32::MAX, 0.1, true),
    (ids::FOLLOW_RANGE, 0.0, 2048.0, 16.0, false),
    (ids::HUNGER, 0.0, 20.0, 20.0, true),
    (ids::ATTACK_DAMAGE, 0.0, f32::MAX, 1.0, false),
    (ids::EXPERIENCE_LEVEL, 0.0, 24791.0, 0.0, true),
    (ids::EXPERIENCE, 0.0, 1.0, 0.0, true),
    (ids::UNDERWATER_MOVEMENT, 0.0, f32::MAX, 0.02, true),
    (ids::LUCK, -1024.0, 1024.0, 0.0, true),
    (ids::FALL_DAMAGE, 0.0, f32::MAX, 1.0, true),
    (ids::HORSE_JUMP_STRENGTH, 0.0, 2.0, 0.7, true),
    (ids::ZOMBIE_SPAWN_REINFORCEMENTS, 0.0, 1.0, 0.0, true),
];

/// Attribute definitions keyed by id, iterated in id order.
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    definitions: BTreeMap<RegistryKey, AttributeDefinition>,
}

impl AttributeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in attribute.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &(id, min, max, default, syncable) in BUILTINS {
            let def = RegistryKey::parse(id)
                .map_err(AttributeError::from)
                .and_then(|key| AttributeDefinition::new(key, min, max, default, syncable));
            debug_assert!(def.is_ok(), "malformed built-in attribute {id}");
            match def {
                Ok(def) => {
                    registry.definitions.insert(def.id().clone(), def);
                }
                Err(err) => warn!(%id, %err, "skipping malformed built-in attribute"),
            }
        }
        debug!(count = registry.len(), "registered built-in attributes");
        registry
    }

    /// Register (or replace) a definition. The last registration for an id wins.
    pub fn register(
        &mut self,
        id: &str,
        min_value: f32,
        max_value: f32,
        default_value: f32,
        syncable: bool,
    ) -> Result<AttributeDefinition, AttributeError> {
        let key = RegistryKey::parse(id)?;
        let def =
            AttributeDefinition::new(key.clone(), min_value, max_value, default_value, syncable)?;
        if let Some(previous) = self.definitions.insert(key, def.clone()) {
            debug!(id = %previous.id(), "attribute definition replaced");
        }
        Ok(def)
    }

    /// Copy of the definition registered under `id`, if any.
    pub fn lookup(&self, id: &str) -> Option<AttributeDefinition> {
        let key = RegistryKey::parse(id).ok()?;
        self.definitions.get(&key).cloned()
    }

    /// Fresh instance of the attribute registered under `id`.
    pub fn instantiate(&self, id: &str) -> Option<AttributeInstance> {
        let key = RegistryKey::parse(id).ok()?;
        self.definitions.get(&key).map(AttributeDefinition::instantiate)
    }

    /// Returns true if `id` has a definition.
    pub fn contains(&self, id: &str) -> bool {
        RegistryKey::parse(id)
            .map(|key| self.definitions.contains_key(&key))
            .unwrap_or(false)
    }

    /// Iterate over definitions in deterministic id order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.definitions.values()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = AttributeRegistry::with_builtins();
        assert_eq!(registry.len(), BUILTINS.len());

        let health = registry.lookup(ids::HEALTH).unwrap();
        assert_eq!(health.min_value(), 0.0);
        assert_eq!(health.max_value(), 20.0);
        assert_eq!(health.default_value(), 20.0);
        assert!(health.is_syncable());

        assert!(!registry.lookup(ids::EXHAUSTION).unwrap().is_syncable());
        assert_eq!(registry.lookup(ids::FOOD), registry.lookup(ids::HUNGER));
        assert_eq!(registry.lookup(ids::LUCK).unwrap().min_value(), -1024.0);
    }

    #[test]
    fn every_builtin_entry_is_well_formed() {
        for &(id, min, max, default, syncable) in BUILTINS {
            let key = RegistryKey::parse(id).unwrap();
            assert_eq!(key.namespace(), "minecraft", "{id}");
            let def = AttributeDefinition::new(key, min, max, default, syncable).unwrap();
            assert_eq!(def.default_value(), default, "{id}");
        }
    }

    #[test]
    fn lookup_accepts_bare_paths() {
        let registry = AttributeRegistry::with_builtins();
        assert!(registry.contains("health"));
        assert!(registry.lookup("player.hunger").is_some());
        assert!(registry.lookup("nonexistent").is_none());
        assert!(registry.lookup("Not A Key").is_none());
    }

    #[test]
    fn register_validates_and_overwrites() {
        let mut registry = AttributeRegistry::new();
        assert!(matches!(
            registry.register("plugin:mana", 10.0, 0.0, 5.0, true),
            Err(AttributeError::InvalidRange { .. })
        ));
        assert!(matches!(
            registry.register("plugin:mana", 0.0, 10.0, 50.0, true),
            Err(AttributeError::InvalidRange { .. })
        ));
        assert!(matches!(
            registry.register("Bad Id", 0.0, 1.0, 0.0, true),
            Err(AttributeError::InvalidId(_))
        ));
        assert!(registry.is_empty());

        registry.register("plugin:mana", 0.0, 10.0, 5.0, true).unwrap();
        registry.register("plugin:mana", 0.0, 100.0, 50.0, false).unwrap();
        let mana = registry.lookup("plugin:mana").unwrap();
        assert_eq!(mana.max_value(), 100.0);
        assert!(!mana.is_syncable());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn instances_are_independent() {
        let registry = AttributeRegistry::with_builtins();
        let mut a = registry.instantiate(ids::HEALTH).unwrap();
        let b = registry.instantiate(ids::HEALTH).unwrap();

        a.set_value(5.0, false, false).unwrap();
        a.set_max_value(40.0).unwrap();
        assert_eq!(b.value(), 20.0);
        assert_eq!(registry.lookup(ids::HEALTH).unwrap().max_value(), 20.0);
    }

    #[test]
    fn fresh_health_clamps_and_reports_dirty() {
        let registry = AttributeRegistry::with_builtins();
        let mut health = registry.instantiate(ids::HEALTH).unwrap();
        health.set_value(25.0, true, false).unwrap();
        assert_eq!(health.value(), 20.0);
        assert!(health.is_dirty());
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let registry = AttributeRegistry::with_builtins();
        let ids: Vec<String> = registry.iter().map(|d| d.id().to_string()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
