//! Bounded entity attributes with change tracking.
//!
//! An [`AttributeDefinition`] is the immutable template held by the
//! [`AttributeRegistry`](crate::AttributeRegistry). Each entity owns its own
//! [`AttributeInstance`] built from a definition snapshot; the two never share
//! state afterwards.
//!
//! Every mutation that changes a value or bound marks the instance dirty so
//! the entity sync layer knows what to resend on the next tick. Change
//! detection is exact `!=` on `f32`, with no tolerance.

use thiserror::Error;

use crate::registry::{RegistryKey, RegistryKeyError};

/// Errors raised by attribute definitions and instances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    /// `min <= default <= max` does not hold, or a bound update would invert the range.
    #[error("invalid attribute range: min {min}, max {max}, default {default}")]
    InvalidRange {
        /// Lower bound involved in the failed check.
        min: f32,
        /// Upper bound involved in the failed check.
        max: f32,
        /// Default value involved in the failed check.
        default: f32,
    },
    /// A value or default was assigned outside the current bounds without clamping.
    #[error("value {value} is outside the range {min} - {max}")]
    OutOfRange {
        /// Rejected value.
        value: f32,
        /// Current lower bound.
        min: f32,
        /// Current upper bound.
        max: f32,
    },
    /// The attribute id is not a valid registry key.
    #[error("invalid attribute id: {0}")]
    InvalidId(#[from] RegistryKeyError),
}

/// Static bounds and sync policy for one attribute id.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    id: RegistryKey,
    min_value: f32,
    max_value: f32,
    default_value: f32,
    syncable: bool,
}

impl AttributeDefinition {
    /// Build a definition, validating `min <= default <= max`.
    pub fn new(
        id: RegistryKey,
        min_value: f32,
        max_value: f32,
        default_value: f32,
        syncable: bool,
    ) -> Result<Self, AttributeError> {
        let has_nan = min_value.is_nan() || max_value.is_nan() || default_value.is_nan();
        if has_nan
            || min_value > max_value
            || default_value < min_value
            || default_value > max_value
        {
            return Err(AttributeError::InvalidRange {
                min: min_value,
                max: max_value,
                default: default_value,
            });
        }
        Ok(Self {
            id,
            min_value,
            max_value,
            default_value,
            syncable,
        })
    }

    /// Attribute id.
    pub fn id(&self) -> &RegistryKey {
        &self.id
    }

    /// Lower bound.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Upper bound.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Value new instances start at.
    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    /// Whether instances of this attribute are ever reported to clients.
    pub fn is_syncable(&self) -> bool {
        self.syncable
    }

    /// Create a fresh, independently owned instance at the default value.
    ///
    /// New instances start dirty so their initial state gets sent.
    pub fn instantiate(&self) -> AttributeInstance {
        AttributeInstance {
            id: self.id.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            default_value: self.default_value,
            current_value: self.default_value,
            syncable: self.syncable,
            dirty: true,
        }
    }
}

/// Per-entity attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeInstance {
    id: RegistryKey,
    min_value: f32,
    max_value: f32,
    default_value: f32,
    current_value: f32,
    syncable: bool,
    dirty: bool,
}

impl AttributeInstance {
    /// Attribute id.
    pub fn id(&self) -> &RegistryKey {
        &self.id
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.current_value
    }

    /// Current lower bound.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Current upper bound.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Current default.
    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    /// Whether changes to this instance are ever reported.
    pub fn is_syncable(&self) -> bool {
        self.syncable
    }

    /// Set the current value.
    ///
    /// Out-of-range values fail with [`AttributeError::OutOfRange`] unless
    /// `fit` is set, in which case they are clamped to the nearest bound. The
    /// instance is marked dirty when the stored value changes, or
    /// unconditionally when `force_send` is set. NaN is always rejected.
    pub fn set_value(
        &mut self,
        value: f32,
        fit: bool,
        force_send: bool,
    ) -> Result<(), AttributeError> {
        let value = if self.in_range(value) {
            value
        } else if fit && !value.is_nan() {
            value.clamp(self.min_value, self.max_value)
        } else {
            return Err(self.out_of_range(value));
        };

        if self.current_value != value {
            self.current_value = value;
            self.dirty = true;
        } else if force_send {
            self.dirty = true;
        }
        Ok(())
    }

    /// Set the lower bound. Fails if it would exceed the current maximum.
    ///
    /// The current value is not re-clamped.
    pub fn set_min_value(&mut self, min_value: f32) -> Result<(), AttributeError> {
        if min_value.is_nan() || min_value > self.max_value {
            return Err(AttributeError::InvalidRange {
                min: min_value,
                max: self.max_value,
                default: self.default_value,
            });
        }
        if self.min_value != min_value {
            self.min_value = min_value;
            self.dirty = true;
        }
        Ok(())
    }

    /// Set the upper bound. Fails if it would fall below the current minimum.
    ///
    /// The current value is not re-clamped.
    pub fn set_max_value(&mut self, max_value: f32) -> Result<(), AttributeError> {
        if max_value.is_nan() || max_value < self.min_value {
            return Err(AttributeError::InvalidRange {
                min: self.min_value,
                max: max_value,
                default: self.default_value,
            });
        }
        if self.max_value != max_value {
            self.max_value = max_value;
            self.dirty = true;
        }
        Ok(())
    }

    /// Set the default value. Fails if outside the current bounds.
    pub fn set_default_value(&mut self, default_value: f32) -> Result<(), AttributeError> {
        if !self.in_range(default_value) {
            return Err(self.out_of_range(default_value));
        }
        if self.default_value != default_value {
            self.default_value = default_value;
            self.dirty = true;
        }
        Ok(())
    }

    /// Restore the default value and always schedule a resend.
    ///
    /// Bounds may have moved since the default was set, so the default is
    /// clamped into the current range.
    pub fn reset_to_default(&mut self) {
        let value = self.default_value.clamp(self.min_value, self.max_value);
        self.current_value = value;
        self.dirty = true;
    }

    /// True when this instance is syncable and has unsent changes.
    pub fn is_dirty(&self) -> bool {
        self.syncable && self.dirty
    }

    /// Acknowledge a completed sync.
    pub fn mark_clean(&mut self) {
        self.mark_synchronized(true);
    }

    /// Record the sync state; `false` forces a resend on the next tick.
    pub fn mark_synchronized(&mut self, synced: bool) {
        self.dirty = !synced;
    }

    fn in_range(&self, value: f32) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    fn out_of_range(&self, value: f32) -> AttributeError {
        AttributeError::OutOfRange {
            value,
            min: self.min_value,
            max: self.max_value,
        }
    }
}
