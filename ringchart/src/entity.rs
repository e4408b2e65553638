// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input values.

extern crate alloc;

use alloc::string::String;

/// Errors returned when constructing an [`Entity`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EntityError {
    /// The value is below zero.
    #[error("entity `{label}` has negative value {value}")]
    Negative {
        /// Label of the rejected entity.
        label: String,
        /// The rejected value.
        value: f64,
    },
    /// The value is NaN or infinite.
    #[error("entity `{label}` has a non-finite value")]
    NotFinite {
        /// Label of the rejected entity.
        label: String,
    },
}

/// One labeled, non-negative value of a dataset.
///
/// Entities are immutable once constructed. A dataset is an ordered `Vec<Entity>`; slices and
/// legend rows follow that order and nothing is sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    value: f64,
    label: String,
}

impl Entity {
    /// Creates an entity, rejecting negative and non-finite values.
    pub fn new(value: f64, label: impl Into<String>) -> Result<Self, EntityError> {
        let label = label.into();
        if !value.is_finite() {
            return Err(EntityError::NotFinite { label });
        }
        if value < 0.0 {
            return Err(EntityError::Negative { label, value });
        }
        // Normalize `-0.0` so it never leaks into angle math.
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Self { value, label })
    }

    /// Creates an entity, clamping negative and non-finite values to zero.
    ///
    /// Use this for untrusted input where a bad value should render as an empty share rather
    /// than abort the whole dataset.
    pub fn clamped(value: f64, label: impl Into<String>) -> Self {
        let value = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        Self {
            value,
            label: label.into(),
        }
    }

    /// The magnitude of this entity.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The label shown in the legend.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Returns the sum of all entity values.
pub fn total(entities: &[Entity]) -> f64 {
    entities.iter().map(Entity::value).sum()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn rejects_negative_values() {
        let err = Entity::new(-1.0, "debt").unwrap_err();
        assert_eq!(
            err,
            EntityError::Negative {
                label: "debt".to_string(),
                value: -1.0,
            }
        );
        assert_eq!(err.to_string(), "entity `debt` has negative value -1");
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Entity::new(f64::NAN, "x"),
            Err(EntityError::NotFinite { .. })
        ));
        assert!(matches!(
            Entity::new(f64::INFINITY, "x"),
            Err(EntityError::NotFinite { .. })
        ));
    }

    #[test]
    fn zero_is_a_valid_value() {
        let e = Entity::new(-0.0, "nothing").unwrap();
        assert_eq!(e.value(), 0.0);
        assert!(e.value().is_sign_positive(), "negative zero is normalized");
    }

    #[test]
    fn clamped_maps_bad_values_to_zero() {
        assert_eq!(Entity::clamped(-5.0, "a").value(), 0.0);
        assert_eq!(Entity::clamped(f64::NAN, "b").value(), 0.0);
        assert_eq!(Entity::clamped(3.5, "c").value(), 3.5);
        assert_eq!(Entity::clamped(3.5, "c").label(), "c");
    }

    #[test]
    fn total_sums_in_order() {
        let entities = [
            Entity::new(10.0, "A").unwrap(),
            Entity::new(30.0, "B").unwrap(),
        ];
        assert_eq!(total(&entities), 40.0);
        assert_eq!(total(&[]), 0.0);
    }
}
