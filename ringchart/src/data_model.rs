// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live dataset storage with explicit change events.
//!
//! Mutation never triggers a redraw by itself: [`DataModel::set`] returns a [`DatasetChanged`]
//! event and the host decides when to invalidate.

extern crate alloc;

use alloc::vec::Vec;

use crate::entity::{self, Entity};

/// Emitted whenever the live dataset is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the host should invalidate the chart when the dataset changes"]
pub struct DatasetChanged {
    /// Revision of the model after the change.
    pub revision: u64,
    /// Number of entities in the new dataset.
    pub len: usize,
}

/// The ordered dataset currently shown by a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataModel {
    entities: Vec<Entity>,
    revision: u64,
}

impl DataModel {
    /// Creates an empty model at revision 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model holding `entities` at revision 0.
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            revision: 0,
        }
    }

    /// The live dataset, in drawing order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Sum of all live values.
    pub fn total(&self) -> f64 {
        entity::total(&self.entities)
    }

    /// Monotonic counter, bumped once per [`DataModel::set`].
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the whole dataset in one step.
    pub fn set(&mut self, entities: Vec<Entity>) -> DatasetChanged {
        self.entities = entities;
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(
            revision = self.revision,
            len = self.entities.len(),
            "dataset replaced"
        );
        DatasetChanged {
            revision: self.revision,
            len: self.entities.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn set_bumps_revision_and_reports_len() {
        let mut model = DataModel::new();
        assert_eq!(model.revision(), 0);

        let changed = model.set(vec![
            Entity::new(1.0, "a").unwrap(),
            Entity::new(2.0, "b").unwrap(),
        ]);
        assert_eq!(changed, DatasetChanged { revision: 1, len: 2 });
        assert_eq!(model.total(), 3.0);

        let changed = model.set(Vec::new());
        assert_eq!(changed, DatasetChanged { revision: 2, len: 0 });
        assert!(model.entities().is_empty(), "dataset should be empty");
    }
}
