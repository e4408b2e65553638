// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice geometry: values to angular arcs.
//!
//! Angles are in radians in a y-down coordinate system, so angle 0 points along +x and angles
//! increase clockwise (the `kurbo` convention). The first slice starts at the top of the ring.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Arc, Point, Vec2};

use crate::entity::Entity;

/// Angle at which the first slice starts (12 o'clock).
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// One entity's arc segment of the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice<'a> {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Index into the color palette (the entity's position in the dataset).
    pub color_index: usize,
    /// Share of the total, in `0.0..=1.0`.
    pub fraction: f64,
    /// The entity this slice was derived from.
    pub entity: &'a Entity,
}

impl Slice<'_> {
    /// Angular width of the slice.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The slice as a circular arc of the given radius, suitable for stroking.
    pub fn arc(&self, center: Point, radius: f64) -> Arc {
        Arc::new(
            center,
            Vec2::new(radius, radius),
            self.start_angle,
            self.sweep(),
            0.0,
        )
    }
}

/// Splits the ring into one slice per entity, proportional to its value.
///
/// Returns no slices when the total is not positive (empty or all-zero datasets), so no
/// division by zero ever reaches the angles. Zero-valued entities produce zero-sweep slices so
/// slice indices stay aligned with legend rows.
///
/// Values are divided by the largest one before summing, so datasets whose raw sum overflows
/// `f64` still fill the ring.
pub fn compute_slices(entities: &[Entity]) -> Vec<Slice<'_>> {
    let max = entities.iter().map(Entity::value).fold(0.0, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }
    let scaled_total: f64 = entities.iter().map(|e| e.value() / max).sum();

    let mut out = Vec::with_capacity(entities.len());
    let mut angle = START_ANGLE;
    for (i, entity) in entities.iter().enumerate() {
        let fraction = entity.value() / max / scaled_total;
        let sweep = fraction * TAU;
        out.push(Slice {
            start_angle: angle,
            end_angle: angle + sweep,
            color_index: i,
            fraction,
            entity,
        });
        angle += sweep;
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use core::f64::consts::PI;

    use super::*;

    fn dataset(values: &[f64]) -> Vec<Entity> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Entity::new(*v, alloc::format!("e{i}")).unwrap())
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    #[test]
    fn two_entities_split_at_quarter() {
        let entities = vec![
            Entity::new(10.0, "A").unwrap(),
            Entity::new(30.0, "B").unwrap(),
        ];
        let slices = compute_slices(&entities);
        assert_eq!(slices.len(), 2);

        assert_close(slices[0].start_angle, -PI / 2.0);
        assert_close(slices[0].end_angle, 0.0);
        assert_close(slices[0].sweep(), PI / 2.0);
        assert_eq!(slices[0].entity.label(), "A");

        assert_close(slices[1].start_angle, 0.0);
        assert_close(slices[1].end_angle, 3.0 * PI / 2.0);
        assert_close(slices[1].sweep(), 3.0 * PI / 2.0);
        assert_eq!(slices[1].color_index, 1);
        assert_close(slices[1].fraction, 0.75);
    }

    #[test]
    fn sweeps_sum_to_full_turn_and_are_contiguous() {
        let entities = dataset(&[0.1, 3.0, 7.25, 1e-3, 42.0, 0.0, 5.5, 13.0, 2.0, 1.0, 0.33]);
        let slices = compute_slices(&entities);
        assert_eq!(slices.len(), entities.len());
        assert_eq!(slices[0].start_angle, START_ANGLE);

        let sum: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((sum - TAU).abs() < 1e-6, "sum of sweeps {sum}");

        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        assert!(
            slices.iter().all(|s| s.sweep() >= 0.0),
            "no slice may have a negative sweep"
        );
    }

    #[test]
    fn empty_and_zero_totals_yield_no_slices() {
        assert!(compute_slices(&[]).is_empty(), "empty dataset");
        assert!(
            compute_slices(&dataset(&[0.0, 0.0, 0.0])).is_empty(),
            "all-zero dataset"
        );
    }

    #[test]
    fn values_whose_sum_overflows_still_fill_the_ring() {
        let entities = vec![
            Entity::new(f64::MAX, "a").unwrap(),
            Entity::new(f64::MAX, "b").unwrap(),
        ];
        let slices = compute_slices(&entities);
        assert_eq!(slices.len(), 2);
        assert_close(slices[0].fraction, 0.5);
        assert_close(slices[1].fraction, 0.5);
        assert_close(slices[0].sweep() + slices[1].sweep(), TAU);
        assert_close(slices[1].start_angle, START_ANGLE + PI);
    }

    #[test]
    fn zero_value_keeps_its_index() {
        let entities = dataset(&[1.0, 0.0, 1.0]);
        let slices = compute_slices(&entities);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].sweep(), 0.0);
        assert_eq!(slices[2].color_index, 2);
        assert_close(slices[2].start_angle, PI / 2.0);
    }

    #[test]
    fn arc_starts_at_top_of_ring() {
        let entities = dataset(&[1.0]);
        let slices = compute_slices(&entities);
        let arc = slices[0].arc(Point::new(50.0, 50.0), 20.0);
        assert_close(arc.start_angle, START_ANGLE);
        assert_close(arc.sweep_angle, TAU);
        assert_eq!(arc.radii, Vec2::new(20.0, 20.0));
    }
}
