// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rotate-and-fade effect played during a dataset transition.
//!
//! The effect is described as data (a linear rotation plus opacity keyframes over normalized
//! time) so a host can hand it to whatever animation system it has, or sample it per frame with
//! [`TransitionEffect::sample`].

use core::f64::consts::TAU;

use kurbo::{Affine, Point};

/// A value at a normalized time in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Normalized time.
    pub time: f64,
    /// Value at `time`.
    pub value: f64,
}

impl Keyframe {
    const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Opacity keyframes: fade out over the first half, hold fully transparent across the swap,
/// fade back in over the second half.
///
/// The short hold after `0.5` keeps the swapped-in dataset from popping in at full opacity.
pub const FADE_KEYFRAMES: [Keyframe; 4] = [
    Keyframe::new(0.0, 1.0),
    Keyframe::new(0.5, 0.0),
    Keyframe::new(0.5001, 0.0),
    Keyframe::new(1.0, 1.0),
];

/// Rotation plus opacity, played over a transition's duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionEffect {
    /// Rotation (radians) at the start of the effect.
    pub rotation_from: f64,
    /// Rotation (radians) at the end of the effect.
    pub rotation_to: f64,
    /// Opacity keyframes, sorted by time, all segments linear.
    pub opacity: [Keyframe; 4],
}

impl Default for TransitionEffect {
    fn default() -> Self {
        Self::ROTATE_AND_FADE
    }
}

impl TransitionEffect {
    /// One full clockwise turn while fading out and back in.
    pub const ROTATE_AND_FADE: Self = Self {
        rotation_from: 0.0,
        rotation_to: TAU,
        opacity: FADE_KEYFRAMES,
    };

    /// Samples the effect at normalized `progress` (clamped to `0.0..=1.0`).
    pub fn sample(&self, progress: f64) -> EffectFrame {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        EffectFrame {
            rotation: self.rotation_from + (self.rotation_to - self.rotation_from) * t,
            opacity: interpolate(&self.opacity, t),
        }
    }
}

fn interpolate(keys: &[Keyframe], t: f64) -> f64 {
    let Some(first) = keys.first() else {
        return 1.0;
    };
    if t <= first.time {
        return first.value;
    }
    for pair in keys.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.time {
            let span = b.time - a.time;
            if span <= 0.0 {
                return b.value;
            }
            return a.value + (b.value - a.value) * (t - a.time) / span;
        }
    }
    keys[keys.len() - 1].value
}

/// The effect's visual state at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectFrame {
    /// Rotation in radians, applied about the ring center.
    pub rotation: f64,
    /// Opacity of the whole chart in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for EffectFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl EffectFrame {
    /// No rotation, fully opaque.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Whether this frame leaves the chart untouched.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The rotation as an affine transform about `center`.
    pub fn transform(&self, center: Point) -> Affine {
        Affine::rotate_about(self.rotation, center)
    }
}
