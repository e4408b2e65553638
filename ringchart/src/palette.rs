// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice color assignment.
//!
//! The palette is a fixed list of [`PALETTE_SIZE`] colors. What happens past the end of the list
//! is an explicit [`PalettePolicy`]: either the chart stops drawing (bounded) or colors repeat
//! (cyclic).

use peniko::Color;
use peniko::color::palette::css;

/// Number of colors in a palette.
pub const PALETTE_SIZE: usize = 6;

/// The default slice colors, in assignment order.
pub const DEFAULT_COLORS: [Color; PALETTE_SIZE] = [
    Color::from_rgb8(42, 232, 129),
    Color::from_rgb8(252, 227, 0),
    css::RED,
    css::BLUE,
    Color::from_rgb8(255, 45, 85),
    Color::from_rgb8(142, 142, 147),
];

/// How slice indices past the end of the palette are colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PalettePolicy {
    /// Indices past the palette have no color.
    ///
    /// Renderers stop at the first uncolored slice, so a dataset with more entities than colors
    /// is truncated: later arcs and legend rows are not drawn.
    Bounded,
    /// Indices wrap around (`index % PALETTE_SIZE`), so every slice is drawn.
    #[default]
    Cyclic,
}

/// A fixed list of slice colors plus the overflow policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    colors: [Color; PALETTE_SIZE],
    policy: PalettePolicy,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(PalettePolicy::default())
    }
}

impl ColorPalette {
    /// The default colors with the given policy.
    pub fn new(policy: PalettePolicy) -> Self {
        Self::from_colors(DEFAULT_COLORS, policy)
    }

    /// Custom colors with the given policy.
    pub fn from_colors(colors: [Color; PALETTE_SIZE], policy: PalettePolicy) -> Self {
        Self { colors, policy }
    }

    /// Sets the overflow policy.
    pub fn with_policy(mut self, policy: PalettePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The overflow policy.
    pub fn policy(&self) -> PalettePolicy {
        self.policy
    }

    /// The colors in assignment order.
    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// Color for the slice at `index`, or `None` when a bounded palette is exhausted.
    pub fn color_for(&self, index: usize) -> Option<Color> {
        match self.policy {
            PalettePolicy::Bounded => self.colors.get(index).copied(),
            PalettePolicy::Cyclic => Some(self.colors[index % PALETTE_SIZE]),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_colors_are_distinct() {
        for (i, a) in DEFAULT_COLORS.iter().enumerate() {
            for b in &DEFAULT_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn bounded_is_defined_only_inside_the_palette() {
        let palette = ColorPalette::new(PalettePolicy::Bounded);
        for (i, color) in DEFAULT_COLORS.iter().enumerate() {
            assert_eq!(palette.color_for(i), Some(*color));
        }
        assert_eq!(palette.color_for(PALETTE_SIZE), None);
        assert_eq!(palette.color_for(100), None);
    }

    #[test]
    fn cyclic_wraps_around() {
        let palette = ColorPalette::new(PalettePolicy::Cyclic);
        for i in 0..40 {
            assert_eq!(palette.color_for(i), palette.color_for(i % PALETTE_SIZE));
        }
        assert_eq!(palette.color_for(7), Some(DEFAULT_COLORS[1]));
    }

    #[test]
    fn default_palette_is_cyclic() {
        assert_eq!(ColorPalette::default().policy(), PalettePolicy::Cyclic);
        let bounded = ColorPalette::default().with_policy(PalettePolicy::Bounded);
        assert_eq!(bounded.policy(), PalettePolicy::Bounded);
    }

    #[test]
    fn custom_colors_are_used_in_order() {
        let colors = [
            css::BLACK,
            css::WHITE,
            css::TOMATO,
            css::GOLD,
            css::TEAL,
            css::NAVY,
        ];
        let palette = ColorPalette::from_colors(colors, PalettePolicy::Bounded);
        assert_eq!(palette.colors(), &colors);
        assert_eq!(palette.color_for(2), Some(css::TOMATO));
    }
}
