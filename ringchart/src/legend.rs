// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend layout.
//!
//! The legend is a single column of rows drawn over the ring's hole: a color dot followed by
//! `"{percentage}% {label}"`. The column is vertically centered on the ring center and
//! horizontally anchored a fixed inset inside the ring's left edge.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

#[cfg(all(not(feature = "std"), not(test)))]
use crate::float::FloatExt;
use crate::geometry::Slice;
use crate::palette::ColorPalette;
use crate::text::{TextMeasurer, TextStyle};

/// A positioned legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Position of the row in the legend (and of its slice in the dataset).
    pub row_index: usize,
    /// Bounds of the color dot.
    pub dot: Rect,
    /// Color of the dot (the slice color).
    pub dot_color: Color,
    /// `floor(fraction * 100)`, in `0..=100`.
    pub percentage: u8,
    /// The row text, `"{percentage}% {label}"`.
    pub text: String,
    /// Box the text is drawn into; its width is clipped to the space left of the right inset.
    pub text_rect: Rect,
}

/// Legend layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayoutSpec {
    /// Side of the color dot.
    pub swatch_size: f64,
    /// Distance from the ring's left edge to the legend column, mirrored on the right.
    pub inset: f64,
    /// Vertical gap added to the line height for each row.
    pub row_gutter: f64,
    /// Horizontal gap between dot and text.
    pub label_dx: f64,
}

impl Default for LegendLayoutSpec {
    fn default() -> Self {
        Self {
            swatch_size: 12.0,
            inset: 48.0,
            row_gutter: 8.0,
            label_dx: 6.0,
        }
    }
}

impl LegendLayoutSpec {
    /// Sets the dot size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size.max(0.0);
        self
    }

    /// Sets the horizontal inset.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Sets the gap between rows.
    pub fn with_row_gutter(mut self, row_gutter: f64) -> Self {
        self.row_gutter = row_gutter.max(0.0);
        self
    }

    /// Sets the gap between dot and text.
    pub fn with_label_dx(mut self, label_dx: f64) -> Self {
        self.label_dx = label_dx;
        self
    }

    /// Lays out one row per colored slice.
    ///
    /// Rows stop at the first slice the palette has no color for. `bounds` is the chart's drawing
    /// area; text boxes end `inset` before its right edge.
    pub fn rows(
        &self,
        slices: &[Slice<'_>],
        palette: &ColorPalette,
        center: Point,
        radius: f64,
        bounds: Rect,
        style: &TextStyle,
        measurer: &dyn TextMeasurer,
    ) -> Vec<LegendRow> {
        let colored: Vec<(&Slice<'_>, Color)> = slices
            .iter()
            .map_while(|slice| palette.color_for(slice.color_index).map(|c| (slice, c)))
            .collect();
        if colored.len() < slices.len() {
            tracing::debug!(
                shown = colored.len(),
                total = slices.len(),
                "legend truncated by bounded palette"
            );
        }

        let line_height = measurer.line_height(style);
        let pitch = line_height + self.row_gutter;
        let top = center.y - colored.len() as f64 * pitch * 0.5;
        let x = center.x - radius + self.inset;

        colored
            .into_iter()
            .enumerate()
            .map(|(i, (slice, dot_color))| {
                let y = top + i as f64 * pitch;
                let dot = Rect::new(x, y, x + self.swatch_size, y + self.swatch_size);
                let text_x = dot.x1 + self.label_dx;
                let text_w = (bounds.x1 - text_x - self.inset).max(0.0);
                let percentage = percentage(slice.fraction);
                LegendRow {
                    row_index: i,
                    dot,
                    dot_color,
                    percentage,
                    text: format!("{percentage}% {}", slice.entity.label()),
                    text_rect: Rect::new(text_x, y, text_x + text_w, y + line_height),
                }
            })
            .collect()
    }
}

fn percentage(fraction: f64) -> u8 {
    let pct = (fraction * 100.0).floor().clamp(0.0, 100.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to 0..=100 above"
    )]
    {
        pct as u8
    }
}
