// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing the ring and legend against a host drawing context.

use kurbo::{Point, Rect};
use peniko::Color;

use crate::entity::Entity;
use crate::geometry::compute_slices;
use crate::legend::LegendLayoutSpec;
use crate::palette::ColorPalette;
use crate::text::{TextMeasurer, TextStyle};

/// Drawing primitives provided by the host.
///
/// Angles are radians, y-down, increasing clockwise; arcs run clockwise from `start_angle` to
/// `end_angle`.
pub trait DrawContext {
    /// Strokes a circular arc.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
        color: Color,
    );

    /// Fills the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Draws one line of text into `rect`, clipping to it.
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle, color: Color);
}

/// Issues the draw calls for one frame of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    /// Ring stroke thickness.
    pub ring_width: f64,
    /// Legend layout constants.
    pub legend: LegendLayoutSpec,
    /// Legend font.
    pub legend_style: TextStyle,
    /// Legend text color.
    pub legend_text_color: Color,
}

impl Renderer {
    /// Ring center and radius for `bounds`.
    ///
    /// The radius leaves `ring_width` between the ring's centerline and the shorter edge.
    pub fn ring_geometry(&self, bounds: Rect) -> (Point, f64) {
        let radius = bounds.width().min(bounds.height()) * 0.5 - self.ring_width;
        (bounds.center(), radius)
    }

    /// Draws `entities` into `bounds`.
    ///
    /// Slices and legend rows are recomputed on every call. Drawing stops at the first slice the
    /// palette has no color for. Nothing is drawn when the ring does not fit.
    pub fn render(
        &self,
        entities: &[Entity],
        palette: &ColorPalette,
        bounds: Rect,
        measurer: &dyn TextMeasurer,
        ctx: &mut dyn DrawContext,
    ) {
        let (center, radius) = self.ring_geometry(bounds);
        if radius.is_nan() || radius <= 0.0 {
            tracing::trace!(?bounds, "bounds too small for the ring");
            return;
        }

        let slices = compute_slices(entities);
        for slice in &slices {
            let Some(color) = palette.color_for(slice.color_index) else {
                break;
            };
            ctx.stroke_arc(
                center,
                radius,
                slice.start_angle,
                slice.end_angle,
                self.ring_width,
                color,
            );
        }

        let rows = self.legend.rows(
            &slices,
            palette,
            center,
            radius,
            bounds,
            &self.legend_style,
            measurer,
        );
        for row in &rows {
            ctx.fill_ellipse(row.dot, row.dot_color);
            ctx.draw_text(
                &row.text,
                row.text_rect,
                &self.legend_style,
                self.legend_text_color,
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! A `DrawContext` that records calls, for tests.

    extern crate alloc;

    use alloc::string::String;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};
    use peniko::Color;

    use super::DrawContext;
    use crate::text::TextStyle;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum DrawCall {
        Arc {
            center: Point,
            radius: f64,
            start: f64,
            end: f64,
            width: f64,
            color: Color,
        },
        Ellipse {
            rect: Rect,
            color: Color,
        },
        Text {
            text: String,
            rect: Rect,
            color: Color,
        },
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingContext {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl RecordingContext {
        pub(crate) fn arcs(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Arc { .. }))
                .count()
        }

        pub(crate) fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawContext for RecordingContext {
        fn stroke_arc(
            &mut self,
            center: Point,
            radius: f64,
            start_angle: f64,
            end_angle: f64,
            line_width: f64,
            color: Color,
        ) {
            self.calls.push(DrawCall::Arc {
                center,
                radius,
                start: start_angle,
                end: end_angle,
                width: line_width,
                color,
            });
        }

        fn fill_ellipse(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::Ellipse { rect, color });
        }

        fn draw_text(&mut self, text: &str, rect: Rect, _style: &TextStyle, color: Color) {
            self.calls.push(DrawCall::Text {
                text: text.into(),
                rect,
                color,
            });
        }
    }
}
