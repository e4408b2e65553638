// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend font description and text measurement.
//!
//! Shaping stays with the host. Legend layout only needs a line height, so the chart depends on
//! a small [`TextMeasurer`] trait that a shaping engine or a platform text API can implement.

extern crate alloc;

use alloc::sync::Arc;

/// Font selection and size for legend text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart units (typically points or pixels).
    pub font_size: f64,
    /// Preferred family.
    pub family: FontFamily,
    /// CSS-style weight.
    pub weight: FontWeight,
}

impl TextStyle {
    /// A system-font style at `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            family: FontFamily::System,
            weight: FontWeight::NORMAL,
        }
    }

    /// Sets the family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform UI font.
    System,
    /// A generic monospace family.
    Monospace,
    /// A named family, e.g. `"Inter"`.
    Named(Arc<str>),
}

impl FontFamily {
    /// CSS `font-family` value for this family.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::System => "system-ui, sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `400`.
    pub const NORMAL: Self = Self(400);
    /// `700`.
    pub const BOLD: Self = Self(700);
}

/// Metrics of a single measured line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the whole line.
    pub advance_width: f64,
    /// Baseline to top of typical glyphs.
    pub ascent: f64,
    /// Baseline to bottom of typical glyphs.
    pub descent: f64,
    /// Extra spacing between lines.
    pub leading: f64,
}

impl TextMetrics {
    /// `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Measures single lines of text for layout.
pub trait TextMeasurer {
    /// Measures `text` as one line.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Line height for `style`, independent of content.
    fn line_height(&self, style: &TextStyle) -> f64 {
        self.measure("", style).line_height()
    }
}

/// Estimates metrics from the font size alone.
///
/// Glyphs advance ~0.6em; ascent, descent and leading are 0.8em, 0.2em and 0.2em, which puts a
/// 14pt line at 16.8, close to a typical UI font.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let size = style.font_size;
        TextMetrics {
            advance_width: 0.6 * size * text.chars().count() as f64,
            ascent: 0.8 * size,
            descent: 0.2 * size,
            leading: 0.2 * size,
        }
    }
}
