// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ring (donut) pie chart with a legend and animated dataset transitions.
//!
//! The crate is split along the decisions a pie chart actually makes:
//! - **Geometry**: values become contiguous angular slices starting at 12 o'clock.
//! - **Palette**: slice indices map to a fixed list of colors, with an explicit policy for
//!   datasets longer than the palette.
//! - **Legend**: one row per slice, stacked and centered inside the ring.
//! - **Transitions**: a state machine that plays a rotate-and-fade effect and swaps the dataset
//!   exactly once, at the midpoint.
//!
//! Windowing, drawing primitives and timing stay with the host. The chart talks to them through
//! the [`DrawContext`], [`Scheduler`] and [`TextMeasurer`] traits.
//!
//! ```
//! use kurbo::Rect;
//! use ringchart::{Entity, HeuristicTextMeasurer, QueueScheduler, RingChart};
//!
//! let mut chart = RingChart::new();
//! let _ = chart.set_dataset(vec![
//!     Entity::new(10.0, "A").unwrap(),
//!     Entity::new(30.0, "B").unwrap(),
//! ]);
//!
//! let mut scheduler = QueueScheduler::new();
//! chart
//!     .animate_transition(vec![Entity::new(1.0, "C").unwrap()], 1.0, 0.0, &mut scheduler)
//!     .unwrap();
//! for event in scheduler.advance_to(1.0) {
//!     let _ = chart.handle_timer(event, 1.0, &mut scheduler);
//! }
//! assert_eq!(chart.entities()[0].label(), "C");
//! assert!(!chart.is_transitioning());
//!
//! // No drawing context yet: the pass is skipped.
//! chart.draw(Rect::new(0.0, 0.0, 320.0, 240.0), &HeuristicTextMeasurer, None);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod data_model;
mod effect;
mod entity;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod legend;
mod palette;
mod render;
mod scheduler;
mod text;
mod transition;
mod widget;

pub use data_model::{DataModel, DatasetChanged};
pub use effect::{EffectFrame, FADE_KEYFRAMES, Keyframe, TransitionEffect};
pub use entity::{Entity, EntityError, total};
pub use geometry::{START_ANGLE, Slice, compute_slices};
pub use legend::{LegendLayoutSpec, LegendRow};
pub use palette::{ColorPalette, DEFAULT_COLORS, PALETTE_SIZE, PalettePolicy};
pub use render::{DrawContext, Renderer};
pub use scheduler::{Generation, QueueScheduler, Scheduler, TimerEvent};
pub use text::{FontFamily, FontWeight, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use transition::{
    DEFAULT_TRANSITION_DURATION, ReentrancyPolicy, RunningTransition, TransitionController,
    TransitionError, TransitionStarted, TransitionState,
};
pub use widget::{RingChart, RingChartStyle, SECONDARY_TEXT};
