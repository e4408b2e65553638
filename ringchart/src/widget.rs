// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ring chart widget.
//!
//! [`RingChart`] is meant to be embedded in whatever view type the host toolkit provides. The
//! host forwards three things to it: dataset updates, timer events from its [`Scheduler`], and
//! repaint requests with a [`DrawContext`]. Every mutation returns a [`DatasetChanged`] when the
//! visible data changed; invalidating the view is up to the host.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use crate::data_model::{DataModel, DatasetChanged};
use crate::effect::EffectFrame;
use crate::entity::Entity;
use crate::legend::LegendLayoutSpec;
use crate::palette::ColorPalette;
use crate::render::{DrawContext, Renderer};
use crate::scheduler::{Scheduler, TimerEvent};
use crate::text::{TextMeasurer, TextStyle};
use crate::transition::{
    ReentrancyPolicy, TransitionController, TransitionError, TransitionStarted, TransitionState,
};

/// Secondary label gray (`#3C3C43` at 60% alpha).
pub const SECONDARY_TEXT: Color = Color::from_rgba8(60, 60, 67, 153);

/// Appearance and behavior options for a [`RingChart`].
#[derive(Clone, Debug, PartialEq)]
pub struct RingChartStyle {
    /// Ring stroke thickness.
    pub ring_width: f64,
    /// Legend font.
    pub legend_style: TextStyle,
    /// Legend text color.
    pub legend_text_color: Color,
    /// Legend layout constants.
    pub legend: LegendLayoutSpec,
    /// Slice colors and overflow policy.
    pub palette: ColorPalette,
    /// What a transition request does while another one is running.
    pub reentrancy: ReentrancyPolicy,
}

impl Default for RingChartStyle {
    fn default() -> Self {
        Self {
            ring_width: 16.0,
            legend_style: TextStyle::new(14.0),
            legend_text_color: SECONDARY_TEXT,
            legend: LegendLayoutSpec::default(),
            palette: ColorPalette::default(),
            reentrancy: ReentrancyPolicy::default(),
        }
    }
}

impl RingChartStyle {
    /// Sets the ring thickness.
    pub fn with_ring_width(mut self, ring_width: f64) -> Self {
        self.ring_width = ring_width.max(0.0);
        self
    }

    /// Sets the legend font.
    pub fn with_legend_style(mut self, style: TextStyle) -> Self {
        self.legend_style = style;
        self
    }

    /// Sets the legend text color.
    pub fn with_legend_text_color(mut self, color: Color) -> Self {
        self.legend_text_color = color;
        self
    }

    /// Sets the legend layout constants.
    pub fn with_legend(mut self, legend: LegendLayoutSpec) -> Self {
        self.legend = legend;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the re-entrancy policy.
    pub fn with_reentrancy(mut self, policy: ReentrancyPolicy) -> Self {
        self.reentrancy = policy;
        self
    }
}

/// A ring pie chart with a legend and animated dataset transitions.
#[derive(Clone, Debug)]
pub struct RingChart {
    model: DataModel,
    transitions: TransitionController,
    palette: ColorPalette,
    renderer: Renderer,
}

impl Default for RingChart {
    fn default() -> Self {
        Self::new()
    }
}

impl RingChart {
    /// An empty chart with the default style.
    pub fn new() -> Self {
        Self::with_style(RingChartStyle::default())
    }

    /// An empty chart with `style`.
    pub fn with_style(style: RingChartStyle) -> Self {
        Self {
            model: DataModel::new(),
            transitions: TransitionController::new(style.reentrancy),
            palette: style.palette,
            renderer: Renderer {
                ring_width: style.ring_width,
                legend: style.legend,
                legend_style: style.legend_style,
                legend_text_color: style.legend_text_color,
            },
        }
    }

    /// The live dataset.
    pub fn entities(&self) -> &[Entity] {
        self.model.entities()
    }

    /// Revision of the live dataset.
    pub fn revision(&self) -> u64 {
        self.model.revision()
    }

    /// The palette in use.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// The renderer in use.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Current transition phase.
    pub fn transition_state(&self) -> &TransitionState {
        self.transitions.state()
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_running()
    }

    /// Replaces the dataset immediately, without animation.
    ///
    /// Any running or queued transition is abandoned so its midpoint swap cannot overwrite this
    /// value later. The scheduler is not reachable here, so an effect it plays itself keeps
    /// playing; [`RingChart::effect_at`] reports the identity right away. Use
    /// [`RingChart::cancel_transition`] first to stop the scheduler's effect too.
    pub fn set_dataset(&mut self, entities: Vec<Entity>) -> DatasetChanged {
        if self.transitions.abandon() {
            tracing::debug!("set_dataset abandoned a running transition");
        }
        self.model.set(entities)
    }

    /// Starts an animated transition to `to`.
    ///
    /// `now` is the scheduler's clock in seconds. The live dataset changes when the midpoint
    /// event is handed back through [`RingChart::handle_timer`].
    pub fn animate_transition(
        &mut self,
        to: Vec<Entity>,
        duration: f64,
        now: f64,
        scheduler: &mut dyn Scheduler,
    ) -> Result<TransitionStarted, TransitionError> {
        self.transitions
            .request(&self.model, to, duration, now, scheduler)
    }

    /// Handles a timer event scheduled by this chart, delivered at clock value `now`.
    pub fn handle_timer(
        &mut self,
        event: TimerEvent,
        now: f64,
        scheduler: &mut dyn Scheduler,
    ) -> Option<DatasetChanged> {
        self.transitions
            .on_timer(event, now, &mut self.model, scheduler)
    }

    /// Abandons the running transition (and queued ones) without touching the live dataset, and
    /// stops the scheduler's effect.
    pub fn cancel_transition(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        self.transitions.cancel(scheduler)
    }

    /// Rotation and opacity the host should apply to the whole chart at `now`.
    pub fn effect_at(&self, now: f64) -> EffectFrame {
        self.transitions.effect_at(now)
    }

    /// Repaints the chart into `bounds`.
    ///
    /// Without a drawing context (host not ready) the pass is skipped.
    pub fn draw(
        &self,
        bounds: Rect,
        measurer: &dyn TextMeasurer,
        ctx: Option<&mut dyn DrawContext>,
    ) {
        let Some(ctx) = ctx else {
            tracing::trace!("no drawing context, skipping draw");
            return;
        };
        self.renderer
            .render(self.model.entities(), &self.palette, bounds, measurer, ctx);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::palette::PalettePolicy;
    use crate::render::recording::RecordingContext;
    use crate::scheduler::QueueScheduler;
    use crate::text::HeuristicTextMeasurer;

    #[test]
    fn default_style_matches_documented_defaults() {
        let style = RingChartStyle::default();
        assert_eq!(style.ring_width, 16.0);
        assert_eq!(style.legend_style.font_size, 14.0);
        assert_eq!(style.legend_text_color, SECONDARY_TEXT);
        assert_eq!(style.palette.policy(), PalettePolicy::Cyclic);
        assert_eq!(style.reentrancy, ReentrancyPolicy::ReplaceAndRestart);
    }

    #[test]
    fn set_dataset_replaces_immediately() {
        let mut chart = RingChart::new();
        let changed = chart.set_dataset(vec![Entity::new(1.0, "a").unwrap()]);
        assert_eq!(changed.revision, 1);
        assert_eq!(chart.entities().len(), 1);
        assert!(!chart.is_transitioning(), "no animation");
    }

    #[test]
    fn set_dataset_wins_over_a_pending_midpoint() {
        let mut chart = RingChart::new();
        let mut sched = QueueScheduler::new();
        let target = vec![Entity::new(2.0, "old-target").unwrap()];
        chart
            .animate_transition(target, 1.0, 0.0, &mut sched)
            .unwrap();
        let _ = chart.set_dataset(vec![Entity::new(3.0, "direct").unwrap()]);

        for event in sched.advance_to(1.0) {
            assert!(chart.handle_timer(event, 1.0, &mut sched).is_none(), "stale event");
        }
        assert_eq!(chart.entities()[0].label(), "direct");
    }

    #[test]
    fn cancel_transition_stops_the_scheduler_effect() {
        let mut chart = RingChart::new();
        let mut sched = QueueScheduler::new();
        let _ = chart.set_dataset(vec![Entity::new(1.0, "a").unwrap()]);
        let target = vec![Entity::new(2.0, "b").unwrap()];
        chart
            .animate_transition(target, 1.0, 0.0, &mut sched)
            .unwrap();
        sched.advance_to(0.25);
        assert!(!sched.effect_frame().is_identity(), "effect playing");

        assert!(chart.cancel_transition(&mut sched), "was running");
        assert!(sched.effect_frame().is_identity(), "scheduler effect stopped");
        assert!(chart.effect_at(0.25).is_identity(), "chart effect stopped");
        assert_eq!(chart.entities()[0].label(), "a");
    }

    #[test]
    fn draw_without_context_is_a_no_op() {
        let mut chart = RingChart::new();
        let _ = chart.set_dataset(vec![Entity::new(1.0, "a").unwrap()]);
        let revision = chart.revision();
        chart.draw(Rect::new(0.0, 0.0, 200.0, 200.0), &HeuristicTextMeasurer, None);
        assert_eq!(chart.revision(), revision);
    }

    #[test]
    fn draw_uses_the_configured_ring_width() {
        let mut chart = RingChart::with_style(RingChartStyle::default().with_ring_width(10.0));
        let _ = chart.set_dataset(vec![Entity::new(1.0, "a").unwrap()]);
        let mut ctx = RecordingContext::default();
        chart.draw(
            Rect::new(0.0, 0.0, 200.0, 200.0),
            &HeuristicTextMeasurer,
            Some(&mut ctx),
        );
        assert_eq!(ctx.arcs(), 1);
        assert_eq!(ctx.texts(), vec!["100% a"]);
        assert_eq!(chart.renderer().ring_geometry(Rect::new(0.0, 0.0, 200.0, 200.0)).1, 90.0);
    }
}
