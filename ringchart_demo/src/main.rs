// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring chart demos.
//!
//! Writes `ringchart_demo.html`: a static chart, a transition sampled frame by frame, the two
//! palette policies side by side, and a transition restarted mid-flight.

mod html;
mod svg;

use kurbo::Rect;
use peniko::Color;
use ringchart::{
    ColorPalette, DEFAULT_TRANSITION_DURATION, Entity, EntityError, HeuristicTextMeasurer,
    PalettePolicy, QueueScheduler, RingChart, RingChartStyle,
};

use crate::html::HtmlSection;
use crate::svg::SvgCanvas;

const VIEW: Rect = Rect::new(0.0, 0.0, 320.0, 240.0);
/// System grouped background.
const BACKGROUND: Color = Color::from_rgb8(242, 242, 247);
const FRAMES: u32 = 8;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sections = vec![
        static_demo()?,
        transition_demo()?,
        palette_policy_demo()?,
        restart_demo()?,
    ];

    let html = html::render_report("Ring chart demo", &sections);
    std::fs::write("ringchart_demo.html", html)?;
    tracing::info!(sections = sections.len(), "wrote ringchart_demo.html");
    Ok(())
}

fn dataset(pairs: &[(f64, &str)]) -> Result<Vec<Entity>, EntityError> {
    pairs.iter().map(|(v, l)| Entity::new(*v, *l)).collect()
}

/// Renders the chart's current state, with its effect applied at `now`.
fn frame(chart: &RingChart, now: f64) -> String {
    let mut canvas = SvgCanvas::new(VIEW, BACKGROUND);
    chart.draw(VIEW, &HeuristicTextMeasurer, Some(&mut canvas));
    canvas.to_svg_string(chart.effect_at(now))
}

/// Advances the scheduler and hands due events back to the chart.
fn pump(chart: &mut RingChart, scheduler: &mut QueueScheduler, now: f64) {
    for event in scheduler.advance_to(now) {
        if let Some(changed) = chart.handle_timer(event, now, scheduler) {
            tracing::info!(
                revision = changed.revision,
                len = changed.len,
                now,
                "dataset swapped"
            );
        }
    }
}

fn static_demo() -> Result<HtmlSection, EntityError> {
    let mut chart = RingChart::new();
    let _ = chart.set_dataset(dataset(&[
        (10.0, "Food"),
        (30.0, "Rent"),
        (15.0, "Transport"),
        (5.0, "Fun"),
    ])?);

    Ok(HtmlSection {
        title: "Static".into(),
        caption: "Slices start at 12 o'clock and run clockwise in dataset order.".into(),
        frames: vec![("set_dataset".into(), frame(&chart, 0.0))],
    })
}

fn transition_demo() -> Result<HtmlSection, Box<dyn std::error::Error>> {
    let mut chart = RingChart::new();
    let _ = chart.set_dataset(dataset(&[(10.0, "A"), (30.0, "B")])?);

    let mut scheduler = QueueScheduler::new();
    chart.animate_transition(
        dataset(&[(1.0, "C"), (1.0, "D"), (2.0, "E")])?,
        DEFAULT_TRANSITION_DURATION,
        scheduler.now(),
        &mut scheduler,
    )?;

    let mut frames = Vec::new();
    for i in 0..=FRAMES {
        let now = DEFAULT_TRANSITION_DURATION * f64::from(i) / f64::from(FRAMES);
        pump(&mut chart, &mut scheduler, now);
        frames.push((format!("t = {now:.3}s"), frame(&chart, now)));
    }

    Ok(HtmlSection {
        title: "Transition".into(),
        caption: "One full turn while fading out and back in; the data swaps at the midpoint."
            .into(),
        frames,
    })
}

fn palette_policy_demo() -> Result<HtmlSection, EntityError> {
    let entities: Vec<Entity> = (1..=8)
        .map(|i| Entity::new(f64::from(i), format!("Item {i}")))
        .collect::<Result<_, _>>()?;

    let mut frames = Vec::new();
    for policy in [PalettePolicy::Bounded, PalettePolicy::Cyclic] {
        let style = RingChartStyle::default().with_palette(ColorPalette::new(policy));
        let mut chart = RingChart::with_style(style);
        let _ = chart.set_dataset(entities.clone());
        frames.push((format!("{policy:?}"), frame(&chart, 0.0)));
    }

    Ok(HtmlSection {
        title: "Palette policy".into(),
        caption: "Eight entities, six colors: bounded stops drawing, cyclic reuses colors.".into(),
        frames,
    })
}

fn restart_demo() -> Result<HtmlSection, Box<dyn std::error::Error>> {
    let mut chart = RingChart::new();
    let _ = chart.set_dataset(dataset(&[(1.0, "Old")])?);

    let mut scheduler = QueueScheduler::new();
    chart.animate_transition(dataset(&[(1.0, "Skipped")])?, 1.0, 0.0, &mut scheduler)?;
    pump(&mut chart, &mut scheduler, 0.3);
    let restarted = chart.animate_transition(
        dataset(&[(2.0, "Final"), (1.0, "Other")])?,
        1.0,
        scheduler.now(),
        &mut scheduler,
    )?;
    tracing::info!(?restarted, "restarted transition");

    let mut frames = Vec::new();
    for now in [0.3, 0.6, 0.9, 1.3] {
        pump(&mut chart, &mut scheduler, now);
        frames.push((format!("t = {now:.1}s"), frame(&chart, now)));
    }

    Ok(HtmlSection {
        title: "Replace and restart".into(),
        caption: "A second request at 0.3s abandons the first; its midpoint swap never happens."
            .into(),
        frames,
    })
}
