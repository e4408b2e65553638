// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation scheduling capability.
//!
//! The chart never reads a clock. It asks a [`Scheduler`] to play an effect and to deliver
//! [`TimerEvent`]s after a delay; the host hands those events back through
//! `RingChart::handle_timer`. [`QueueScheduler`] is a ready-made implementation for hosts that
//! drive a frame clock themselves.

extern crate alloc;

use alloc::vec::Vec;

use crate::effect::{EffectFrame, TransitionEffect};

/// Identifies one transition. Events carrying an older generation are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

/// A deferred callback requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Halfway through: swap the live dataset.
    Midpoint(Generation),
    /// The effect has finished: return to idle.
    Complete(Generation),
}

impl TimerEvent {
    /// The transition this event belongs to.
    pub fn generation(&self) -> Generation {
        match self {
            Self::Midpoint(g) | Self::Complete(g) => *g,
        }
    }
}

/// Timing primitives provided by the host.
///
/// Times are in seconds. Both calls must return immediately.
pub trait Scheduler {
    /// Starts playing `effect` now, over `duration` seconds.
    fn run_effect(&mut self, effect: TransitionEffect, duration: f64);

    /// Delivers `event` once, `delay` seconds from now.
    fn schedule(&mut self, delay: f64, event: TimerEvent);

    /// Stops the effect started by [`Scheduler::run_effect`], if it is still playing.
    ///
    /// Hosts that sample the chart's own effect instead can leave this as a no-op.
    fn cancel_effect(&mut self) {}
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due: f64,
    seq: u64,
    event: TimerEvent,
}

#[derive(Clone, Copy, Debug)]
struct RunningEffect {
    effect: TransitionEffect,
    start: f64,
    duration: f64,
}

/// A manual clock with a queue of pending timer events.
///
/// Time only moves through [`QueueScheduler::advance_to`], which returns the events that became
/// due, ordered by due time and then by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct QueueScheduler {
    now: f64,
    seq: u64,
    pending: Vec<Pending>,
    effect: Option<RunningEffect>,
}

impl QueueScheduler {
    /// A scheduler at time `0.0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current clock value.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of events not yet delivered.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the earliest pending event.
    pub fn next_due(&self) -> Option<f64> {
        self.pending.iter().map(|p| p.due).reduce(f64::min)
    }

    /// Moves the clock to `now` (never backwards) and returns every event due by then.
    pub fn advance_to(&mut self, now: f64) -> Vec<TimerEvent> {
        if now > self.now {
            self.now = now;
        }
        let clock = self.now;
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= clock);
        self.pending = rest;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        if let Some(effect) = self.effect
            && clock >= effect.start + effect.duration
        {
            self.effect = None;
        }
        due.into_iter().map(|p| p.event).collect()
    }

    /// The most recently started effect, sampled at the current clock.
    ///
    /// Returns [`EffectFrame::IDENTITY`] once the effect has run its course.
    pub fn effect_frame(&self) -> EffectFrame {
        match self.effect {
            Some(e) => e.effect.sample((self.now - e.start) / e.duration),
            None => EffectFrame::IDENTITY,
        }
    }

    /// Drops every pending event and the running effect.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.effect = None;
    }
}

impl Scheduler for QueueScheduler {
    fn run_effect(&mut self, effect: TransitionEffect, duration: f64) {
        self.effect = Some(RunningEffect {
            effect,
            start: self.now,
            duration,
        });
    }

    fn schedule(&mut self, delay: f64, event: TimerEvent) {
        self.seq += 1;
        self.pending.push(Pending {
            due: self.now + delay.max(0.0),
            seq: self.seq,
            event,
        });
    }

    fn cancel_effect(&mut self) {
        self.effect = None;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn events_are_delivered_in_due_order_once() {
        let mut s = QueueScheduler::new();
        s.schedule(1.0, TimerEvent::Complete(Generation(1)));
        s.schedule(0.5, TimerEvent::Midpoint(Generation(1)));
        s.schedule(0.5, TimerEvent::Midpoint(Generation(2)));
        assert_eq!(s.next_due(), Some(0.5));

        assert!(s.advance_to(0.49).is_empty(), "nothing due yet");
        assert_eq!(
            s.advance_to(0.5),
            vec![
                TimerEvent::Midpoint(Generation(1)),
                TimerEvent::Midpoint(Generation(2)),
            ]
        );
        assert_eq!(s.pending_len(), 1);
        assert_eq!(s.advance_to(10.0), vec![TimerEvent::Complete(Generation(1))]);
        assert!(s.advance_to(20.0).is_empty(), "each event fires once");
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut s = QueueScheduler::new();
        s.advance_to(2.0);
        s.advance_to(1.0);
        assert_eq!(s.now(), 2.0);
        s.schedule(0.5, TimerEvent::Midpoint(Generation(0)));
        assert_eq!(s.next_due(), Some(2.5));
    }

    #[test]
    fn effect_is_sampled_against_the_clock() {
        let mut s = QueueScheduler::new();
        assert!(s.effect_frame().is_identity(), "idle scheduler");
        s.run_effect(TransitionEffect::default(), 2.0);
        s.advance_to(0.5);
        let frame = s.effect_frame();
        assert!((frame.opacity - 0.5).abs() < 1e-9, "quarter way: half faded");
        s.advance_to(2.0);
        assert!(s.effect_frame().is_identity(), "effect removed on completion");
    }

    #[test]
    fn cancelled_effect_reports_identity() {
        let mut s = QueueScheduler::new();
        s.run_effect(TransitionEffect::default(), 1.0);
        s.schedule(1.0, TimerEvent::Complete(Generation(1)));
        s.advance_to(0.25);
        assert!(!s.effect_frame().is_identity(), "playing");
        s.cancel_effect();
        assert!(s.effect_frame().is_identity(), "stopped");
        assert_eq!(s.pending_len(), 1, "timer events are left alone");
    }

    #[test]
    fn event_generation() {
        assert_eq!(TimerEvent::Complete(Generation(7)).generation(), Generation(7));
    }
}
