// Copyright 2025 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset transition state machine.
//!
//! A transition plays [`TransitionEffect::ROTATE_AND_FADE`] over its duration and replaces the
//! live dataset exactly once, at the midpoint, while the chart is fully transparent:
//!
//! ```text
//! Idle --request--> Running --Midpoint--> Running (swapped) --Complete--> Idle
//! ```
//!
//! The controller owns no clock. Timer events come back from the host's [`Scheduler`]; each one
//! carries the [`Generation`] of the transition that scheduled it, so events from a replaced or
//! cancelled transition are ignored.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::data_model::{DataModel, DatasetChanged};
use crate::effect::{EffectFrame, TransitionEffect};
use crate::entity::Entity;
use crate::scheduler::{Generation, Scheduler, TimerEvent};

/// Duration used when the host has no preference, in seconds.
pub const DEFAULT_TRANSITION_DURATION: f64 = 1.0;

/// Errors returned when requesting a transition.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    /// The duration is zero, negative, or not finite.
    #[error("transition duration must be finite and positive, got {0}")]
    InvalidDuration(f64),
    /// A transition is running and the policy is [`ReentrancyPolicy::Reject`].
    #[error("a transition is already running")]
    Busy,
}

/// What a request does while another transition is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReentrancyPolicy {
    /// Abandon the running transition and start over from the current live dataset.
    #[default]
    ReplaceAndRestart,
    /// Start the request after the running (and earlier queued) transitions complete.
    Queue,
    /// Refuse the request with [`TransitionError::Busy`].
    Reject,
}

/// Outcome of a successful request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStarted {
    /// The transition is running now.
    Running(Generation),
    /// The transition waits behind `ahead` others.
    Queued {
        /// Number of transitions that run before this one, including the current one.
        ahead: usize,
    },
}

/// A transition in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct RunningTransition {
    /// Identity of this transition.
    pub generation: Generation,
    /// Live dataset when the transition started.
    pub old: Vec<Entity>,
    /// Dataset swapped in at the midpoint.
    pub new: Vec<Entity>,
    /// Clock value when the transition started, in seconds.
    pub start_time: f64,
    /// Total duration in seconds.
    pub duration: f64,
    /// Whether the midpoint swap has happened.
    pub swapped: bool,
}

impl RunningTransition {
    /// Normalized progress at `now`, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }
}

/// Transition phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransitionState {
    /// No transition in flight; the effect is the identity.
    #[default]
    Idle,
    /// A transition is playing.
    Running(RunningTransition),
}

#[derive(Clone, Debug)]
struct QueuedTransition {
    new: Vec<Entity>,
    duration: f64,
}

/// Drives dataset transitions against a [`DataModel`].
#[derive(Clone, Debug, Default)]
pub struct TransitionController {
    state: TransitionState,
    policy: ReentrancyPolicy,
    next_generation: u64,
    queue: VecDeque<QueuedTransition>,
}

impl TransitionController {
    /// An idle controller with the given re-entrancy policy.
    pub fn new(policy: ReentrancyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The re-entrancy policy.
    pub fn policy(&self) -> ReentrancyPolicy {
        self.policy
    }

    /// The current phase.
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Whether a transition is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TransitionState::Running(_))
    }

    /// Number of queued requests (only non-zero under [`ReentrancyPolicy::Queue`]).
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Requests a transition from the live dataset to `new`.
    ///
    /// Returns immediately; the model is not touched until the midpoint event is delivered.
    pub fn request(
        &mut self,
        model: &DataModel,
        new: Vec<Entity>,
        duration: f64,
        now: f64,
        scheduler: &mut dyn Scheduler,
    ) -> Result<TransitionStarted, TransitionError> {
        if !duration.is_finite() || duration <= 0.0 {
            tracing::warn!(duration, "rejected transition with invalid duration");
            return Err(TransitionError::InvalidDuration(duration));
        }

        if let TransitionState::Running(running) = &self.state {
            match self.policy {
                ReentrancyPolicy::Reject => {
                    tracing::debug!(
                        running = running.generation.0,
                        "rejected transition while busy"
                    );
                    return Err(TransitionError::Busy);
                }
                ReentrancyPolicy::Queue => {
                    self.queue.push_back(QueuedTransition { new, duration });
                    let ahead = self.queue.len();
                    tracing::debug!(ahead, "queued transition");
                    return Ok(TransitionStarted::Queued { ahead });
                }
                ReentrancyPolicy::ReplaceAndRestart => {
                    tracing::debug!(
                        replaced = running.generation.0,
                        swapped = running.swapped,
                        "restarting transition"
                    );
                }
            }
        }

        let generation = self.start(model.entities().to_vec(), new, duration, now, scheduler);
        Ok(TransitionStarted::Running(generation))
    }

    fn start(
        &mut self,
        old: Vec<Entity>,
        new: Vec<Entity>,
        duration: f64,
        now: f64,
        scheduler: &mut dyn Scheduler,
    ) -> Generation {
        self.next_generation += 1;
        let generation = Generation(self.next_generation);

        scheduler.run_effect(TransitionEffect::ROTATE_AND_FADE, duration);
        scheduler.schedule(duration * 0.5, TimerEvent::Midpoint(generation));
        scheduler.schedule(duration, TimerEvent::Complete(generation));

        tracing::debug!(
            generation = generation.0,
            duration,
            old_len = old.len(),
            new_len = new.len(),
            "transition started"
        );
        self.state = TransitionState::Running(RunningTransition {
            generation,
            old,
            new,
            start_time: now,
            duration,
            swapped: false,
        });
        generation
    }

    /// Handles a timer event delivered by the scheduler at clock value `now`.
    ///
    /// Returns the change event when the live dataset was replaced. Events from other
    /// generations are ignored. A queued transition started by a `Complete` event begins at
    /// `now`, the same instant the scheduler measures its delays from.
    pub fn on_timer(
        &mut self,
        event: TimerEvent,
        now: f64,
        model: &mut DataModel,
        scheduler: &mut dyn Scheduler,
    ) -> Option<DatasetChanged> {
        let TransitionState::Running(running) = &mut self.state else {
            tracing::trace!(?event, "timer event while idle");
            return None;
        };
        if running.generation != event.generation() {
            tracing::trace!(?event, current = running.generation.0, "stale timer event");
            return None;
        }

        match event {
            TimerEvent::Midpoint(_) => Self::swap(running, model),
            TimerEvent::Complete(_) => {
                // A scheduler may coalesce both events into one frame; the swap still happens
                // exactly once.
                let changed = Self::swap(running, model);
                tracing::debug!(generation = running.generation.0, "transition complete");
                self.state = TransitionState::Idle;

                if let Some(next) = self.queue.pop_front() {
                    self.start(
                        model.entities().to_vec(),
                        next.new,
                        next.duration,
                        now,
                        scheduler,
                    );
                }
                changed
            }
        }
    }

    fn swap(running: &mut RunningTransition, model: &mut DataModel) -> Option<DatasetChanged> {
        if running.swapped {
            return None;
        }
        running.swapped = true;
        tracing::debug!(generation = running.generation.0, "midpoint dataset swap");
        Some(model.set(running.new.clone()))
    }

    /// Abandons the running transition and every queued one.
    ///
    /// The live dataset keeps whatever value it has now, and the scheduler is told to stop the
    /// effect. Returns whether anything was running.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        let cancelled = self.abandon();
        if cancelled {
            scheduler.cancel_effect();
        }
        cancelled
    }

    /// Like [`TransitionController::cancel`], for callers without the scheduler at hand.
    ///
    /// Pending timer events become stale, but a scheduler that plays the effect itself keeps
    /// playing it; [`TransitionController::effect_at`] already reports the identity.
    pub fn abandon(&mut self) -> bool {
        self.queue.clear();
        match core::mem::take(&mut self.state) {
            TransitionState::Idle => false,
            TransitionState::Running(running) => {
                tracing::debug!(
                    generation = running.generation.0,
                    swapped = running.swapped,
                    "transition abandoned"
                );
                true
            }
        }
    }

    /// The effect's visual state at `now`; the identity while idle.
    pub fn effect_at(&self, now: f64) -> EffectFrame {
        match &self.state {
            TransitionState::Idle => EffectFrame::IDENTITY,
            TransitionState::Running(running) => {
                TransitionEffect::ROTATE_AND_FADE.sample(running.progress(now))
            }
        }
    }
}
