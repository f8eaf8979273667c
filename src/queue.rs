// SPDX-License-Identifier: MPL-2.0
//! Toast queue state machine.
//!
//! At most one toast is displayed at a time; the rest wait in a FIFO
//! queue. The machine is pure: [`ToastQueue::apply`] consumes an event,
//! updates the state, and returns effect descriptions for the runtime to
//! execute. No timer, channel, or task is touched in this module.

use crate::active;
use crate::config::{ToastConfig, ToastId, DISMISS_COOLDOWN_SECS};
use std::collections::VecDeque;
use std::time::Duration;

/// Wait between clearing the display slot and the next promotion attempt.
const COOLDOWN: Duration = Duration::from_secs(DISMISS_COOLDOWN_SECS);

/// Events consumed by the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Append a toast to the pending queue.
    Enqueue(ToastConfig),
    /// Move the next pending toast into the display slot, if it is free.
    Promote,
    /// Clear the display slot and start the cooldown.
    DismissCurrent,
    /// The auto-dismiss timer for this toast fired.
    DismissElapsed(ToastId),
    /// Drop a pending toast. The display slot is never touched.
    RemoveFromQueue(ToastId),
    /// Tap event forwarded from the displayed toast.
    Active(active::Event),
}

/// Effects produced by a transition, executed by the runtime.
///
/// Each effect runs on its own task, so effects returned together carry
/// no ordering guarantee relative to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the auto-dismiss wait for the toast now in the slot.
    ScheduleDismiss { id: ToastId, after: Duration },
    /// Cancel the pending auto-dismiss wait for this toast.
    CancelDismiss { id: ToastId },
    /// Wait out the dismiss cooldown, then attempt a promotion.
    SchedulePromote { after: Duration },
    /// Publish the id on the button-tap stream.
    EmitButtonTap { id: ToastId },
    /// Feed an event back into the queue on its own task.
    Feedback(Event),
}

/// FIFO toast queue with a single display slot.
#[derive(Debug, Default)]
pub struct ToastQueue {
    /// Pending toasts in arrival order.
    queued: VecDeque<ToastConfig>,
    /// The toast currently being displayed, if any.
    current: Option<active::State>,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue with toasts already pending, in the given order.
    #[must_use]
    pub fn with_toasts(toasts: impl IntoIterator<Item = ToastConfig>) -> Self {
        Self {
            queued: toasts.into_iter().collect(),
            current: None,
        }
    }

    /// Creates a queue already displaying the given toast.
    ///
    /// No auto-dismiss timer exists for a toast seeded this way; timers
    /// only start when a promotion schedules one.
    #[must_use]
    pub fn with_current(config: ToastConfig) -> Self {
        Self {
            queued: VecDeque::new(),
            current: Some(active::State::new(config)),
        }
    }

    /// Applies one event and returns the effects to execute.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Enqueue(config) => {
                self.queued.push_back(config);
                self.promote()
            }
            Event::Promote => self.promote(),
            Event::DismissCurrent => self.dismiss_current(),
            Event::DismissElapsed(id) => {
                if self.current.as_ref().is_some_and(|active| active.id() == id) {
                    self.dismiss_current()
                } else {
                    // Stale timer: the toast it belonged to is gone.
                    Vec::new()
                }
            }
            Event::RemoveFromQueue(id) => {
                self.queued.retain(|config| config.id() != id);
                Vec::new()
            }
            Event::Active(active::Event::ButtonTapped) => match &self.current {
                Some(active) => vec![
                    Effect::Feedback(Event::DismissCurrent),
                    Effect::EmitButtonTap { id: active.id() },
                ],
                None => vec![Effect::Feedback(Event::DismissCurrent)],
            },
            Event::Active(active::Event::ToastTapped) => self.dismiss_current(),
        }
    }

    /// Returns the displayed toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&active::State> {
        self.current.as_ref()
    }

    /// Returns the pending toasts in promotion order.
    pub fn queued(&self) -> impl Iterator<Item = &ToastConfig> {
        self.queued.iter()
    }

    /// Returns the number of pending toasts.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Returns whether anything is displayed or pending.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.current.is_some() || !self.queued.is_empty()
    }

    /// Moves the next pending toast into the slot, if the slot is free.
    fn promote(&mut self) -> Vec<Effect> {
        if self.current.is_some() {
            return Vec::new();
        }
        let Some(config) = self.queued.pop_front() else {
            return Vec::new();
        };
        let id = config.id();
        let after = config.duration().to_wait();
        self.current = Some(active::State::new(config));
        vec![Effect::ScheduleDismiss { id, after }]
    }

    /// Clears the slot and starts the cooldown before the next promotion.
    ///
    /// The cancel effect is keyed to the toast captured before the slot
    /// is emptied; the cooldown runs even when the slot was already empty.
    fn dismiss_current(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(active) = self.current.take() {
            effects.push(Effect::CancelDismiss { id: active.id() });
        }
        effects.push(Effect::SchedulePromote { after: COOLDOWN });
        effects
    }
}
