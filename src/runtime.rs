// SPDX-License-Identifier: MPL-2.0
//! Async toast runtime.
//!
//! This module runs the queue state machine on a background Tokio task
//! and executes the effects it returns: auto-dismiss timers, the
//! dismiss cooldown, and button-tap notifications. The task is the sole
//! owner of the state, so events are always applied one at a time.

use crate::active;
use crate::config::{ToastConfig, ToastId};
use crate::error::{Error, Result};
use crate::queue::{Effect, Event, ToastQueue};
use log::{debug, trace, warn};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

/// Capacity of the button-tap broadcast channel.
const BUTTON_TAP_CAPACITY: usize = 16;

/// Handle to the background toast queue task.
///
/// Every method is non-blocking. Clones share the same queue; once the
/// last clone is dropped the command channel closes and the task winds
/// down on its own.
#[derive(Debug, Clone)]
pub struct ToastRuntime {
    /// Channel for sending events to the queue task.
    command_tx: mpsc::UnboundedSender<Event>,

    /// Tracks the toast currently occupying the display slot.
    display_rx: watch::Receiver<Option<ToastConfig>>,

    /// Fan-out of ids whose action button was tapped.
    tap_tx: broadcast::Sender<ToastId>,
}

impl ToastRuntime {
    /// Starts the queue task.
    ///
    /// Spawns a Tokio task that owns the queue state, so this must be
    /// called from within a Tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(None);
        let (tap_tx, _) = broadcast::channel(BUTTON_TAP_CAPACITY);

        let runner = Runner {
            queue: ToastQueue::new(),
            command_rx,
            // Timers hold only a weak sender; the channel closes as soon
            // as every public handle is gone.
            feedback_tx: command_tx.downgrade(),
            display_tx,
            tap_tx: tap_tx.clone(),
            dismiss_timer: None,
        };
        tokio::spawn(runner.run());

        Self {
            command_tx,
            display_rx,
            tap_tx,
        }
    }

    /// Adds a toast to the queue.
    ///
    /// The toast is displayed immediately when nothing else is showing,
    /// otherwise it waits its turn in FIFO order.
    pub fn enqueue(&self, config: ToastConfig) -> Result<()> {
        self.send(Event::Enqueue(config))
    }

    /// Drops a pending toast by id.
    ///
    /// Silent no-op when the id is not pending; the displayed toast is
    /// never affected, even if its id matches.
    pub fn remove_from_queue(&self, id: ToastId) -> Result<()> {
        self.send(Event::RemoveFromQueue(id))
    }

    /// Dismisses the displayed toast ahead of its timer.
    pub fn dismiss_current(&self) -> Result<()> {
        self.send(Event::DismissCurrent)
    }

    /// Forwards a tap on the displayed toast's action button.
    ///
    /// The toast is dismissed and its id is published once on the
    /// button-tap stream; the two happen concurrently, in no fixed order.
    pub fn tap_button(&self) -> Result<()> {
        self.send(Event::Active(active::update(&active::Message::ButtonTapped)))
    }

    /// Forwards a tap on the displayed toast's body.
    ///
    /// Dismissal only: nothing is published on the button-tap stream.
    pub fn tap_toast(&self) -> Result<()> {
        self.send(Event::Active(active::update(&active::Message::ToastTapped)))
    }

    /// Returns a snapshot of the displayed toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<ToastConfig> {
        self.display_rx.borrow().clone()
    }

    /// Returns a receiver tracking the displayed toast.
    ///
    /// The render surface subscribes here; the value changes to `Some`
    /// when a toast takes the slot and back to `None` when it leaves.
    #[must_use]
    pub fn watch_current(&self) -> watch::Receiver<Option<ToastConfig>> {
        self.display_rx.clone()
    }

    /// Subscribes to the ids of toasts whose action button was tapped.
    ///
    /// This is the crate's only outbound event stream; body taps are
    /// handled internally and never appear here.
    #[must_use]
    pub fn button_taps(&self) -> broadcast::Receiver<ToastId> {
        self.tap_tx.subscribe()
    }

    fn send(&self, event: Event) -> Result<()> {
        self.command_tx.send(event).map_err(|_| Error::RuntimeClosed)
    }
}

impl Default for ToastRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Background task owning the state machine and executing its effects.
struct Runner {
    queue: ToastQueue,
    command_rx: mpsc::UnboundedReceiver<Event>,
    feedback_tx: mpsc::WeakUnboundedSender<Event>,
    display_tx: watch::Sender<Option<ToastConfig>>,
    tap_tx: broadcast::Sender<ToastId>,
    /// In-flight auto-dismiss timer, keyed by the toast it belongs to.
    dismiss_timer: Option<(ToastId, JoinHandle<()>)>,
}

impl Runner {
    async fn run(mut self) {
        while let Some(event) = self.command_rx.recv().await {
            let effects = self.queue.apply(event);
            self.publish_display();
            for effect in effects {
                self.perform(effect);
            }
        }
        if let Some((_, timer)) = self.dismiss_timer.take() {
            timer.abort();
        }
        debug!("toast runtime stopped");
    }

    /// Pushes the displayed toast to watchers when it actually changed.
    fn publish_display(&self) {
        let shown = self.queue.current().map(|active| active.config().clone());
        let changed = self.display_tx.send_if_modified(|value| {
            if *value == shown {
                false
            } else {
                value.clone_from(&shown);
                true
            }
        });
        if changed {
            match &shown {
                Some(config) => debug!("showing toast {} ({})", config.id(), config.level()),
                None => debug!("display slot cleared"),
            }
        }
    }

    /// Executes one effect. Each effect gets its own task, so effects
    /// from the same transition run concurrently.
    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleDismiss { id, after } => {
                trace!("toast {} auto-dismisses in {:?}", id, after);
                let feedback = self.feedback_tx.clone();
                let timer = tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    if let Some(tx) = feedback.upgrade() {
                        let _ = tx.send(Event::DismissElapsed(id));
                    }
                });
                if let Some((_, stale)) = self.dismiss_timer.replace((id, timer)) {
                    // A replaced timer belongs to a toast that already
                    // left the slot.
                    stale.abort();
                }
            }
            Effect::CancelDismiss { id } => {
                if let Some((timer_id, timer)) = self.dismiss_timer.take() {
                    if timer_id == id {
                        trace!("cancelled auto-dismiss for toast {}", id);
                        timer.abort();
                    } else {
                        self.dismiss_timer = Some((timer_id, timer));
                    }
                }
            }
            Effect::SchedulePromote { after } => {
                let feedback = self.feedback_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    if let Some(tx) = feedback.upgrade() {
                        let _ = tx.send(Event::Promote);
                    }
                });
            }
            Effect::EmitButtonTap { id } => {
                let taps = self.tap_tx.clone();
                tokio::spawn(async move {
                    if taps.send(id).is_err() {
                        warn!("button tap on toast {} had no listeners", id);
                    }
                });
            }
            Effect::Feedback(event) => {
                let feedback = self.feedback_tx.clone();
                tokio::spawn(async move {
                    if let Some(tx) = feedback.upgrade() {
                        let _ = tx.send(event);
                    }
                });
            }
        }
    }
}
