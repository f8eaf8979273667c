// SPDX-License-Identifier: MPL-2.0
//! The toast currently being displayed.
//!
//! This module is the interactive wrapper around the one toast occupying
//! the display slot. It owns no lifecycle of its own: timing and
//! promotion live in the queue, which consumes the events produced here.

use crate::config::{ToastConfig, ToastId};

/// State of the displayed toast: exactly one config, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    config: ToastConfig,
}

impl State {
    /// Wraps the config that just took the display slot.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self { config }
    }

    /// Returns the displayed config.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Returns the displayed toast's ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.config.id()
    }

    /// Consumes the state, handing the config back.
    #[must_use]
    pub fn into_config(self) -> ToastConfig {
        self.config
    }
}

/// Messages from the render surface for the displayed toast.
///
/// These two are the toast's entire interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The action button was tapped.
    ButtonTapped,
    /// The toast body (anywhere but the button) was tapped.
    ToastTapped,
}

/// Events propagated to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The action button was tapped; the queue dismisses the toast and
    /// notifies listeners.
    ButtonTapped,
    /// The body was tapped; the queue only dismisses the toast.
    ToastTapped,
}

/// Process a displayed-toast message and return the corresponding event.
///
/// The state itself never changes here: both taps are decided by the
/// queue, which owns the display slot.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ButtonTapped => Event::ButtonTapped,
        Message::ToastTapped => Event::ToastTapped,
    }
}
