// SPDX-License-Identifier: MPL-2.0
//! Toast description data.
//!
//! This module defines the `ToastConfig` value type handed to the queue,
//! along with its supporting types (`ToastId`, `ToastLevel`,
//! `ToastDuration`) and the timing constants shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;
use uuid::Uuid;

/// Seconds a toast stays on screen when the caller does not override.
pub const DEFAULT_TOAST_DURATION_SECS: f64 = 4.0;

/// Gap in seconds between a dismissal and the next promotion attempt.
pub const DISMISS_COOLDOWN_SECS: u64 = 1;

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_SECS > 0.0);
    assert!(DISMISS_COOLDOWN_SECS > 0);
};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Creates a new random toast ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level of a toast.
///
/// Purely presentational: the level never affects timing, ordering, or any
/// other queue behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Neutral informational message.
    Info,
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Error,
    /// Something needs attention but did not fail.
    Warning,
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
        };
        write!(f, "{}", name)
    }
}

/// Display duration of a toast, in seconds.
///
/// No validation is performed: zero and negative values are accepted and
/// collapse the display window, so the auto-dismiss timer fires
/// immediately. Equality and hashing use the bit pattern of the inner
/// `f64`, which keeps `Eq` and `Hash` lawful for every accepted input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastDuration(f64);

impl ToastDuration {
    /// Wraps a duration expressed in seconds.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Converts to the wait before auto-dismissal.
    ///
    /// Non-positive and NaN values map to a zero wait; values too large
    /// for `Duration` saturate at `Duration::MAX`.
    #[must_use]
    pub fn to_wait(self) -> Duration {
        if self.0 > 0.0 {
            Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_SECS)
    }
}

impl PartialEq for ToastDuration {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for ToastDuration {}

impl Hash for ToastDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Describes a single toast to display.
///
/// A `ToastConfig` is an immutable value: once enqueued it is never
/// mutated, only moved between the pending queue and the display slot.
/// Equality and hashing cover every field, the id included, so two
/// configs are interchangeable only when their entire content matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Unique identifier, freshly generated unless overridden.
    id: ToastId,
    /// Main text of the toast.
    title: String,
    /// Optional secondary line below the title.
    subtitle: Option<String>,
    /// Presentation severity.
    level: ToastLevel,
    /// How long the toast stays up before auto-dismissal.
    duration: ToastDuration,
    /// Label of the action button; its presence is what signals that the
    /// toast carries a button at all.
    button_label: Option<String>,
}

impl ToastConfig {
    /// Creates a toast with the given title and level.
    ///
    /// The duration defaults to [`DEFAULT_TOAST_DURATION_SECS`]; subtitle
    /// and button label default to absent. Nothing is validated: empty
    /// titles and absurd durations are accepted as-is.
    pub fn new(title: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: ToastId::new(),
            title: title.into(),
            subtitle: None,
            level,
            duration: ToastDuration::default(),
            button_label: None,
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, ToastLevel::Info)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastLevel::Success)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, ToastLevel::Error)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, ToastLevel::Warning)
    }

    /// Replaces the generated id with an explicit one.
    #[must_use]
    pub fn with_id(mut self, id: ToastId) -> Self {
        self.id = id;
        self
    }

    /// Adds a secondary text line.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Overrides the display duration, in seconds.
    #[must_use]
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration = ToastDuration::from_secs(secs);
        self
    }

    /// Adds an action button with the given label.
    #[must_use]
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the main text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the secondary text line, if any.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the presentation severity.
    #[must_use]
    pub fn level(&self) -> ToastLevel {
        self.level
    }

    /// Returns the display duration.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    /// Returns the action button label, if any.
    #[must_use]
    pub fn button_label(&self) -> Option<&str> {
        self.button_label.as_deref()
    }

    /// Returns whether this toast carries an action button.
    #[must_use]
    pub fn has_button(&self) -> bool {
        self.button_label.is_some()
    }
}
