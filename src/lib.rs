// SPDX-License-Identifier: MPL-2.0
//! `toastline` is a headless toast notification queue.
//!
//! One toast is visible at a time while the rest wait in FIFO order.
//! Toasts dismiss themselves after their configured duration, can be
//! dismissed early by tapping, and a fixed one-second cooldown separates
//! consecutive toasts. The crate renders nothing: a UI layer subscribes
//! to the displayed toast and forwards tap events back in.
//!
//! The core lives in [`queue::ToastQueue`], a pure state machine whose
//! transitions return effect descriptions. [`runtime::ToastRuntime`]
//! drives it on a background Tokio task and is the handle most callers
//! want:
//!
//! ```no_run
//! use toastline::{ToastConfig, ToastRuntime};
//!
//! # async fn demo() -> toastline::Result<()> {
//! let toasts = ToastRuntime::new();
//! toasts.enqueue(ToastConfig::success("Saved").with_button_label("Undo"))?;
//!
//! let mut display = toasts.watch_current();
//! while display.changed().await.is_ok() {
//!     match display.borrow_and_update().as_ref() {
//!         Some(toast) => println!("showing: {}", toast.title()),
//!         None => println!("slot empty"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/toastline/0.2.0")]

pub mod active;
pub mod config;
pub mod error;
pub mod queue;
pub mod runtime;

pub use config::{ToastConfig, ToastDuration, ToastId, ToastLevel};
pub use error::{Error, Result};
pub use queue::ToastQueue;
pub use runtime::ToastRuntime;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
