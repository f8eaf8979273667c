// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the toast runtime, driven on a paused Tokio
//! clock so every duration and cooldown is observed exactly.

use std::time::Duration;
use tokio::sync::watch;
use toastline::{ToastConfig, ToastRuntime};

/// Waits for the displayed toast to change and returns the new title.
async fn next_display(display: &mut watch::Receiver<Option<ToastConfig>>) -> Option<String> {
    display
        .changed()
        .await
        .expect("toast runtime stopped unexpectedly");
    let value = display.borrow_and_update();
    value.as_ref().map(|config| config.title().to_owned())
}

#[tokio::test(start_paused = true)]
async fn toasts_display_in_arrival_order() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();
    let started = tokio::time::Instant::now();

    runtime
        .enqueue(ToastConfig::info("one").with_duration(2.0))
        .expect("enqueue");
    runtime
        .enqueue(ToastConfig::success("two").with_duration(1.0))
        .expect("enqueue");
    runtime
        .enqueue(ToastConfig::error("three").with_duration(3.0))
        .expect("enqueue");

    // First toast runs from 0s to 2s.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("one"));
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::from_secs(2));

    // Second follows after the 1s cooldown and stays up 1s.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("two"));
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::from_secs(4));

    // Third follows the same way.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("three"));
    assert_eq!(started.elapsed(), Duration::from_secs(5));
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::from_secs(8));
}

#[tokio::test(start_paused = true)]
async fn zero_duration_toast_runs_a_full_cycle() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();
    let started = tokio::time::Instant::now();

    runtime
        .enqueue(ToastConfig::info("flash").with_duration(0.0))
        .expect("enqueue");
    runtime.enqueue(ToastConfig::info("follow-up")).expect("enqueue");

    // The zero-duration toast is shown and dismissed without the clock
    // moving at all.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("flash"));
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::ZERO);

    // The successor still waits out the full cooldown.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("follow-up"));
    assert_eq!(started.elapsed(), Duration::from_secs(1));
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn negative_duration_behaves_like_zero() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();
    let started = tokio::time::Instant::now();

    runtime
        .enqueue(ToastConfig::info("bogus").with_duration(-7.5))
        .expect("enqueue");

    assert_eq!(next_display(&mut display).await.as_deref(), Some("bogus"));
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn stale_timer_never_kills_the_successor() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();

    runtime
        .enqueue(ToastConfig::info("first").with_duration(2.0))
        .expect("enqueue");
    runtime
        .enqueue(ToastConfig::info("second").with_duration(60.0))
        .expect("enqueue");
    assert_eq!(next_display(&mut display).await.as_deref(), Some("first"));

    // Tap the body at 1s, one second before the first toast's own timer
    // would have fired.
    tokio::time::sleep(Duration::from_secs(1)).await;
    runtime.tap_toast().expect("tap");
    assert_eq!(next_display(&mut display).await, None);

    // The second toast arrives at 2s, exactly when the dead timer would
    // have fired, and must survive it.
    assert_eq!(next_display(&mut display).await.as_deref(), Some("second"));
    let woke = tokio::time::timeout(Duration::from_secs(10), display.changed()).await;
    assert!(woke.is_err());
    assert_eq!(
        runtime.current().map(|config| config.title().to_owned()),
        Some("second".to_owned())
    );
}

#[tokio::test(start_paused = true)]
async fn removed_toast_is_skipped_over() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();

    let a = ToastConfig::info("a").with_duration(1.0);
    let b = ToastConfig::info("b").with_duration(1.0);
    let c = ToastConfig::info("c").with_duration(1.0);
    let a_id = a.id();
    let b_id = b.id();

    runtime.enqueue(a).expect("enqueue");
    runtime.enqueue(b).expect("enqueue");
    runtime.enqueue(c).expect("enqueue");
    assert_eq!(next_display(&mut display).await.as_deref(), Some("a"));

    // Removing the shown toast's id is a silent no-op; removing a pending
    // one takes it out of rotation.
    runtime.remove_from_queue(a_id).expect("remove");
    runtime.remove_from_queue(b_id).expect("remove");

    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(next_display(&mut display).await.as_deref(), Some("c"));
    assert_eq!(next_display(&mut display).await, None);

    let woke = tokio::time::timeout(Duration::from_secs(10), display.changed()).await;
    assert!(woke.is_err());
}

#[tokio::test(start_paused = true)]
async fn button_tap_reaches_every_listener_once() {
    let runtime = ToastRuntime::new();
    let mut display = runtime.watch_current();
    let mut first_listener = runtime.button_taps();
    let mut second_listener = runtime.button_taps();

    let config = ToastConfig::warning("upload failed")
        .with_duration(60.0)
        .with_button_label("Retry");
    let id = config.id();
    runtime.enqueue(config).expect("enqueue");
    assert!(next_display(&mut display).await.is_some());

    runtime.tap_button().expect("tap");
    assert_eq!(next_display(&mut display).await, None);

    assert_eq!(first_listener.recv().await.expect("notice"), id);
    assert_eq!(second_listener.recv().await.expect("notice"), id);
    assert!(first_listener.try_recv().is_err());
    assert!(second_listener.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn clones_share_the_same_queue() {
    let runtime = ToastRuntime::new();
    let clone = runtime.clone();
    let mut display = runtime.watch_current();

    clone
        .enqueue(ToastConfig::info("from clone").with_duration(1.0))
        .expect("enqueue");
    runtime
        .enqueue(ToastConfig::info("from original").with_duration(1.0))
        .expect("enqueue");

    assert_eq!(next_display(&mut display).await.as_deref(), Some("from clone"));

    // Dropping one handle keeps the shared runtime alive.
    drop(clone);
    assert_eq!(next_display(&mut display).await, None);
    assert_eq!(
        next_display(&mut display).await.as_deref(),
        Some("from original")
    );
}
