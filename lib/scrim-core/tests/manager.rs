//! End-to-end checks of the manager thread: commands sent through the
//! channel, deferred effects driven by the frame loop. Sleeps are generous
//! multiples of the 300 ms teardown delay and 200 ms bar transition so the
//! assertions hold on slow runners.

use scrim_core::host::{HostDocument, MemoryDocument, Viewport};
use scrim_core::overlay::{OverlayManager, LINE_CLASS};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/537.36";

fn settle() -> Duration {
    Duration::from_millis(150)
}

#[test]
fn test_counted_overlay_full_cycle() {
    let document = Arc::new(MemoryDocument::new(Viewport::new(1440, 900), UA));
    document.set_body_overflow("auto");
    let manager = OverlayManager::new(document.clone());

    manager.show(Some("Loading"));
    manager.show(None);
    thread::sleep(settle());
    assert_eq!(document.mounted_roots(), 1);
    assert_eq!(document.body_overflow(), "hidden");

    manager.hide(false);
    thread::sleep(settle());
    assert_eq!(document.mounted_roots(), 1);

    manager.hide(false);
    thread::sleep(Duration::from_millis(700));
    assert_eq!(document.mounted_roots(), 0);
    assert_eq!(document.body_overflow(), "auto");
}

#[test]
fn test_bar_overlay_full_cycle() {
    let document = Arc::new(MemoryDocument::new(Viewport::new(1440, 900), UA));
    let manager = OverlayManager::new(document.clone());

    manager.bar_start();
    manager.set_bar_progress(50);
    thread::sleep(Duration::from_millis(500));
    let line = document.find_class(LINE_CLASS).unwrap();
    assert_eq!(
        document.inline_style(line, "width").as_deref(),
        Some("50%")
    );

    manager.bar_end();
    thread::sleep(Duration::from_millis(800));
    assert_eq!(document.mounted_roots(), 0);
}
