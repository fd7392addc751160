//! Scripted walkthrough of the overlay lifecycle against the in-memory
//! host. Sleeps are sized from the configured frame rate so every deferred
//! effect has a chance to fire between snapshots.

use log::info;
use scrim_core::host::{MemoryDocument, Viewport};
use scrim_core::overlay::{self, OverlayManager};
use scrim_core::{Config, ScrimResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub fn run(forever: bool) -> ScrimResult<()> {
    let document = Arc::new(MemoryDocument::new(
        Viewport::new(1440, 900),
        crate::FALLBACK_UA,
    ));
    let manager = overlay::init(document.clone());

    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    ctrlc::set_handler(move || {
        shutdown_clone.store(true, Ordering::SeqCst);
    })
    .map_err(|e| format!("Error setting Ctrl+C handler: {e}"))?;

    loop {
        spinner_pass(&manager, &document);
        bar_pass(&manager, &document);
        if !forever || shutdown.load(Ordering::SeqCst) {
            break;
        }
    }

    Ok(())
}

fn spinner_pass(manager: &OverlayManager, document: &MemoryDocument) {
    let settle = settle_interval();

    info!("Two overlapping requests share one overlay");
    manager.show(Some("Loading data"));
    manager.show(None);
    thread::sleep(settle);
    print_snapshot(document, "both requests in flight");

    manager.hide(false);
    thread::sleep(settle);
    print_snapshot(document, "one request finished, still visible");

    manager.hide(false);
    thread::sleep(settle);
    print_snapshot(document, "idle, inside the teardown window");

    info!("A request arriving inside the window keeps the overlay up");
    manager.show(Some("One more fetch"));
    thread::sleep(teardown_delay() + settle);
    print_snapshot(document, "deadline passed without teardown");

    manager.hide(false);
    thread::sleep(teardown_delay() + settle);
    print_snapshot(document, "teardown fired, scroll restored");
}

fn bar_pass(manager: &OverlayManager, document: &MemoryDocument) {
    let settle = settle_interval();
    let transition = Duration::from_millis(Config::current().bar_transition_ms);

    info!("Progress bar mode");
    manager.bar_start();
    manager.set_bar_progress(30);
    thread::sleep(transition + settle);
    print_snapshot(document, "30 percent");

    manager.set_bar_progress(65);
    thread::sleep(transition + settle);
    print_snapshot(document, "65 percent");

    manager.bar_end();
    thread::sleep(transition * 2 + settle);
    print_snapshot(document, "transition finished, bar unmounted");
}

fn print_snapshot(document: &MemoryDocument, label: &str) {
    println!("--- {label} ---");
    print!("{}", document.snapshot());
}

fn settle_interval() -> Duration {
    let frame_rate = Config::current().frame_rate.max(1);
    Duration::from_millis(u64::from(3000 / frame_rate) + 10)
}

fn teardown_delay() -> Duration {
    Duration::from_millis(Config::current().teardown_delay_ms)
}
