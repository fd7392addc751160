use crate::animation::{ease_in_out_cubic, Animator};
use crate::config::Config;
use crate::host::{HostDocument, NodeId};
use crate::overlay::content::{OverlayContent, LINE_CLASS};
use crate::overlay::style::{OverlayStyle, STYLE_MARKER};
use log::{debug, error, warn};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

pub enum OverlayCommand {
    Show { text: Option<String> },
    Hide { force: bool },
    BarStart,
    BarProgress { percent: i32 },
    BarEnd,
    Shutdown,
}

/// Owner of the overlay state. Commands are applied in send order on a
/// dedicated thread; the thread also drives the two deferred effects (the
/// idle-teardown deadline and coalesced progress width updates).
pub struct OverlayManager {
    command_sender: mpsc::UnboundedSender<OverlayCommand>,
    manager_thread: Option<thread::JoinHandle<()>>,
}

impl OverlayManager {
    pub fn new(document: Arc<dyn HostDocument>) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let manager_thread = thread::spawn(move || {
            let rt = Runtime::new().unwrap();
            rt.block_on(Self::run_manager(document, command_rx));
        });

        Self {
            command_sender: command_tx,
            manager_thread: Some(manager_thread),
        }
    }

    async fn run_manager(
        document: Arc<dyn HostDocument>,
        mut command_rx: mpsc::UnboundedReceiver<OverlayCommand>,
    ) {
        let config = Config::current();
        let mut state = LoadingState::new(document, OverlayStyle::from_config(&config));
        let frame = Duration::from_secs_f64(1.0 / config.frame_rate.max(1) as f64);
        let mut running = true;

        while running {
            // Process all pending commands
            loop {
                let cmd = match command_rx.try_recv() {
                    Ok(cmd) => cmd,
                    Err(_) => break,
                };

                match cmd {
                    OverlayCommand::Show { text } => state.show(text),
                    OverlayCommand::Hide { force } => state.hide(force, Instant::now()),
                    OverlayCommand::BarStart => state.bar_start(),
                    OverlayCommand::BarProgress { percent } => state.set_bar_progress(percent),
                    OverlayCommand::BarEnd => state.bar_end(),
                    OverlayCommand::Shutdown => {
                        running = false;
                        break;
                    }
                }
            }

            if !running {
                break;
            }

            state.advance(Instant::now());
            tokio::time::sleep(frame).await;
        }
    }

    /// Mounts the spinner overlay (first call) and raises the request count.
    pub fn show(&self, text: Option<&str>) {
        let _ = self.command_sender.send(OverlayCommand::Show {
            text: text.map(str::to_owned),
        });
    }

    /// Lowers the request count; `force` drops it to zero outright. The
    /// overlay unmounts after the idle delay once the count reaches zero.
    pub fn hide(&self, force: bool) {
        let _ = self.command_sender.send(OverlayCommand::Hide { force });
    }

    /// Mounts the progress-bar overlay, replacing whatever is visible.
    pub fn bar_start(&self) {
        let _ = self.command_sender.send(OverlayCommand::BarStart);
    }

    /// Updates the progress line. Values outside 1..=100 are ignored.
    pub fn set_bar_progress(&self, percent: i32) {
        let _ = self
            .command_sender
            .send(OverlayCommand::BarProgress { percent });
    }

    /// Drives the line to 100% and unmounts once the transition finishes.
    pub fn bar_end(&self) {
        let _ = self.command_sender.send(OverlayCommand::BarEnd);
    }
}

impl Drop for OverlayManager {
    fn drop(&mut self) {
        let _ = self.command_sender.send(OverlayCommand::Shutdown);
        if let Some(thread) = self.manager_thread.take() {
            let _ = thread.join();
        }
    }
}

struct OverlayHandle {
    root: NodeId,
    /// Present in bar mode only.
    line: Option<NodeId>,
}

/// The overlay state machine. All mutation happens on the manager thread;
/// time is passed in explicitly so the transitions are testable.
pub(crate) struct LoadingState {
    document: Arc<dyn HostDocument>,
    style: OverlayStyle,
    ref_count: u32,
    handle: Option<OverlayHandle>,
    saved_overflow: Option<String>,
    teardown_at: Option<Instant>,
    progress: u8,
    pending_progress: Option<u8>,
    width_animator: Animator<f64>,
    bar_ending: bool,
}

impl LoadingState {
    pub(crate) fn new(document: Arc<dyn HostDocument>, style: OverlayStyle) -> Self {
        Self {
            document,
            style,
            ref_count: 0,
            handle: None,
            saved_overflow: None,
            teardown_at: None,
            progress: 0,
            pending_progress: None,
            width_animator: Animator::new(0.0, 0.0, ease_in_out_cubic),
            bar_ending: false,
        }
    }

    pub(crate) fn show(&mut self, text: Option<String>) {
        self.document
            .ensure_style(STYLE_MARKER, &self.style.stylesheet());

        if self.ref_count == 0 {
            // Discard anything left over from a pending deferred teardown
            // (or an abandoned bar) before mounting the fresh mask.
            self.teardown();

            match self.document.mount(OverlayContent::Spinner { text }.build()) {
                Ok(root) => {
                    self.handle = Some(OverlayHandle { root, line: None });
                    self.lock_scroll();
                    debug!("Mounted loading overlay (node {root})");
                }
                Err(e) => error!("Failed to mount loading overlay: {e}"),
            }
        }

        self.ref_count += 1;
    }

    pub(crate) fn hide(&mut self, force: bool, now: Instant) {
        if self.handle.is_none() || self.ref_count == 0 {
            self.ref_count = 0;
            return;
        }

        if force {
            self.ref_count = 0;
        } else {
            self.ref_count -= 1;
        }

        if self.ref_count == 0 {
            self.teardown_at = Some(now + self.style.teardown_delay);
            debug!(
                "Loading overlay idle, teardown in {:?}",
                self.style.teardown_delay
            );
        }
    }

    pub(crate) fn bar_start(&mut self) {
        self.document
            .ensure_style(STYLE_MARKER, &self.style.stylesheet());

        // Single-instance mode: whatever is mounted gets replaced, and the
        // reference count is deliberately left alone.
        self.teardown();

        match self.document.mount(OverlayContent::Bar.build()) {
            Ok(root) => {
                let line = self.document.node_by_class(root, LINE_CLASS);
                if line.is_none() {
                    warn!("Progress overlay mounted without a line node");
                }
                self.handle = Some(OverlayHandle { root, line });
                self.lock_scroll();
                debug!("Mounted progress overlay (node {root})");
            }
            Err(e) => error!("Failed to mount progress overlay: {e}"),
        }
    }

    pub(crate) fn set_bar_progress(&mut self, percent: i32) {
        if !(1..=100).contains(&percent) {
            return;
        }
        if self.line().is_none() {
            return;
        }
        self.progress = percent as u8;
        // Last value wins within a frame.
        self.pending_progress = Some(percent as u8);
    }

    pub(crate) fn bar_end(&mut self) {
        if self.line().is_none() {
            return;
        }
        // One-shot completion latch, consumed when the width transition
        // reaches its endpoint.
        self.bar_ending = true;
        self.progress = 100;
        self.pending_progress = Some(100);
    }

    pub(crate) fn advance(&mut self, now: Instant) {
        if let Some(deadline) = self.teardown_at {
            if now >= deadline {
                self.teardown_at = None;
                // Re-check at fire time: a show() inside the window raised
                // the count and owns the handle now.
                if self.ref_count == 0 {
                    self.teardown();
                }
            }
        }

        if let Some(target) = self.pending_progress.take() {
            self.width_animator
                .start(f64::from(target), self.style.bar_transition, now);
        }

        if self.width_animator.is_animating() {
            if let Some(width) = self.width_animator.update(now) {
                self.apply_width(width);
                if !self.width_animator.is_animating() && self.bar_ending && width >= 100.0 {
                    self.bar_ending = false;
                    debug!("Progress transition finished");
                    self.teardown();
                }
            }
        }
    }

    fn line(&self) -> Option<NodeId> {
        self.handle.as_ref().and_then(|handle| handle.line)
    }

    fn apply_width(&self, width: f64) {
        if let Some(line) = self.line() {
            if let Err(e) = self
                .document
                .set_style(line, "width", &format!("{width}%"))
            {
                error!("Failed to update progress width: {e}");
            }
        }
    }

    fn lock_scroll(&mut self) {
        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(self.document.body_overflow());
        }
        self.document.set_body_overflow("hidden");
    }

    fn unlock_scroll(&mut self) {
        if let Some(overflow) = self.saved_overflow.take() {
            self.document.set_body_overflow(&overflow);
        }
    }

    fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            match self.document.unmount(handle.root) {
                Ok(()) => debug!("Removed overlay node {}", handle.root),
                Err(e) => error!("Failed to unmount overlay: {e}"),
            }
        }
        self.teardown_at = None;
        self.unlock_scroll();
        self.progress = 0;
        self.pending_progress = None;
        self.bar_ending = false;
        self.width_animator = Animator::new(0.0, 0.0, ease_in_out_cubic);
    }
}
