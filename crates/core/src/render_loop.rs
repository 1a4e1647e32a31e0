//! Render loop - redraws the session on a fixed interval from its own thread.
//!
//! Input handling and rendering share one `Mutex<GameSession>`. Mutators take
//! the lock with a blocking `lock()`; the renderer only ever uses `try_lock()`
//! and drops the tick when the lock is busy, so it can never stall input.
//! Each successful tick copies the session into a snapshot, burns one point of
//! time bonus and hands the copy to a [`FrameSink`] after the lock is released.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, TryLockError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::session::GameSession;
use crate::snapshot::SessionSnapshot;

/// Session shared between the input path and the render thread.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Something that can show a frame (a terminal, a test recorder).
pub trait FrameSink: Send + 'static {
    type Error: Display;

    fn present(&mut self, frame: &SessionSnapshot) -> Result<(), Self::Error>;
}

/// One render tick against the shared session.
///
/// Returns false without touching `frame` when the lock is held elsewhere
/// (or poisoned).
pub fn render_tick(session: &Mutex<GameSession>, frame: &mut SessionSnapshot) -> bool {
    let mut guard = match session.try_lock() {
        Ok(guard) => guard,
        Err(TryLockError::WouldBlock) => return false,
        Err(TryLockError::Poisoned(_)) => return false,
    };
    guard.snapshot_into(frame);
    guard.tick_time_bonus();
    true
}

/// Handle to a running render thread.
pub struct RenderLoop<S: FrameSink> {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<S>,
}

impl<S: FrameSink> RenderLoop<S> {
    /// Start rendering `session` every `interval` into `sink`.
    pub fn spawn(session: SharedSession, interval: Duration, sink: S) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || run(session, interval, thread_stop, sink));
        Self { stop, handle }
    }

    /// Stop and wait for the thread, returning the sink.
    ///
    /// Waits at most one interval plus an in-flight frame. Returns None if the
    /// render thread panicked.
    pub fn stop(self) -> Option<S> {
        self.stop.store(true, Ordering::Release);
        self.handle.join().ok()
    }
}

fn run<S: FrameSink>(
    session: SharedSession,
    interval: Duration,
    stop: Arc<AtomicBool>,
    mut sink: S,
) -> S {
    let mut frame = SessionSnapshot::default();
    let mut dropped: u64 = 0;

    while !stop.load(Ordering::Acquire) {
        if render_tick(&session, &mut frame) {
            // The game may have ended while we waited for the lock.
            if stop.load(Ordering::Acquire) {
                break;
            }
            if let Err(e) = sink.present(&frame) {
                warn!(error = %e, "failed to present frame");
            }
        } else {
            dropped += 1;
        }
        thread::sleep(interval);
    }

    debug!(dropped, "render loop stopped");
    sink
}
