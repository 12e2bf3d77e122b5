//! Live position tracking
//!
//! A [`LiveTracker`] turns a device's geolocation primitives into a
//! [`LiveSession`]: an owned handle holding the rider's latest position and
//! the subscription that keeps it current. Consumers observe positions
//! through a `tokio::sync::watch` channel instead of registering callbacks.
//!
//! Tracking is best-effort. A device that refuses or has no signal never
//! produces an error; the session keeps its last known position (initially
//! the configured fallback center).

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use domain::value_objects::Coordinate;
use futures::StreamExt;
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, instrument, trace, warn};

use crate::ports::{DeviceLocationPort, PositionStream};

/// Starts live tracking sessions against a device
#[derive(Clone)]
pub struct LiveTracker {
    device: Arc<dyn DeviceLocationPort>,
    fallback: Coordinate,
}

impl fmt::Debug for LiveTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveTracker")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl LiveTracker {
    /// Create a tracker with the position shown before the first fix
    pub fn new(device: Arc<dyn DeviceLocationPort>, fallback: Coordinate) -> Self {
        Self { device, fallback }
    }

    /// Position a fresh session reports until the device answers
    #[must_use]
    pub const fn fallback_center(&self) -> Coordinate {
        self.fallback
    }

    /// Begin tracking (Idle -> Tracking)
    ///
    /// Requests a one-shot fix and subscribes to continuous updates. Both are
    /// driven by a background task owned by the returned session, so this
    /// must be called from within a Tokio runtime.
    #[instrument(skip(self))]
    pub fn start(&self) -> LiveSession {
        let (position_tx, position_rx) = watch::channel(self.fallback);
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let active = Arc::new(AtomicBool::new(true));

        let positions = self.device.watch_positions();
        let task = tokio::spawn(track(
            Arc::clone(&self.device),
            positions,
            position_tx,
            Arc::clone(&active),
            cancel_rx,
        ));

        debug!(fallback = %self.fallback, "Live tracking started");

        LiveSession {
            position: position_rx,
            active,
            cancel: Some(cancel_tx),
            task: Some(task),
        }
    }
}

/// Background loop feeding one session
async fn track(
    device: Arc<dyn DeviceLocationPort>,
    mut positions: PositionStream,
    position_tx: watch::Sender<Coordinate>,
    active: Arc<AtomicBool>,
    mut cancel: oneshot::Receiver<()>,
) {
    let initial_fix = async move { device.current_position().await };
    tokio::pin!(initial_fix);

    let mut initial_pending = true;
    let mut stream_open = true;

    loop {
        tokio::select! {
            biased;

            _ = &mut cancel => break,

            fix = &mut initial_fix, if initial_pending => {
                initial_pending = false;
                match fix {
                    Some(position) => publish(&position_tx, &active, position),
                    None => debug!("Device gave no initial fix, keeping fallback"),
                }
            }

            next = positions.next(), if stream_open => match next {
                Some(position) => {
                    // A streamed fix is at least as fresh as the one-shot answer
                    initial_pending = false;
                    publish(&position_tx, &active, position);
                }
                None => {
                    debug!("Device position stream ended");
                    stream_open = false;
                }
            },
        }
    }

    trace!("Live tracking task exiting");
}

fn publish(position_tx: &watch::Sender<Coordinate>, active: &AtomicBool, position: Coordinate) {
    if !active.load(Ordering::Acquire) {
        return;
    }
    trace!(%position, "Position update");
    position_tx.send_replace(position);
}

/// A running (or stopped) tracking session
///
/// The session owns its subscription. Stopping it, or dropping it, cancels
/// the background task and releases the device stream.
pub struct LiveSession {
    position: watch::Receiver<Coordinate>,
    active: Arc<AtomicBool>,
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl fmt::Debug for LiveSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveSession")
            .field("current_position", &self.current_position())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl LiveSession {
    /// Latest known position
    #[must_use]
    pub fn current_position(&self) -> Coordinate {
        *self.position.borrow()
    }

    /// Whether the session is still tracking
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// A receiver for observing position changes, e.g. from a map view
    ///
    /// The receiver sees the channel close once the session is stopped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Coordinate> {
        self.position.clone()
    }

    /// Wait for the next position change
    ///
    /// Returns `None` once tracking has ended.
    pub async fn changed(&mut self) -> Option<Coordinate> {
        if !self.is_active() {
            return None;
        }
        self.position.changed().await.ok()?;
        Some(*self.position.borrow_and_update())
    }

    /// Stop tracking (Tracking -> Idle)
    ///
    /// Idempotent, and safe to call before the first fix. Once this returns,
    /// no late update can change [`current_position`](Self::current_position).
    #[instrument(skip(self))]
    pub async fn stop(&mut self) {
        self.active.store(false, Ordering::Release);

        if let Some(cancel) = self.cancel.take() {
            // The task may already have exited; nothing to cancel then
            let _ = cancel.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Live tracking task ended abnormally");
            }
            debug!(position = %self.current_position(), "Live tracking stopped");
        }
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
