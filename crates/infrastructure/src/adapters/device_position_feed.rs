//! Device position feed - Implements DeviceLocationPort over pushed fixes
//!
//! The surrounding service (for instance a socket handler receiving a
//! rider's GPS fixes) pushes positions into the feed; live tracking sessions
//! consume them through the device port. The latest fix answers one-shot
//! requests, and every pushed fix is broadcast to active watchers.

use std::time::Duration;

use application::ports::{DeviceLocationPort, PositionStream};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use futures::StreamExt;
use futures::stream;
use tokio::sync::{broadcast, watch};
use tracing::{debug, instrument, warn};

/// Default number of fixes buffered per watcher
pub const DEFAULT_FEED_CAPACITY: usize = 64;

/// Broadcast-backed device location source
#[derive(Debug)]
pub struct DevicePositionFeed {
    updates: broadcast::Sender<Coordinate>,
    latest: watch::Sender<Option<Coordinate>>,
    fix_timeout: Duration,
}

impl DevicePositionFeed {
    /// Create a feed
    ///
    /// `fix_timeout` bounds how long a one-shot request waits for a first
    /// fix when none has been pushed yet.
    pub fn new(capacity: usize, fix_timeout: Duration) -> Self {
        let (updates, _) = broadcast::channel(capacity.max(1));
        let (latest, _) = watch::channel(None);
        Self {
            updates,
            latest,
            fix_timeout,
        }
    }

    /// Push a new fix from the device
    pub fn push(&self, position: Coordinate) {
        self.latest.send_replace(Some(position));
        // No receivers simply means nobody is tracking right now
        let watchers = self.updates.send(position).unwrap_or(0);
        debug!(%position, watchers, "Device fix pushed");
    }

    /// Most recent fix, if any
    pub fn latest(&self) -> Option<Coordinate> {
        *self.latest.borrow()
    }

    /// Number of live watchers
    pub fn watcher_count(&self) -> usize {
        self.updates.receiver_count()
    }
}

impl Default for DevicePositionFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY, Duration::from_secs(5))
    }
}

#[async_trait]
impl DeviceLocationPort for DevicePositionFeed {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Option<Coordinate> {
        let mut latest = self.latest.subscribe();
        let first_fix = latest.wait_for(Option::is_some);

        match tokio::time::timeout(self.fix_timeout, first_fix).await {
            Ok(Ok(fix)) => *fix,
            Ok(Err(_)) => None,
            Err(_) => {
                debug!(timeout = ?self.fix_timeout, "No device fix within timeout");
                None
            },
        }
    }

    fn watch_positions(&self) -> PositionStream {
        let receiver = self.updates.subscribe();

        stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(position) => return Some((position, receiver)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Position watcher lagged, dropping stale fixes");
                    },
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
        .boxed()
    }
}
