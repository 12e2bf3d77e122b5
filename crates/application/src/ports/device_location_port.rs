//! Device geolocation port
//!
//! Mirrors the two primitives every platform geolocation API offers: a
//! one-shot "current position" request and a continuous position watch.
//! Neither reports errors: a device that refuses or has no signal simply
//! never answers.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use futures::stream::BoxStream;

/// Continuous stream of device positions
///
/// Dropping the stream cancels the underlying platform watch.
pub type PositionStream = BoxStream<'static, Coordinate>;

/// Port for a device's geolocation
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Current position, or `None` if the device cannot or will not report one
    async fn current_position(&self) -> Option<Coordinate>;

    /// Subscribe to position changes
    fn watch_positions(&self) -> PositionStream;
}
