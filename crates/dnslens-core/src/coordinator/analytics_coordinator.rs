// ── Analytics update coordinator ──
//
// Holds the latest immutable snapshot for one (profile, category)
// pair and broadcasts replacements to subscribers via a `watch`
// channel. The coordinator never fetches: refresh scheduling, HTTP,
// and error classification live in the embedder's fetch loop, which
// simply calls `set_data` with whatever it last obtained.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use crate::config::ProfileConfig;
use crate::model::{AnalyticsVariant, CoordinatorType, DeviceInfo};

use super::stream::SnapshotStream;

/// Push-notification snapshot holder for one analytics category.
///
/// Cheaply cloneable; all clones share the same channel. Snapshots are
/// `Arc`-shared immutable records, safe for concurrent read by any
/// number of sensors.
#[derive(Debug)]
pub struct AnalyticsCoordinator<T: AnalyticsVariant> {
    inner: Arc<CoordinatorInner<T>>,
}

#[derive(Debug)]
struct CoordinatorInner<T> {
    profile: ProfileConfig,
    device_info: DeviceInfo,
    data: watch::Sender<Arc<T>>,
}

impl<T: AnalyticsVariant> Clone for AnalyticsCoordinator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: AnalyticsVariant> AnalyticsCoordinator<T> {
    /// Create a coordinator seeded with an initial snapshot.
    pub fn new(profile: ProfileConfig, initial: T) -> Self {
        let device_info = DeviceInfo::for_profile(&profile);
        let (data, _) = watch::channel(Arc::new(initial));

        Self {
            inner: Arc::new(CoordinatorInner {
                profile,
                device_info,
                data,
            }),
        }
    }

    /// The analytics category this coordinator serves.
    pub fn coordinator_type(&self) -> CoordinatorType {
        T::COORDINATOR_TYPE
    }

    /// Stable remote identifier of the bound profile.
    pub fn profile_id(&self) -> &str {
        &self.inner.profile.profile_id
    }

    /// Human-readable profile label.
    pub fn profile_name(&self) -> &str {
        &self.inner.profile.name
    }

    /// Device payload forwarded unchanged to the platform.
    pub fn device_info(&self) -> &DeviceInfo {
        &self.inner.device_info
    }

    /// Latest snapshot (spec term: `current_snapshot`).
    pub fn data(&self) -> Arc<T> {
        self.inner.data.borrow().clone()
    }

    /// Replace the snapshot and notify all subscribers.
    ///
    /// Called by the external refresh mechanism after each successful
    /// fetch. Always notifies, even if the new record compares equal
    /// to the previous one -- sensors republish on every refresh.
    pub fn set_data(&self, data: T) {
        trace!(
            profile = %self.inner.profile.profile_id,
            category = %T::COORDINATOR_TYPE,
            "publishing analytics snapshot"
        );
        self.inner.data.send_replace(Arc::new(data));
    }

    /// Register for change notifications.
    pub fn subscribe(&self) -> SnapshotStream<T> {
        SnapshotStream::new(self.inner.data.subscribe())
    }

    /// Number of live subscriptions (sensors currently registered).
    pub fn subscriber_count(&self) -> usize {
        self.inner.data.receiver_count()
    }
}
