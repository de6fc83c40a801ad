// ── Per-profile coordinator sets ──
//
// One coordinator per analytics category for one configured profile,
// plus a process-wide registry keyed by entry id for embedders that
// run several profiles side by side.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::config::ProfileConfig;
use crate::error::CoreError;
use crate::model::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus, DeviceInfo,
};

use super::analytics_coordinator::AnalyticsCoordinator;

/// The full coordinator set for one profile: one coordinator per
/// analytics category, all sharing the profile identity.
#[derive(Debug)]
pub struct ProfileCoordinators {
    pub status: AnalyticsCoordinator<AnalyticsStatus>,
    pub protocols: AnalyticsCoordinator<AnalyticsProtocols>,
    pub encryption: AnalyticsCoordinator<AnalyticsEncryption>,
    pub ip_versions: AnalyticsCoordinator<AnalyticsIpVersions>,
    pub dnssec: AnalyticsCoordinator<AnalyticsDnssec>,
}

impl ProfileCoordinators {
    /// Create the coordinator set, seeded with zeroed snapshots. The
    /// embedder's fetch loop populates them via `set_data`.
    pub fn new(profile: ProfileConfig) -> Self {
        Self {
            status: AnalyticsCoordinator::new(profile.clone(), AnalyticsStatus::default()),
            protocols: AnalyticsCoordinator::new(profile.clone(), AnalyticsProtocols::default()),
            encryption: AnalyticsCoordinator::new(profile.clone(), AnalyticsEncryption::default()),
            ip_versions: AnalyticsCoordinator::new(
                profile.clone(),
                AnalyticsIpVersions::default(),
            ),
            dnssec: AnalyticsCoordinator::new(profile, AnalyticsDnssec::default()),
        }
    }

    /// Stable remote identifier of the bound profile.
    pub fn profile_id(&self) -> &str {
        self.status.profile_id()
    }

    /// Human-readable profile label.
    pub fn profile_name(&self) -> &str {
        self.status.profile_name()
    }

    /// Device payload shared by every sensor of this profile.
    pub fn device_info(&self) -> &DeviceInfo {
        self.status.device_info()
    }
}

/// Process-wide map of configured entries to their coordinator sets.
///
/// Lock-free reads; insertion and removal follow the entry lifecycle
/// (configured profile added / removed by the embedder).
#[derive(Default)]
pub struct CoordinatorRegistry {
    entries: DashMap<String, Arc<ProfileCoordinators>>,
}

impl CoordinatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the coordinator set for a configured entry, returning
    /// the shared handle.
    pub fn insert(
        &self,
        entry_id: impl Into<String>,
        coordinators: ProfileCoordinators,
    ) -> Arc<ProfileCoordinators> {
        let entry_id = entry_id.into();
        let coordinators = Arc::new(coordinators);
        debug!(entry_id = %entry_id, profile = %coordinators.profile_id(), "registered profile coordinators");
        self.entries.insert(entry_id, Arc::clone(&coordinators));
        coordinators
    }

    /// Look up the coordinator set for an entry.
    pub fn get(&self, entry_id: &str) -> Result<Arc<ProfileCoordinators>, CoreError> {
        self.entries
            .get(entry_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| CoreError::ProfileNotFound {
                entry_id: entry_id.to_owned(),
            })
    }

    /// Drop an entry's coordinator set. Subscribed sensors observe the
    /// teardown once the last coordinator handle is released.
    pub fn remove(&self, entry_id: &str) -> Option<Arc<ProfileCoordinators>> {
        self.entries.remove(entry_id).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
