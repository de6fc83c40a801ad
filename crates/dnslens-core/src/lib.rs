// dnslens-core: Reactive analytics data layer between the embedder's
// refresh loop and the sensor platform.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ProfileConfig;
pub use coordinator::{
    AnalyticsCoordinator, CoordinatorRegistry, ProfileCoordinators, SnapshotStream,
};
pub use error::CoreError;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus, AnalyticsVariant, CoordinatorType, DeviceInfo,
};
