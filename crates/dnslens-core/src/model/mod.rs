// ── Analytics domain model ──
//
// Canonical, immutable representations of the per-category analytics
// records the remote DNS service reports for one profile. Produced by
// the embedder's fetch loop, published through coordinators, and read
// (never mutated) by the sensor layer.

pub mod analytics;
pub mod device;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use dnslens_core::model::*` gives you everything.

pub use analytics::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus, AnalyticsVariant, CoordinatorType,
};
pub use device::DeviceInfo;
