// ── Update coordinators ──
//
// Per-category snapshot holders with push-based change notification.
// The embedder's fetch loop calls `set_data`; sensors subscribe and
// re-read the latest snapshot on every notification.

mod analytics_coordinator;
mod profile;
mod stream;

pub use analytics_coordinator::AnalyticsCoordinator;
pub use profile::{CoordinatorRegistry, ProfileCoordinators};
pub use stream::{SnapshotStream, SnapshotWatchStream};
