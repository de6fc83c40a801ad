// dnslens-sensors: Declarative sensor catalog plus thin adapters that
// republish analytics snapshot fields as observable entities.

pub mod catalog;
pub mod description;
pub mod entity;
pub mod platform;
pub mod sensor;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::SENSORS;
pub use description::{SensorDescription, ValueFn};
pub use entity::{EntityCategory, Icon, StateClass, StateValue, Unit};
pub use platform::{EntityHandle, SensorPlatform, setup_entry};
pub use sensor::AnalyticsSensor;
