// ── Sensor descriptions ──
//
// A description is the immutable recipe for one sensor: identity,
// presentation metadata, and a pure extraction function. The
// extraction function's enum arm doubles as the category tag, so a
// description can never name a category its function does not match.

use dnslens_core::model::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus, CoordinatorType,
};

use crate::entity::{EntityCategory, Icon, StateClass, StateValue, Unit};

/// Pure projection from one snapshot variant to a published value.
///
/// Plain `fn` pointers, no captures: total over any valid snapshot of
/// the matching variant, side-effect free, infallible.
#[derive(Debug, Clone, Copy)]
pub enum ValueFn {
    Status(fn(&AnalyticsStatus) -> StateValue),
    Protocols(fn(&AnalyticsProtocols) -> StateValue),
    Encryption(fn(&AnalyticsEncryption) -> StateValue),
    IpVersions(fn(&AnalyticsIpVersions) -> StateValue),
    Dnssec(fn(&AnalyticsDnssec) -> StateValue),
}

impl ValueFn {
    /// The analytics category this extraction function reads from.
    pub const fn coordinator_type(&self) -> CoordinatorType {
        match self {
            Self::Status(_) => CoordinatorType::Status,
            Self::Protocols(_) => CoordinatorType::Protocols,
            Self::Encryption(_) => CoordinatorType::Encryption,
            Self::IpVersions(_) => CoordinatorType::IpVersions,
            Self::Dnssec(_) => CoordinatorType::Dnssec,
        }
    }
}

/// Immutable definition of one catalog sensor.
#[derive(Debug, Clone, Copy)]
pub struct SensorDescription {
    /// Unique key within the catalog; combined with the profile id to
    /// form the entity unique id.
    pub key: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    pub unit: Unit,
    pub state_class: StateClass,
    pub entity_category: EntityCategory,
    /// Whether the platform should enable this entity out of the box.
    pub entity_registry_enabled_default: bool,
    pub icon: Icon,
    /// Extraction function; its arm is the source category.
    pub value: ValueFn,
}

impl SensorDescription {
    /// The analytics category this sensor is bound to.
    pub const fn coordinator_type(&self) -> CoordinatorType {
        self.value.coordinator_type()
    }
}
