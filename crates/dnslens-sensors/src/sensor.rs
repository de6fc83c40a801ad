// ── Sensor adapter ──
//
// Bridges one catalog description to the platform's observable-entity
// contract: read the snapshot on construction, re-read and republish
// on every coordinator notification. The adapter holds exactly one
// mutable field (its last value) and has no failure paths -- extraction
// functions are total over their snapshot variant.

use dnslens_core::coordinator::{ProfileCoordinators, SnapshotStream};
use dnslens_core::model::{
    AnalyticsDnssec, AnalyticsEncryption, AnalyticsIpVersions, AnalyticsProtocols,
    AnalyticsStatus, CoordinatorType, DeviceInfo,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::description::{SensorDescription, ValueFn};
use crate::entity::{EntityCategory, Icon, StateClass, StateValue, Unit};

/// Typed pairing of a category subscription with its extraction
/// function. Constructed by matching the description's `ValueFn` arm,
/// so the pairing is correct by construction.
enum SensorBinding {
    Status(
        SnapshotStream<AnalyticsStatus>,
        fn(&AnalyticsStatus) -> StateValue,
    ),
    Protocols(
        SnapshotStream<AnalyticsProtocols>,
        fn(&AnalyticsProtocols) -> StateValue,
    ),
    Encryption(
        SnapshotStream<AnalyticsEncryption>,
        fn(&AnalyticsEncryption) -> StateValue,
    ),
    IpVersions(
        SnapshotStream<AnalyticsIpVersions>,
        fn(&AnalyticsIpVersions) -> StateValue,
    ),
    Dnssec(
        SnapshotStream<AnalyticsDnssec>,
        fn(&AnalyticsDnssec) -> StateValue,
    ),
}

impl SensorBinding {
    fn bind(coordinators: &ProfileCoordinators, value: ValueFn) -> Self {
        match value {
            ValueFn::Status(extract) => Self::Status(coordinators.status.subscribe(), extract),
            ValueFn::Protocols(extract) => {
                Self::Protocols(coordinators.protocols.subscribe(), extract)
            }
            ValueFn::Encryption(extract) => {
                Self::Encryption(coordinators.encryption.subscribe(), extract)
            }
            ValueFn::IpVersions(extract) => {
                Self::IpVersions(coordinators.ip_versions.subscribe(), extract)
            }
            ValueFn::Dnssec(extract) => Self::Dnssec(coordinators.dnssec.subscribe(), extract),
        }
    }

    /// Apply the extraction function to the latest snapshot.
    fn read_latest(&self) -> StateValue {
        match self {
            Self::Status(stream, extract) => extract(&stream.latest()),
            Self::Protocols(stream, extract) => extract(&stream.latest()),
            Self::Encryption(stream, extract) => extract(&stream.latest()),
            Self::IpVersions(stream, extract) => extract(&stream.latest()),
            Self::Dnssec(stream, extract) => extract(&stream.latest()),
        }
    }

    /// Wait for the next coordinator notification. Returns `false`
    /// once the coordinator has been torn down.
    async fn changed(&mut self) -> bool {
        match self {
            Self::Status(stream, _) => stream.changed().await.is_some(),
            Self::Protocols(stream, _) => stream.changed().await.is_some(),
            Self::Encryption(stream, _) => stream.changed().await.is_some(),
            Self::IpVersions(stream, _) => stream.changed().await.is_some(),
            Self::Dnssec(stream, _) => stream.changed().await.is_some(),
        }
    }
}

/// One observable analytics entity, bound to a single coordinator and
/// a single catalog description.
pub struct AnalyticsSensor {
    description: &'static SensorDescription,
    binding: SensorBinding,
    unique_id: String,
    device_info: DeviceInfo,
    native_value: StateValue,
    state: watch::Sender<StateValue>,
}

impl AnalyticsSensor {
    /// Bind a description to its profile coordinator set.
    ///
    /// The initial displayed value is computed immediately from the
    /// current snapshot; the unique id is scoped by the profile id so
    /// several profiles can coexist in one process.
    pub fn new(
        coordinators: &ProfileCoordinators,
        description: &'static SensorDescription,
    ) -> Self {
        let binding = SensorBinding::bind(coordinators, description.value);
        let native_value = binding.read_latest();
        let unique_id = format!("{}_{}", coordinators.profile_id(), description.key);
        let (state, _) = watch::channel(native_value);

        Self {
            description,
            binding,
            unique_id,
            device_info: coordinators.device_info().clone(),
            native_value,
            state,
        }
    }

    // ── Read-only platform surface ───────────────────────────────

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &'static str {
        self.description.name
    }

    pub fn unit(&self) -> Unit {
        self.description.unit
    }

    pub fn state_class(&self) -> StateClass {
        self.description.state_class
    }

    pub fn entity_category(&self) -> EntityCategory {
        self.description.entity_category
    }

    pub fn enabled_by_default(&self) -> bool {
        self.description.entity_registry_enabled_default
    }

    pub fn icon(&self) -> Icon {
        self.description.icon
    }

    pub fn coordinator_type(&self) -> CoordinatorType {
        self.description.coordinator_type()
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// The last computed value.
    pub fn native_value(&self) -> StateValue {
        self.native_value
    }

    /// Observe republished values (platform side).
    pub fn subscribe_state(&self) -> watch::Receiver<StateValue> {
        self.state.subscribe()
    }

    // ── Update path ──────────────────────────────────────────────

    /// Handle a coordinator notification: re-read the latest snapshot
    /// through the extraction function and republish.
    ///
    /// Infallible and idempotent -- republishing an unchanged value
    /// produces no artifact beyond the republish itself.
    pub fn handle_coordinator_update(&mut self) {
        self.native_value = self.binding.read_latest();
        self.state.send_replace(self.native_value);
        trace!(
            unique_id = %self.unique_id,
            value = %self.native_value,
            "sensor state republished"
        );
    }

    /// Drive the push path: republish on every coordinator
    /// notification until the coordinator is dropped or the token
    /// fires.
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                live = self.binding.changed() => {
                    if !live {
                        break;
                    }
                    self.handle_coordinator_update();
                }
            }
        }
        debug!(unique_id = %self.unique_id, "sensor torn down");
    }
}
