// ── Platform setup & dispatch ──
//
// Entity instantiation for one configured profile and the background
// tasks that drive each adapter's push loop. This is the surface the
// host platform calls during entry setup and teardown.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use dnslens_core::coordinator::ProfileCoordinators;
use dnslens_core::model::DeviceInfo;

use crate::catalog::SENSORS;
use crate::entity::{EntityCategory, Icon, StateClass, StateValue, Unit};
use crate::sensor::AnalyticsSensor;

/// Instantiate one adapter per catalog entry for a profile, in catalog
/// order. The adapters carry their initial values already.
pub fn setup_entry(coordinators: &ProfileCoordinators) -> Vec<AnalyticsSensor> {
    info!(
        profile = %coordinators.profile_id(),
        sensors = SENSORS.len(),
        "setting up analytics sensors"
    );
    SENSORS
        .iter()
        .map(|description| AnalyticsSensor::new(coordinators, description))
        .collect()
}

/// Read-only view of one registered entity, held by the platform after
/// the adapter has been handed to its update loop.
pub struct EntityHandle {
    pub unique_id: String,
    pub name: &'static str,
    pub unit: Unit,
    pub state_class: StateClass,
    pub entity_category: EntityCategory,
    pub enabled_by_default: bool,
    pub icon: Icon,
    pub device_info: DeviceInfo,
    state: watch::Receiver<StateValue>,
}

impl EntityHandle {
    fn from_sensor(sensor: &AnalyticsSensor) -> Self {
        Self {
            unique_id: sensor.unique_id().to_owned(),
            name: sensor.name(),
            unit: sensor.unit(),
            state_class: sensor.state_class(),
            entity_category: sensor.entity_category(),
            enabled_by_default: sensor.enabled_by_default(),
            icon: sensor.icon(),
            device_info: sensor.device_info().clone(),
            state: sensor.subscribe_state(),
        }
    }

    /// The last republished value.
    pub fn state(&self) -> StateValue {
        *self.state.borrow()
    }

    /// A dedicated receiver for awaiting republications.
    pub fn subscribe(&self) -> watch::Receiver<StateValue> {
        self.state.clone()
    }
}

/// Owns registered adapters' update tasks and the platform-side entity
/// handles.
pub struct SensorPlatform {
    entities: Vec<EntityHandle>,
    tasks: Vec<JoinHandle<()>>,
    cancel: CancellationToken,
}

impl SensorPlatform {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            tasks: Vec::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Register adapters: capture an [`EntityHandle`] for each, then
    /// move the adapter into its background update loop.
    pub fn register(&mut self, sensors: Vec<AnalyticsSensor>) {
        for sensor in sensors {
            self.entities.push(EntityHandle::from_sensor(&sensor));
            self.tasks
                .push(tokio::spawn(sensor.run(self.cancel.child_token())));
        }
    }

    /// All registered entities, in registration order.
    pub fn entities(&self) -> &[EntityHandle] {
        &self.entities
    }

    /// Look up one entity by unique id.
    pub fn entity(&self, unique_id: &str) -> Option<&EntityHandle> {
        self.entities
            .iter()
            .find(|entity| entity.unique_id == unique_id)
    }

    /// Cancel every update loop and wait for the adapters to wind
    /// down.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        for task in self.tasks {
            let _ = task.await;
        }
    }
}

impl Default for SensorPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dnslens_core::config::ProfileConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn setup_entry_yields_one_adapter_per_catalog_entry() {
        let coordinators =
            ProfileCoordinators::new(ProfileConfig::new("abcdef", "Home").unwrap());
        let sensors = setup_entry(&coordinators);

        assert_eq!(sensors.len(), SENSORS.len());
        for (sensor, description) in sensors.iter().zip(SENSORS) {
            assert_eq!(sensor.name(), description.name);
            assert_eq!(sensor.coordinator_type(), description.coordinator_type());
        }
    }

    #[tokio::test]
    async fn registered_entities_expose_metadata_and_state() {
        let coordinators =
            ProfileCoordinators::new(ProfileConfig::new("abcdef", "Home").unwrap());
        let mut platform = SensorPlatform::new();
        platform.register(setup_entry(&coordinators));

        assert_eq!(platform.entities().len(), SENSORS.len());

        let entity = platform.entity("abcdef_all_queries").unwrap();
        assert_eq!(entity.name, "DNS queries");
        assert_eq!(entity.unit, Unit::Queries);
        assert_eq!(entity.device_info.name, "Home");
        assert_eq!(entity.state(), StateValue::Count(0));
        assert!(platform.entity("abcdef_no_such_key").is_none());

        platform.shutdown().await;
    }
}
