// End-to-end flow: registry → entity setup → coordinator publishes →
// platform observes republished states.

use std::time::Duration;

use dnslens_core::config::ProfileConfig;
use dnslens_core::coordinator::{CoordinatorRegistry, ProfileCoordinators};
use dnslens_core::model::{AnalyticsEncryption, AnalyticsStatus};
use dnslens_sensors::{SENSORS, SensorPlatform, StateValue, setup_entry};
use tokio::sync::watch;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

// ── Helpers ─────────────────────────────────────────────────────────

fn registry_with_profile(entry_id: &str, profile_id: &str) -> CoordinatorRegistry {
    let registry = CoordinatorRegistry::new();
    let profile = ProfileConfig::new(profile_id, "Home").expect("valid profile");
    registry.insert(entry_id, ProfileCoordinators::new(profile));
    registry
}

/// Await republications until the state equals `expected`.
async fn await_state(receiver: &mut watch::Receiver<StateValue>, expected: StateValue) {
    timeout(WAIT, async {
        loop {
            if *receiver.borrow_and_update() == expected {
                return;
            }
            receiver.changed().await.expect("sensor task alive");
        }
    })
    .await
    .unwrap_or_else(|_| panic!("state never reached {expected}"));
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn full_profile_flow_republishes_snapshot_fields() {
    let registry = registry_with_profile("entry-1", "abcdef");
    let coordinators = registry.get("entry-1").expect("registered entry");

    let mut platform = SensorPlatform::new();
    platform.register(setup_entry(&coordinators));
    assert_eq!(platform.entities().len(), SENSORS.len());

    let mut all_queries = platform
        .entity("abcdef_all_queries")
        .expect("entity")
        .subscribe();
    let mut blocked_ratio = platform
        .entity("abcdef_blocked_queries_ratio")
        .expect("entity")
        .subscribe();
    let mut encrypted_ratio = platform
        .entity("abcdef_encrypted_queries_ratio")
        .expect("entity")
        .subscribe();

    // The external refresh loop delivers fresh snapshots.
    coordinators
        .status
        .set_data(AnalyticsStatus::from_counts(700, 250, 50));
    coordinators
        .encryption
        .set_data(AnalyticsEncryption::from_counts(80, 20));

    await_state(&mut all_queries, StateValue::Count(1000)).await;
    await_state(&mut blocked_ratio, StateValue::Ratio(25.0)).await;
    await_state(&mut encrypted_ratio, StateValue::Ratio(80.0)).await;

    platform.shutdown().await;
}

#[tokio::test]
async fn successive_snapshots_settle_on_the_latest() {
    let registry = registry_with_profile("entry-1", "abcdef");
    let coordinators = registry.get("entry-1").expect("registered entry");

    let mut platform = SensorPlatform::new();
    platform.register(setup_entry(&coordinators));

    let mut blocked = platform
        .entity("abcdef_blocked_queries")
        .expect("entity")
        .subscribe();

    // Two refreshes back to back: the displayed value must end on the
    // second snapshot no matter how notifications interleave.
    coordinators
        .status
        .set_data(AnalyticsStatus::from_counts(900, 100, 0));
    coordinators
        .status
        .set_data(AnalyticsStatus::from_counts(600, 400, 0));

    await_state(&mut blocked, StateValue::Count(400)).await;

    platform.shutdown().await;
}

#[tokio::test]
async fn two_profiles_coexist_without_unique_id_collisions() {
    let registry = CoordinatorRegistry::new();
    for (entry_id, profile_id) in [("entry-1", "abcdef"), ("entry-2", "ghijkl")] {
        let profile = ProfileConfig::new(profile_id, "Home").expect("valid profile");
        registry.insert(entry_id, ProfileCoordinators::new(profile));
    }

    let mut platform = SensorPlatform::new();
    for entry_id in ["entry-1", "entry-2"] {
        let coordinators = registry.get(entry_id).expect("registered entry");
        platform.register(setup_entry(&coordinators));
    }

    assert_eq!(platform.entities().len(), SENSORS.len() * 2);
    assert!(platform.entity("abcdef_all_queries").is_some());
    assert!(platform.entity("ghijkl_all_queries").is_some());

    // Updates stay scoped to their own profile.
    let home = registry.get("entry-1").expect("registered entry");
    home.status.set_data(AnalyticsStatus::from_counts(10, 0, 0));

    let mut home_state = platform
        .entity("abcdef_all_queries")
        .expect("entity")
        .subscribe();
    await_state(&mut home_state, StateValue::Count(10)).await;
    assert_eq!(
        platform
            .entity("ghijkl_all_queries")
            .expect("entity")
            .state(),
        StateValue::Count(0)
    );

    platform.shutdown().await;
}

#[tokio::test]
async fn entry_removal_tears_the_sensors_down() {
    let registry = registry_with_profile("entry-1", "abcdef");
    let coordinators = registry.get("entry-1").expect("registered entry");

    let mut platform = SensorPlatform::new();
    platform.register(setup_entry(&coordinators));

    // Drop every coordinator handle; the update loops observe the
    // closed channels and exit without needing a cancel.
    drop(coordinators);
    registry.remove("entry-1");

    timeout(WAIT, platform.shutdown())
        .await
        .expect("sensors wind down after coordinator teardown");
}
