// Wires one simulated profile end to end: a fake refresh loop stands
// in for the remote analytics fetcher and feeds the coordinators,
// while the sensor platform republishes entity states.
//
// Run with: cargo run -p dnslens-sensors --example simulated_profile

use std::time::Duration;

use dnslens_core::config::ProfileConfig;
use dnslens_core::coordinator::ProfileCoordinators;
use dnslens_core::model::{AnalyticsEncryption, AnalyticsStatus};
use dnslens_sensors::{SensorPlatform, setup_entry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let profile = ProfileConfig::new("abcdef", "Home")?;
    let coordinators = ProfileCoordinators::new(profile);

    let mut platform = SensorPlatform::new();
    platform.register(setup_entry(&coordinators));

    // Simulated refresh cycles.
    for cycle in 1..=3_u64 {
        coordinators.status.set_data(AnalyticsStatus::from_counts(
            650 + cycle * 50,
            250,
            50,
        ));
        coordinators
            .encryption
            .set_data(AnalyticsEncryption::from_counts(80 * cycle, 20 * cycle));

        tokio::time::sleep(Duration::from_millis(100)).await;

        println!("-- refresh cycle {cycle} --");
        for entity in platform
            .entities()
            .iter()
            .filter(|entity| entity.enabled_by_default)
        {
            println!("{}: {} {}", entity.name, entity.state(), entity.unit);
        }
    }

    platform.shutdown().await;
    Ok(())
}
