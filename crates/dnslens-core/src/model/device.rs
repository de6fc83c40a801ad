// ── Device metadata ──
//
// Opaque device-association payload forwarded unchanged to the host
// platform. One device per profile; every sensor for that profile
// attaches to it.

use serde::{Deserialize, Serialize};

use crate::config::ProfileConfig;

const MANUFACTURER: &str = "NextDNS";

/// Platform device registration payload for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Profile-scoped identifiers, stable across restarts.
    pub identifiers: Vec<String>,
    pub name: String,
    pub manufacturer: String,
    pub configuration_url: Option<String>,
}

impl DeviceInfo {
    /// Derive the device payload for a configured profile.
    pub fn for_profile(config: &ProfileConfig) -> Self {
        Self {
            identifiers: vec![config.profile_id.clone()],
            name: config.name.clone(),
            manufacturer: MANUFACTURER.to_owned(),
            configuration_url: Some(format!("https://my.nextdns.io/{}", config.profile_id)),
        }
    }
}
