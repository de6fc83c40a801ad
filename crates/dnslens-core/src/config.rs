// ── Profile configuration ──
//
// Describes *which* remote DNS profile a coordinator set serves. This
// carries identity only -- credentials, endpoints, and fetch scheduling
// belong to the embedder's refresh loop. Core never reads config files.

use crate::error::CoreError;

/// Identity of one configured profile on the remote DNS service.
///
/// Built by the embedder and handed to [`ProfileCoordinators::new`]
/// (one coordinator set per profile).
///
/// [`ProfileCoordinators::new`]: crate::coordinator::ProfileCoordinators::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Stable remote identifier (e.g., `"abcdef"`). Scopes every
    /// sensor unique id derived for this profile.
    pub profile_id: String,
    /// Human-readable profile label.
    pub name: String,
    /// Optional profile fingerprint reported by the service.
    pub fingerprint: Option<String>,
}

impl ProfileConfig {
    /// Create a validated profile configuration.
    ///
    /// Both `profile_id` and `name` must be non-empty: an empty profile
    /// id would collapse unique ids across profiles.
    pub fn new(
        profile_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let profile_id = profile_id.into();
        let name = name.into();

        if profile_id.trim().is_empty() {
            return Err(CoreError::config("profile_id must not be empty"));
        }
        if name.trim().is_empty() {
            return Err(CoreError::config("profile name must not be empty"));
        }

        Ok(Self {
            profile_id,
            name,
            fingerprint: None,
        })
    }

    /// Attach the service-reported fingerprint.
    #[must_use]
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }
}
