// ── Core error types ──
//
// User-facing errors from dnslens-core. The sensor layer itself is
// infallible (extraction functions are total over their snapshot
// variant); everything that can go wrong happens at configuration
// and registry-lookup time.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Profile not found: no coordinators registered for entry {entry_id}")]
    ProfileNotFound { entry_id: String },
}

impl CoreError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
