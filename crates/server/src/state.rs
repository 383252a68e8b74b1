// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use jsonwebtoken::DecodingKey;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Verification key for bearer tokens. `None` when auth is disabled.
    pub auth_key: Option<DecodingKey>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(jwt_secret: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            auth_key: jwt_secret.map(|s| DecodingKey::from_secret(s.as_bytes())),
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn auth_enabled(&self) -> bool {
        self.auth_key.is_some()
    }
}
