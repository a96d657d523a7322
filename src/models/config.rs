//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Signing key for flash-message cookies; must be at least 64 bytes.
    pub secret: String,
    /// Glob passed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Base URL of the remote hotel management API.
    pub api_base_url: String,
    /// Per-request deadline for calls against the remote API.
    pub api_timeout_ms: u64,
}
