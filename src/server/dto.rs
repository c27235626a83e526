//! Data Transfer Objects
//!
//! JSON bodies returned by the host's own endpoints.

use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Directory the dashboard is served from
    pub static_dir: String,
    /// Whether `index.html` exists in `static_dir`
    pub index_present: bool,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
