use std::time::Duration;

/// Username presented on every probe. The target firmware ships with this
/// account and does not allow renaming it.
pub const DEFAULT_USERNAME: &str = "web-configurator";

/// Endpoint that serves the full configuration backup when authenticated.
pub const ENDPOINT_PATH: &str = "/api/system/backup/export";

pub const DEFAULT_CONCURRENCY: usize = 100;
pub const DEFAULT_WIDTH: u32 = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Tunables for one search run.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum number of probes in flight at once.
    pub concurrency: usize,
    /// Number of decimal digits per candidate PIN.
    pub candidate_width: u32,
    /// Per-probe request timeout.
    pub timeout: Duration,
    /// Basic-auth username presented with every candidate.
    pub username: String,
    /// Path of the authenticated export endpoint.
    pub endpoint_path: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            candidate_width: DEFAULT_WIDTH,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            username: DEFAULT_USERNAME.to_string(),
            endpoint_path: ENDPOINT_PATH.to_string(),
        }
    }
}
