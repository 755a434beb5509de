//! Client configuration

use std::time::Duration;
use types::ids::SourceId;

/// Default location of the per-source documents.
pub const DEFAULT_BASE_URL: &str = "http://domain.com/camera/";

/// Default per-source timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.7;

/// Smallest and largest generated record size in bytes.
pub const GENERATED_MIN_SIZE: u64 = 1024;
pub const GENERATED_MAX_SIZE: u64 = 2_097_152;

/// Configuration for the network-backed client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix of every source URL; the source id and a trailing slash are appended.
    pub base_url: String,
    /// Upper bound on one whole request, body included.
    pub timeout: Duration,
    /// Honour proxy settings from the environment.
    pub use_system_proxy: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            ..Self::default()
        }
    }

    /// URL of one source's document: `{base_url}{id}/`.
    pub fn source_url(&self, source_id: SourceId) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}/", self.base_url, source_id)
        } else {
            format!("{}/{}/", self.base_url, source_id)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            use_system_proxy: true,
        }
    }
}

/// Configuration for the simulated client.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base seed; each source derives its own stream from it.
    pub seed: u64,
    /// Record count per source is uniform in `0..=max_records`.
    pub max_records: usize,
    pub min_size: u64,
    pub max_size: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_records: 1_000_000,
            min_size: GENERATED_MIN_SIZE,
            max_size: GENERATED_MAX_SIZE,
        }
    }
}
