// Process-wide configuration, built once at startup and handed to the client.

use std::time::Duration;

/// How long to wait between acquire attempts when the pool has nothing free.
pub const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(10);

/// How many retries an acquire gets before the pool is declared exhausted.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Per-request HTTP timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the pool manager, e.g. `http://boskos.test-pods.svc.cluster.local`.
    pub host: String,
    /// Identity recorded as the owner of everything this process leases.
    pub owner: String,
    pub request_timeout: Duration,
    pub retry_wait: Duration,
    pub max_retries: u32,
}

impl Config {
    pub fn new(host: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_wait: DEFAULT_RETRY_WAIT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
