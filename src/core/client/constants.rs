//! Centralized defaults for the HTTP client.

use std::time::Duration;

/// How long to wait for the TCP/TLS connection to be established.
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// How long a single read on the response body may stall.
pub(crate) const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);
