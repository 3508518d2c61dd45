//! Configuration for the bulk dispatcher

use crate::error::{LauttaError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Soft upper bound on encoded body bytes before flush (15 MiB)
pub const DEFAULT_BULK_BYTE_SIZE: usize = 15 * 1024 * 1024;

/// Upper bound on queued events before flush
pub const DEFAULT_BULK_MAX_EVENTS: usize = 5000;

/// Time-based flush cadence
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(30);

/// Pause before re-selecting when every host is down
pub const DEFAULT_UNAVAILABLE_BACKOFF: Duration = Duration::from_secs(30);

/// Recognized configuration for [`crate::BulkDispatcher`]
///
/// # Example
///
/// ```
/// use lautta::DispatchConfig;
///
/// let config = DispatchConfig {
///     hosts: vec!["http://ingest-1:9200/_bulk".into()],
///     compress: true,
///     ..DispatchConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Ordered list of target URLs (at least one)
    pub hosts: Vec<String>,

    /// Headers applied to every request
    ///
    /// Shared across workers; never mutated after construction.
    pub headers: HashMap<String, String>,

    /// HTTP method, typically POST or PUT
    pub method: Method,

    /// Statuses treated as transport-level retry: the whole batch is
    /// retried against the next host, without consulting the interpreter
    pub retry_statuses: HashSet<StatusCode>,

    /// Soft upper bound on encoded body bytes before flush
    pub bulk_byte_size: usize,

    /// Upper bound on queued events before flush
    pub bulk_max_events: usize,

    /// Time-based flush cadence
    pub flush_interval: Duration,

    /// Maximum simultaneous in-flight uploads
    pub concurrent: usize,

    /// Gzip the request body and set `Content-Encoding: gzip`
    pub compress: bool,

    /// Pause before re-selecting when the selector reports no host up
    pub unavailable_backoff: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            hosts: Vec::new(),
            headers: HashMap::new(),
            method: Method::POST,
            retry_statuses: HashSet::new(),
            bulk_byte_size: DEFAULT_BULK_BYTE_SIZE,
            bulk_max_events: DEFAULT_BULK_MAX_EVENTS,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            concurrent: 1,
            compress: false,
            unavailable_backoff: DEFAULT_UNAVAILABLE_BACKOFF,
        }
    }
}

impl DispatchConfig {
    /// Check the configuration for values the dispatcher cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.hosts.is_empty() {
            return Err(LauttaError::Config("hosts must not be empty".into()));
        }
        if self.concurrent == 0 {
            return Err(LauttaError::Config("concurrent must be at least 1".into()));
        }
        if self.bulk_byte_size == 0 {
            return Err(LauttaError::Config(
                "bulk_byte_size must be greater than zero".into(),
            ));
        }
        if self.bulk_max_events == 0 {
            return Err(LauttaError::Config(
                "bulk_max_events must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Convert the configured headers into a `HeaderMap`, applied to every
    /// request
    pub(crate) fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| LauttaError::Config(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| LauttaError::Config(format!("invalid header value: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}
