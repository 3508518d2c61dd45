//! Response interpretation
//!
//! After an upload lands (any status outside the configured whole-batch
//! retry set), the dispatcher hands the response to a caller-supplied
//! [`ResponseInterpreter`] to split per-event outcomes into retryable,
//! permanently failed, and succeeded partitions. Only the retryable subset
//! is re-uploaded, on the same worker.
//!
//! # Example
//!
//! ```ignore
//! struct BulkResultInterpreter;
//!
//! impl ResponseInterpreter for BulkResultInterpreter {
//!     fn interpret(
//!         &self,
//!         status: StatusCode,
//!         body: &[u8],
//!         batch: &dyn BatchBuffer,
//!     ) -> Interpretation {
//!         let retry = parse_failed_indices(body);
//!         let mut retry_batch = NdjsonBatch::new();
//!         for &i in &retry {
//!             retry_batch.append(Arc::clone(&batch.events()[i]));
//!         }
//!         Interpretation {
//!             retry,
//!             permanent: vec![],
//!             retry_batch: Some(Box::new(retry_batch)),
//!         }
//!     }
//! }
//! ```

use crate::batch::BatchBuffer;
use reqwest::StatusCode;

/// Per-event verdicts for one upload round
pub struct Interpretation {
    /// Indices of events to retry, in the original batch's order
    pub retry: Vec<usize>,

    /// Indices of events that permanently failed; logged and dropped
    pub permanent: Vec<usize>,

    /// A freshly built batch containing exactly the retryable events
    ///
    /// Must be `Some` whenever `retry` is non-empty, with event order
    /// matching `retry`.
    pub retry_batch: Option<Box<dyn BatchBuffer>>,
}

impl Interpretation {
    /// Everything succeeded; nothing to retry or drop
    pub fn all_accepted() -> Self {
        Self {
            retry: Vec::new(),
            permanent: Vec::new(),
            retry_batch: None,
        }
    }
}

/// Splits one response into per-event outcomes
///
/// The interpreter may read the original batch but must not mutate it.
/// Events in neither partition are considered succeeded. The response
/// body has already been drained when this runs, so the interpreter sees
/// the status code and the body bytes rather than a live response.
pub trait ResponseInterpreter: Send + Sync {
    /// Partition the batch's events according to the response
    fn interpret(&self, status: StatusCode, body: &[u8], batch: &dyn BatchBuffer)
        -> Interpretation;
}

/// Trivial interpreter: every non-retry-status response accepts the batch
pub struct AcceptAll;

impl ResponseInterpreter for AcceptAll {
    fn interpret(
        &self,
        _status: StatusCode,
        _body: &[u8],
        _batch: &dyn BatchBuffer,
    ) -> Interpretation {
        Interpretation::all_accepted()
    }
}
