//! LAUTTA - Bulk HTTP Dispatcher
//!
//! Infrastructure library for shipping event streams in bulk. Events board
//! the current batch; when a flush trigger fires (byte size, event count, or
//! the flush ticker) a worker ferries the batch to one of a pool of HTTP
//! endpoints, steering around unhealthy hosts and retrying the subset of
//! events the response says did not land.
//!
//! # Pluggable Seams
//!
//! ```text
//! submit(Event) ──► BatchBuffer ──► HTTP upload ──► ResponseInterpreter
//!                   (wire format)   (pooled hosts)   (per-event verdicts)
//! ```
//!
//! The wire format and the retry decision logic are pluggable via traits.
//! Users provide a [`BatchBuffer`] factory for their body encoding and a
//! [`ResponseInterpreter`] for their backend's per-event result parsing.

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod interpret;
pub mod selector;

pub use batch::{BatchBuffer, BatchFactory, NdjsonBatch};
pub use config::DispatchConfig;
pub use dispatch::{BulkDispatcher, DispatcherStats};
pub use error::{LauttaError, Result, UploadError};
pub use event::Event;
pub use interpret::{AcceptAll, Interpretation, ResponseInterpreter};
pub use selector::HostSelector;
