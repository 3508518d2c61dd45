//! The Event seam
//!
//! Events are opaque to the dispatcher: the only thing it ever does with
//! one is encode it into bytes for the batch body. Structure, framing and
//! field layout belong to the caller's [`crate::BatchBuffer`] implementation.

use bytes::Bytes;

/// An opaque payload that can encode itself to a byte sequence
///
/// Events flow through the dispatcher as `Arc<dyn Event>` so a retry
/// sub-batch can share them with the original batch without copying.
pub trait Event: Send + Sync {
    /// Encode the event to its wire bytes
    fn encode(&self) -> Bytes;
}

impl Event for Bytes {
    fn encode(&self) -> Bytes {
        self.clone()
    }
}

impl Event for Vec<u8> {
    fn encode(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

impl Event for String {
    fn encode(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }
}

impl Event for &'static str {
    fn encode(&self) -> Bytes {
        Bytes::from_static(self.as_bytes())
    }
}
