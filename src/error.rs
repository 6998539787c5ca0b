//! Error types for the packet queue.

/// Result type alias for queue operations
pub type Result<T> = std::result::Result<T, NetqError>;

/// Failures reported by [`PacketQueue`](crate::PacketQueue).
///
/// An empty queue is not an error: `pop` and `peek` return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetqError {
    /// No free span large enough for the record under the current occupancy.
    /// The queue is left untouched.
    #[error("out of space: record needs {requested} bytes, no free span that large in {capacity}-byte queue")]
    OutOfSpace { requested: usize, capacity: usize },

    /// Capacity rejected before any memory was requested.
    #[error("invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },

    /// The backing region could not be reserved.
    #[error("failed to allocate {capacity}-byte backing region")]
    AllocationFailed { capacity: usize },

    /// A length does not fit the record header's 32-bit fields.
    #[error("record too large: address {address_len} bytes, payload {payload_len} bytes")]
    RecordTooLarge {
        address_len: usize,
        payload_len: usize,
    },
}
