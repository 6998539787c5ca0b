// The packet queue: one owned byte arena, records packed into it as a ring.

/// Largest capacity whose offsets still fit the 32-bit `next` link
/// without colliding with [`NO_NEXT`](super::layout::NO_NEXT).
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// A fixed-capacity FIFO of variable-length packet records.
///
/// All records live inside `storage`; nothing is allocated per packet.
/// Records are linked in arrival order through the `next` field of their
/// in-arena header, and `head`/`tail` hold the byte offsets of the oldest
/// and newest live record.
///
/// ### Space management:
/// Records are only ever removed at `head` and appended at `tail`, so the
/// occupied bytes form at most two runs and there is at most one wrap
/// boundary. A new record goes, in order of preference:
/// - **Tail**: right after the newest record, if the region end leaves room.
/// - **Front**: at offset 0, if the gap before `head` is large enough
///   (this wraps the ring).
/// - **Middle**: once wrapped, only the gap between the newest record and
///   `head` is free.
///
/// Popping a record does not clear its bytes. They stay readable until a
/// later admit reuses the span, which is why views returned by
/// [`pop`](PacketQueue::pop) borrow the queue.
pub struct PacketQueue {
    /// Backing region. Its length is the capacity and never changes.
    pub(crate) storage: Box<[u8]>,

    /// Offset of the oldest live record.
    pub(crate) head: Option<usize>,

    /// Offset of the newest live record. `None` exactly when `head` is.
    pub(crate) tail: Option<usize>,
}

/// Which free span a record was placed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Queue was empty; record starts at offset 0.
    Empty,
    /// Appended after the current tail without wrapping.
    Tail,
    /// Wrapped to offset 0, before the current head.
    Front,
    /// Between the wrapped tail and the head.
    Middle,
}
