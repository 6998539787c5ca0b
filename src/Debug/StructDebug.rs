use std::fmt;

use crate::NetQ::Queue::PacketQueue;
use crate::NetQ::Structs::Packet;

/// Longest payload prefix shown per record in a dump.
pub const PREVIEW_LEN: usize = 38;

const RULE: &str = "========================================================================";

/// Printable prefix of a payload.
///
/// Stops at the first NUL byte or after [`PREVIEW_LEN`] bytes, whichever
/// comes first; non-printable bytes are shown as escapes.
pub fn payload_preview(payload: &[u8]) -> impl fmt::Display + '_ {
    let end = payload
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(payload.len())
        .min(PREVIEW_LEN);
    payload[..end].escape_ascii()
}

/// Human-readable listing of a queue: element count, then one line per
/// record in FIFO order with its storage offset and a payload preview.
///
/// ```text
/// ========================================================================
/// queue: 1024 bytes (2 elements)
///    1: @0: 'hello'
///    2: @24: 'world'
/// ```
pub fn write_queue_dump(queue: &PacketQueue, out: &mut impl fmt::Write) -> fmt::Result {
    let count = queue.count();
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "queue: {} bytes ({} {})",
        queue.capacity(),
        count,
        if count == 1 { "element" } else { "elements" }
    )?;
    for (n, packet) in queue.iter().enumerate() {
        writeln!(
            out,
            "  {:2}: @{}: '{}'",
            n + 1,
            packet.offset(),
            payload_preview(packet.payload())
        )?;
    }
    Ok(())
}

/// Debug function for PacketQueue
///
/// Shows capacity, cursor offsets and occupancy without dumping storage.
pub fn debug_packet_queue(queue: &PacketQueue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PacketQueue")
        .field("capacity", &queue.capacity())
        .field("head", &queue.head)
        .field("tail", &queue.tail)
        .field("count", &queue.count())
        .field("occupied_bytes", &queue.occupied_bytes())
        .finish()
}

/// Debug function for Packet
pub fn debug_packet(packet: &Packet<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Packet")
        .field("offset", &packet.offset())
        .field("interface_tag", &packet.interface_tag())
        .field("address", &packet.address())
        .field("payload_len", &packet.payload().len())
        .field("payload", &format_args!("'{}'", payload_preview(packet.payload())))
        .finish()
}

impl PacketQueue {
    /// Render [`write_queue_dump`] into a fresh string.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_queue_dump(self, &mut out);
        out
    }
}

impl fmt::Display for PacketQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_queue_dump(self, f)
    }
}

impl fmt::Debug for PacketQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_packet_queue(self, f)
    }
}

impl fmt::Debug for Packet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_packet(self, f)
    }
}
