// Views of packet records stored in a PacketQueue.

use crate::NetQ::Queue::HEADER_SIZE;

/// A record as it sits in the queue's storage.
///
/// Borrowed from the queue: the address and payload slices point straight
/// into the backing region. Copy out with [`Packet::to_owned_packet`] to
/// keep the data past the borrow.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Packet<'q> {
    pub(crate) offset: usize,
    pub(crate) interface_tag: i32,
    pub(crate) address: &'q [u8],
    pub(crate) payload: &'q [u8],
}

impl<'q> Packet<'q> {
    pub(crate) fn new(offset: usize, interface_tag: i32, address: &'q [u8], payload: &'q [u8]) -> Self {
        Self {
            offset,
            interface_tag,
            address,
            payload,
        }
    }

    /// Byte offset of the record header in the queue's storage.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn interface_tag(&self) -> i32 {
        self.interface_tag
    }

    /// Raw source-address bytes.
    pub fn address(&self) -> &'q [u8] {
        self.address
    }

    pub fn payload(&self) -> &'q [u8] {
        self.payload
    }

    /// Bytes this record occupies in storage, header included.
    pub fn record_size(&self) -> usize {
        HEADER_SIZE + self.address.len() + self.payload.len()
    }

    pub fn to_owned_packet(&self) -> OwnedPacket {
        OwnedPacket {
            address: self.address.to_vec(),
            interface_tag: self.interface_tag,
            payload: self.payload.to_vec(),
        }
    }
}

/// A packet copied out of the queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OwnedPacket {
    pub address: Vec<u8>,
    pub interface_tag: i32,
    pub payload: Vec<u8>,
}

impl From<Packet<'_>> for OwnedPacket {
    fn from(packet: Packet<'_>) -> Self {
        packet.to_owned_packet()
    }
}
