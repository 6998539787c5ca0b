use tracing::{debug, trace, warn};

use super::layout::{RecordHeader, HEADER_SIZE, NO_NEXT};
use super::Queue::{PacketQueue, Placement, MAX_CAPACITY};
use crate::error::{NetqError, Result};
use crate::NetQ::Structs::Packet_Structs::Packet;

#[inline]
fn link(next: u32) -> Option<usize> {
    (next != NO_NEXT).then_some(next as usize)
}

impl PacketQueue {
    /// Create a queue backed by `capacity` zeroed bytes.
    ///
    /// This is the only allocation the queue ever makes.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(NetqError::InvalidCapacity {
                capacity,
                reason: "capacity must be greater than zero",
            });
        }
        if capacity > MAX_CAPACITY {
            return Err(NetqError::InvalidCapacity {
                capacity,
                reason: "capacity exceeds 32-bit record offsets",
            });
        }

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| NetqError::AllocationFailed { capacity })?;
        storage.resize(capacity, 0u8);

        debug!(capacity, "created packet queue");

        Ok(Self {
            storage: storage.into_boxed_slice(),
            head: None,
            tail: None,
        })
    }

    /// Total size of the backing region in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Arena footprint of a record with the given address and payload sizes.
    #[inline]
    pub fn record_size(address_len: usize, payload_len: usize) -> usize {
        HEADER_SIZE
            .saturating_add(address_len)
            .saturating_add(payload_len)
    }

    #[inline]
    fn header_at(&self, offset: usize) -> RecordHeader {
        RecordHeader::read_from(&self.storage[offset..offset + HEADER_SIZE])
    }

    /// First byte past the record stored at `offset`.
    #[inline]
    fn record_end(&self, offset: usize) -> usize {
        offset + self.header_at(offset).record_size()
    }

    pub(crate) fn packet_at(&self, offset: usize) -> Packet<'_> {
        let header = self.header_at(offset);
        let address_start = offset + HEADER_SIZE;
        let payload_start = address_start + header.address_len as usize;
        let payload_end = payload_start + header.payload_len as usize;
        Packet::new(
            offset,
            header.interface_tag,
            &self.storage[address_start..payload_start],
            &self.storage[payload_start..payload_end],
        )
    }

    /// Find a contiguous free span of at least `size` bytes.
    ///
    /// Decided by comparing the end of the tail record against `head`:
    /// if the tail end sits at or before `head` the ring has wrapped and only
    /// the middle gap is free; otherwise try the region end, then the front.
    pub(crate) fn find_span(&self, size: usize) -> Option<(usize, Placement)> {
        let capacity = self.capacity();
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return (size <= capacity).then_some((0, Placement::Empty));
        };

        let start = self.record_end(tail);
        if head >= start {
            return (head - start >= size).then_some((start, Placement::Middle));
        }

        if capacity - start >= size {
            Some((start, Placement::Tail))
        } else if head >= size {
            Some((0, Placement::Front))
        } else {
            None
        }
    }

    /// Copy a packet into the queue and append it at the tail.
    ///
    /// Fails with [`NetqError::OutOfSpace`] when no free span fits the
    /// record; in that case nothing in the queue is modified.
    pub fn admit(&mut self, address: &[u8], interface_tag: i32, payload: &[u8]) -> Result<Packet<'_>> {
        let (Ok(address_len), Ok(payload_len)) =
            (u32::try_from(address.len()), u32::try_from(payload.len()))
        else {
            return Err(NetqError::RecordTooLarge {
                address_len: address.len(),
                payload_len: payload.len(),
            });
        };

        let size = Self::record_size(address.len(), payload.len());
        let Some((offset, placement)) = self.find_span(size) else {
            warn!(size, capacity = self.capacity(), "cannot store packet: out of space");
            return Err(NetqError::OutOfSpace {
                requested: size,
                capacity: self.capacity(),
            });
        };

        let header = RecordHeader {
            next: NO_NEXT,
            address_len,
            interface_tag,
            payload_len,
        };
        let record = &mut self.storage[offset..offset + size];
        header.write_to(record);
        let (address_span, payload_span) = record[HEADER_SIZE..].split_at_mut(address.len());
        address_span.copy_from_slice(address);
        payload_span.copy_from_slice(payload);

        debug!(offset, size, ?placement, "admitted packet");

        self.push(offset);
        Ok(self.packet_at(offset))
    }

    /// Link an already-written record at `offset` in as the new tail.
    pub(crate) fn push(&mut self, offset: usize) {
        RecordHeader::write_next(&mut self.storage[offset..], NO_NEXT);
        match self.tail {
            Some(tail) => RecordHeader::write_next(&mut self.storage[tail..], offset as u32),
            None => self.head = Some(offset),
        }
        self.tail = Some(offset);
    }

    /// Remove the oldest record.
    ///
    /// The returned view points into the queue's storage and borrows the
    /// queue, so no admit can overwrite it while it is alive. Use
    /// [`Packet::to_owned_packet`] to keep the data longer.
    pub fn pop(&mut self) -> Option<Packet<'_>> {
        let offset = self.head?;
        self.head = link(self.header_at(offset).next);
        if self.tail == Some(offset) {
            self.tail = None;
        }
        trace!(offset, "popped packet");
        Some(self.packet_at(offset))
    }

    /// View the oldest record without removing it.
    pub fn peek(&self) -> Option<Packet<'_>> {
        self.head.map(|offset| self.packet_at(offset))
    }

    /// Number of live records. Walks the chain.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Bytes covered by live records, headers included.
    pub fn occupied_bytes(&self) -> usize {
        self.iter().map(|p| p.record_size()).sum()
    }

    /// Drop every live record. Storage bytes are left as they are.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// Live records in arrival order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.head,
        }
    }
}

/// Iterator over live records, oldest first.
pub struct Iter<'q> {
    queue: &'q PacketQueue,
    cursor: Option<usize>,
}

impl<'q> Iterator for Iter<'q> {
    type Item = Packet<'q>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor?;
        self.cursor = link(self.queue.header_at(offset).next);
        Some(self.queue.packet_at(offset))
    }
}

impl<'q> IntoIterator for &'q PacketQueue {
    type Item = Packet<'q>;
    type IntoIter = Iter<'q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
