/// Offset value meaning "no next record".
///
/// Offset 0 is a valid record position (the front of the region), so the
/// sentinel has to live at the other end of the range.
pub const NO_NEXT: u32 = u32::MAX;

/// Fixed metadata footprint that precedes every record in the arena.
///
/// The struct documents the byte layout; records are never transmuted in
/// place. [`RecordHeader::write_to`] and [`RecordHeader::read_from`] encode
/// each field little-endian at the offsets below, so the arena needs no
/// alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordHeader {
    /// Arena offset of the next record in arrival order, or [`NO_NEXT`].
    pub next: u32,
    /// Length of the source-address bytes that follow the header.
    pub address_len: u32,
    /// Opaque ingress interface identifier.
    pub interface_tag: i32,
    /// Length of the payload bytes that follow the address.
    pub payload_len: u32,
}

pub const NEXT_OFFSET: usize = 0;
pub const ADDRESS_LEN_OFFSET: usize = 4;
pub const INTERFACE_TAG_OFFSET: usize = 8;
pub const PAYLOAD_LEN_OFFSET: usize = 12;

/// Size in bytes of [`RecordHeader`] inside the arena.
pub const HEADER_SIZE: usize = 16;

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(word)
}

impl RecordHeader {
    /// Decode the header stored at the start of `bytes`.
    #[inline]
    pub fn read_from(bytes: &[u8]) -> Self {
        Self {
            next: read_u32(bytes, NEXT_OFFSET),
            address_len: read_u32(bytes, ADDRESS_LEN_OFFSET),
            interface_tag: read_u32(bytes, INTERFACE_TAG_OFFSET) as i32,
            payload_len: read_u32(bytes, PAYLOAD_LEN_OFFSET),
        }
    }

    /// Encode the header into the first [`HEADER_SIZE`] bytes of `bytes`.
    #[inline]
    pub fn write_to(&self, bytes: &mut [u8]) {
        bytes[NEXT_OFFSET..NEXT_OFFSET + 4].copy_from_slice(&self.next.to_le_bytes());
        bytes[ADDRESS_LEN_OFFSET..ADDRESS_LEN_OFFSET + 4]
            .copy_from_slice(&self.address_len.to_le_bytes());
        bytes[INTERFACE_TAG_OFFSET..INTERFACE_TAG_OFFSET + 4]
            .copy_from_slice(&self.interface_tag.to_le_bytes());
        bytes[PAYLOAD_LEN_OFFSET..PAYLOAD_LEN_OFFSET + 4]
            .copy_from_slice(&self.payload_len.to_le_bytes());
    }

    /// Patch only the `next` link of a header already in the arena.
    #[inline]
    pub fn write_next(bytes: &mut [u8], next: u32) {
        bytes[NEXT_OFFSET..NEXT_OFFSET + 4].copy_from_slice(&next.to_le_bytes());
    }

    /// Total arena footprint of this record: header, address and payload.
    #[inline]
    pub fn record_size(&self) -> usize {
        HEADER_SIZE + self.address_len as usize + self.payload_len as usize
    }
}
