// Layout conformance tests for the in-arena record header.
// The encoder writes each field at a fixed byte offset; these tests make
// sure those offsets agree with the #[repr(C)] struct that documents them.
use dmxp_netq::NetQ::Queue::layout::{
    RecordHeader, ADDRESS_LEN_OFFSET, HEADER_SIZE, INTERFACE_TAG_OFFSET, NEXT_OFFSET, NO_NEXT,
    PAYLOAD_LEN_OFFSET,
};
use memoffset::offset_of;
use std::mem::{align_of, size_of};

#[test]
fn test_record_header_layout() {
    let size = size_of::<RecordHeader>();
    let align = align_of::<RecordHeader>();
    let off_next = offset_of!(RecordHeader, next);
    let off_address_len = offset_of!(RecordHeader, address_len);
    let off_interface_tag = offset_of!(RecordHeader, interface_tag);
    let off_payload_len = offset_of!(RecordHeader, payload_len);

    println!(
        "RecordHeader => size: {size}, expected: {HEADER_SIZE}, align: {align}, offsets: [next:{off_next}, address_len:{off_address_len}, interface_tag:{off_interface_tag}, payload_len:{off_payload_len}]"
    );

    assert_eq!(size, HEADER_SIZE);
    assert_eq!(align, align_of::<u32>());
    assert_eq!(off_next, NEXT_OFFSET);
    assert_eq!(off_address_len, ADDRESS_LEN_OFFSET);
    assert_eq!(off_interface_tag, INTERFACE_TAG_OFFSET);
    assert_eq!(off_payload_len, PAYLOAD_LEN_OFFSET);
}

#[test]
fn test_header_encoding_is_little_endian() {
    let header = RecordHeader {
        next: 0x0403_0201,
        address_len: 0x10,
        interface_tag: -1,
        payload_len: 0x0000_0102,
    };
    let mut bytes = [0u8; HEADER_SIZE];
    header.write_to(&mut bytes);

    assert_eq!(&bytes[NEXT_OFFSET..NEXT_OFFSET + 4], &[1, 2, 3, 4]);
    assert_eq!(&bytes[ADDRESS_LEN_OFFSET..ADDRESS_LEN_OFFSET + 4], &[0x10, 0, 0, 0]);
    assert_eq!(&bytes[INTERFACE_TAG_OFFSET..INTERFACE_TAG_OFFSET + 4], &[0xff; 4]);
    assert_eq!(&bytes[PAYLOAD_LEN_OFFSET..PAYLOAD_LEN_OFFSET + 4], &[2, 1, 0, 0]);
    assert_eq!(RecordHeader::read_from(&bytes), header);
    assert_eq!(header.record_size(), HEADER_SIZE + 0x10 + 0x102);
}

#[test]
fn test_no_next_is_not_a_valid_offset() {
    assert_ne!(NO_NEXT, 0);
    assert!(NO_NEXT as usize >= dmxp_netq::NetQ::Queue::MAX_CAPACITY);
}
