use dmxp_netq::ffi::*;
use std::ptr;

#[test]
fn ffi_round_trip() {
    let handle = netq_new(256);
    assert!(!handle.is_null());

    let addr = [10u8, 1, 2, 3];
    let payload = b"datagram";
    let rc = netq_admit(handle, addr.as_ptr(), addr.len(), 7, payload.as_ptr(), payload.len());
    assert_eq!(rc, NETQ_SUCCESS);
    assert_eq!(netq_count(handle), 1);

    let mut out_addr = [0u8; 16];
    let mut out_addr_len = out_addr.len();
    let mut out_ifindex = 0i32;
    let mut out_buf = [0u8; 64];
    let mut out_len = out_buf.len();
    let rc = netq_pop(
        handle,
        out_addr.as_mut_ptr(),
        &mut out_addr_len,
        &mut out_ifindex,
        out_buf.as_mut_ptr(),
        &mut out_len,
    );
    assert_eq!(rc, NETQ_SUCCESS);
    assert_eq!(&out_addr[..out_addr_len], &addr);
    assert_eq!(out_ifindex, 7);
    assert_eq!(&out_buf[..out_len], payload);
    assert_eq!(netq_count(handle), 0);

    let rc = netq_pop(
        handle,
        out_addr.as_mut_ptr(),
        &mut out_addr_len,
        ptr::null_mut(),
        out_buf.as_mut_ptr(),
        &mut out_len,
    );
    assert_eq!(rc, NETQ_ERROR_EMPTY);

    netq_free(handle);
}

#[test]
fn ffi_small_buffer_keeps_packet() {
    let handle = netq_new(128);
    let payload = [0x55u8; 40];
    assert_eq!(
        netq_admit(handle, ptr::null(), 0, 1, payload.as_ptr(), payload.len()),
        NETQ_SUCCESS
    );

    let mut out_addr_len = 0usize;
    let mut out_buf = [0u8; 8];
    let mut out_len = out_buf.len();
    let rc = netq_pop(
        handle,
        ptr::null_mut(),
        &mut out_addr_len,
        ptr::null_mut(),
        out_buf.as_mut_ptr(),
        &mut out_len,
    );
    assert_eq!(rc, NETQ_ERROR_BUFFER_TOO_SMALL);
    assert_eq!(out_len, 40);
    assert_eq!(out_addr_len, 0);
    assert_eq!(netq_count(handle), 1);

    netq_free(handle);
}

#[test]
fn ffi_out_of_space_and_null_handles() {
    let handle = netq_new(32);
    let payload = [0u8; 64];
    assert_eq!(
        netq_admit(handle, ptr::null(), 0, 0, payload.as_ptr(), payload.len()),
        NETQ_ERROR_OUT_OF_SPACE
    );
    assert_eq!(
        netq_admit(handle, ptr::null(), 4, 0, payload.as_ptr(), 1),
        NETQ_ERROR_NULL_POINTER
    );
    netq_free(handle);

    assert!(netq_new(0).is_null());
    assert_eq!(netq_count(ptr::null()), 0);
    assert_eq!(
        netq_admit(ptr::null_mut(), ptr::null(), 0, 0, ptr::null(), 0),
        NETQ_ERROR_NULL_POINTER
    );
    netq_dump(ptr::null());
    netq_free(ptr::null_mut());
}
