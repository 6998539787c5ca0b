use crate::error::NetqError;
use crate::NetQ::Queue::PacketQueue;
use std::ptr;

// Error codes
pub const NETQ_SUCCESS: i32 = 0;
pub const NETQ_ERROR_NULL_POINTER: i32 = -1;
pub const NETQ_ERROR_INVALID_ARG: i32 = -2;
pub const NETQ_ERROR_ALLOCATION_FAILED: i32 = -3;
pub const NETQ_ERROR_OUT_OF_SPACE: i32 = -4;
pub const NETQ_ERROR_EMPTY: i32 = -5;
pub const NETQ_ERROR_BUFFER_TOO_SMALL: i32 = -6;

/// Handle to a queue instance (opaque pointer)
pub struct NetqHandle {
    inner: PacketQueue,
}

fn error_code(err: &NetqError) -> i32 {
    match err {
        NetqError::OutOfSpace { .. } => NETQ_ERROR_OUT_OF_SPACE,
        NetqError::AllocationFailed { .. } => NETQ_ERROR_ALLOCATION_FAILED,
        NetqError::InvalidCapacity { .. } | NetqError::RecordTooLarge { .. } => {
            NETQ_ERROR_INVALID_ARG
        }
    }
}

/// Build a byte slice from a C pointer/length pair. A null pointer is only
/// accepted for an empty slice.
///
/// # Safety
/// A non-null `data` must be valid for reads of `len` bytes.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(std::slice::from_raw_parts(data, len))
}

// -----------------------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------------------

/// Create a new queue.
///
/// # Arguments
/// * `capacity` - Size of the backing region in bytes.
///
/// # Returns
/// * Pointer to `NetqHandle`, or NULL on failure.
#[no_mangle]
pub extern "C" fn netq_new(capacity: usize) -> *mut NetqHandle {
    match PacketQueue::new(capacity) {
        Ok(queue) => Box::into_raw(Box::new(NetqHandle { inner: queue })),
        Err(e) => {
            tracing::error!("FFI Error: Failed to create queue: {}", e);
            ptr::null_mut()
        }
    }
}

/// Free a queue handle and every record in it.
#[no_mangle]
pub extern "C" fn netq_free(handle: *mut NetqHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle); // Dropped automatically
        }
    }
}

// -----------------------------------------------------------------------------
// Queue API
// -----------------------------------------------------------------------------

/// Copy a packet into the queue.
///
/// # Arguments
/// * `handle` - Pointer to `NetqHandle`.
/// * `addr`, `addr_len` - Source address bytes.
/// * `ifindex` - Ingress interface.
/// * `data`, `len` - Payload bytes.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn netq_admit(
    handle: *mut NetqHandle,
    addr: *const u8,
    addr_len: usize,
    ifindex: i32,
    data: *const u8,
    len: usize,
) -> i32 {
    if handle.is_null() {
        return NETQ_ERROR_NULL_POINTER;
    }

    let queue = unsafe { &mut (*handle).inner };
    let (Some(address), Some(payload)) =
        (unsafe { input_slice(addr, addr_len) }, unsafe { input_slice(data, len) })
    else {
        return NETQ_ERROR_NULL_POINTER;
    };

    match queue.admit(address, ifindex, payload) {
        Ok(_) => NETQ_SUCCESS,
        Err(e) => error_code(&e),
    }
}

/// Remove the oldest packet, copying it into caller buffers.
///
/// # Arguments
/// * `handle` - Pointer to `NetqHandle`.
/// * `out_addr` - Buffer for the address bytes.
/// * `addr_len` - Input: size of `out_addr`, Output: size of the address.
/// * `out_ifindex` - Receives the interface tag (may be NULL).
/// * `out_buf` - Buffer for the payload.
/// * `out_len` - Input: size of `out_buf`, Output: size of the payload.
///
/// # Returns
/// * 0 on success.
/// * NETQ_ERROR_EMPTY if the queue holds no packets.
/// * NETQ_ERROR_BUFFER_TOO_SMALL if either buffer is too small; the packet
///   stays queued and both lengths report the required sizes.
#[no_mangle]
pub extern "C" fn netq_pop(
    handle: *mut NetqHandle,
    out_addr: *mut u8,
    addr_len: *mut usize,
    out_ifindex: *mut i32,
    out_buf: *mut u8,
    out_len: *mut usize,
) -> i32 {
    if handle.is_null() || addr_len.is_null() || out_len.is_null() {
        return NETQ_ERROR_NULL_POINTER;
    }

    let queue = unsafe { &mut (*handle).inner };
    let (max_addr, max_len) = unsafe { (*addr_len, *out_len) };

    let Some(head) = queue.peek() else {
        return NETQ_ERROR_EMPTY;
    };
    let (need_addr, need_len) = (head.address().len(), head.payload().len());
    if need_addr > max_addr || need_len > max_len {
        unsafe {
            *addr_len = need_addr;
            *out_len = need_len;
        }
        return NETQ_ERROR_BUFFER_TOO_SMALL;
    }
    if (need_addr > 0 && out_addr.is_null()) || (need_len > 0 && out_buf.is_null()) {
        return NETQ_ERROR_NULL_POINTER;
    }

    let Some(packet) = queue.pop() else {
        return NETQ_ERROR_EMPTY;
    };
    unsafe {
        if need_addr > 0 {
            ptr::copy_nonoverlapping(packet.address().as_ptr(), out_addr, need_addr);
        }
        if need_len > 0 {
            ptr::copy_nonoverlapping(packet.payload().as_ptr(), out_buf, need_len);
        }
        *addr_len = need_addr;
        *out_len = need_len;
        if !out_ifindex.is_null() {
            *out_ifindex = packet.interface_tag();
        }
    }
    NETQ_SUCCESS
}

/// Number of packets in the queue; 0 for a NULL handle.
#[no_mangle]
pub extern "C" fn netq_count(handle: *const NetqHandle) -> usize {
    if handle.is_null() {
        return 0;
    }
    unsafe { (*handle).inner.count() }
}

/// Print the queue listing to stderr.
#[no_mangle]
pub extern "C" fn netq_dump(handle: *const NetqHandle) {
    if handle.is_null() {
        eprintln!("no queue");
        return;
    }
    eprint!("{}", unsafe { &(*handle).inner });
}
