// A PacketQueue behind a lock, for callers that feed and drain it from
// different threads. The queue itself does no synchronization.

use std::sync::Arc;

use parking_lot::Mutex;

use super::Queue::PacketQueue;
use super::Structs::OwnedPacket;
use crate::error::Result;

/// Cloneable handle to a [`PacketQueue`] guarded by a mutex.
///
/// Every operation takes the lock for its whole duration. Popped packets
/// are copied out because a borrowed view cannot outlive the guard.
#[derive(Clone)]
pub struct SharedQueue {
    inner: Arc<Mutex<PacketQueue>>,
}

impl SharedQueue {
    pub fn new(queue: PacketQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// Admit a packet. Returns the record's offset in storage.
    pub fn admit(&self, address: &[u8], interface_tag: i32, payload: &[u8]) -> Result<usize> {
        let mut queue = self.inner.lock();
        queue
            .admit(address, interface_tag, payload)
            .map(|packet| packet.offset())
    }

    pub fn pop(&self) -> Option<OwnedPacket> {
        self.inner.lock().pop().map(OwnedPacket::from)
    }

    pub fn count(&self) -> usize {
        self.inner.lock().count()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Run `f` with exclusive access to the queue.
    pub fn with_queue<R>(&self, f: impl FnOnce(&mut PacketQueue) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
