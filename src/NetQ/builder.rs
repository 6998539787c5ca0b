use super::Queue::PacketQueue;
use super::SharedQueue;
use crate::error::Result;

pub struct QueueBuilder {
    capacity: usize,
}

impl Default for QueueBuilder {
    fn default() -> Self {
        Self {
            capacity: 64 * 1024, // 64KB default
        }
    }
}

impl QueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the backing region in bytes, record headers included.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn build(self) -> Result<PacketQueue> {
        PacketQueue::new(self.capacity)
    }

    pub fn build_shared(self) -> Result<SharedQueue> {
        self.build().map(SharedQueue::new)
    }
}
