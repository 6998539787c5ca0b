mod builder;
mod shared;

pub use builder::QueueBuilder;
pub use shared::SharedQueue;

pub mod Queue {
    pub mod Queue;
    pub mod Queue_impl;
    pub mod layout;
    pub use layout::{RecordHeader, HEADER_SIZE, NO_NEXT}; // re-export for stable path
    pub use Queue::{PacketQueue, Placement, MAX_CAPACITY};
    pub use Queue_impl::Iter;
}

pub mod Structs {
    pub mod Packet_Structs;
    pub use Packet_Structs::{OwnedPacket, Packet}; // re-export for stable path
}
