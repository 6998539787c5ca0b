// Module naming follows project convention (NetQ = network packet queue)
#[allow(non_snake_case)]
pub mod NetQ;

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub mod error;
pub mod ffi;

pub use error::{NetqError, Result};
pub use NetQ::Queue::{PacketQueue, HEADER_SIZE};
pub use NetQ::Structs::{OwnedPacket, Packet};
pub use NetQ::{QueueBuilder, SharedQueue};
