//! Domain layer: inventory entities and tree rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod address;
pub mod component;
pub mod computer;
pub mod error;
pub mod network;
pub mod printable;
pub mod tree_convert;
pub mod tree_format;

pub use address::Address;
pub use component::{Component, Cpu, Disk, Memory, Partition, StorageKind};
pub use computer::Computer;
pub use error::{DomainError, DomainResult};
pub use network::Network;
pub use printable::Printable;
pub use tree_convert::{TreeConvert, ASCII_GLYPHS};
