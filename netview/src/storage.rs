//! Concrete network storages.

pub mod memory;

#[doc(inline)]
pub use memory::MemoryNetwork;
