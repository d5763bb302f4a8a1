//! Mapping store backends for the Pinhole URL shortener.

pub mod memory;

pub use memory::InMemoryRepository;
pub use pinhole_core::repository::{Claim, ReadRepository, Repository, Result};
pub use pinhole_core::StorageError;
