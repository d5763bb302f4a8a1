//! Core types and traits for the Pinhole URL shortener.
//!
//! This crate provides the short code type, the mapping store contract and
//! the shortener contract shared by the storage, shortener and gateway
//! crates.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{CoreError, ShortenerError, StorageError};
pub use repository::{Claim, ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use shortener::Shortener;
