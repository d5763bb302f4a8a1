//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which allocates short codes
//! against a repository and resolves them back. Core types are re-exported
//! from `pinhole_core`.

pub mod service;
pub mod settings;

pub use pinhole_core::{ShortCode, Shortener, ShortenerError};
pub use service::ShortenerService;
pub use settings::ShortenerSettings;
