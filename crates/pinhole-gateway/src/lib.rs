//! HTTP front end for the Pinhole URL shortener.
//!
//! The gateway owns no shortening logic: it decodes requests, calls
//! [`Shortener::create`](pinhole_core::Shortener::create) or
//! [`Shortener::resolve`](pinhole_core::Shortener::resolve), and formats
//! the result.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::{AppState, ResolveMode};
