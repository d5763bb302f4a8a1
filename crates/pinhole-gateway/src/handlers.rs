mod health;
mod url;

pub use health::{health_handler, root_handler};
pub use url::{resolve_handler, resolve_shorten_handler, shorten_handler};
