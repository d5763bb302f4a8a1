use clap::ValueEnum;
use pinhole_core::Shortener;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// How `GET /{short_code}` answers a known code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolveMode {
    /// `200 OK` with `{"long_url": ...}`.
    #[default]
    #[value(name = "json")]
    Json,
    /// `307 Temporary Redirect` to the long URL.
    #[value(name = "redirect")]
    Redirect,
}

impl Display for ResolveMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveMode::Json => write!(f, "json"),
            ResolveMode::Redirect => write!(f, "redirect"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    base_url: Arc<str>,
    resolve_mode: ResolveMode,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        public_base_url: impl Into<String>,
        resolve_mode: ResolveMode,
    ) -> Self {
        let base_url: String = public_base_url.into();
        Self {
            shortener,
            base_url: Arc::from(base_url),
            resolve_mode,
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    /// Prefix of every short link handed out, e.g. `http://short.url/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve_mode(&self) -> ResolveMode {
        self.resolve_mode
    }
}
