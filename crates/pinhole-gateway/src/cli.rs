use crate::state::ResolveMode;
use clap::{Parser, ValueEnum};
use pinhole_shortener::ShortenerSettings;
use pinhole_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::num::NonZeroU32;

pub const LISTEN_ADDR_ENV: &str = "PINHOLE_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "PINHOLE_GATEWAY_BASE_URL";
pub const RESOLVE_MODE_ENV: &str = "PINHOLE_GATEWAY_RESOLVE_MODE";
pub const CODE_LENGTH_ENV: &str = "PINHOLE_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "PINHOLE_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "PINHOLE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://short.url/";
pub const DEFAULT_CODE_LENGTH: &str = "6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pinhole-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix joined with the short code to form the returned short link.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = CODE_LENGTH_ENV, default_value = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    /// Give up allocating a code after this many collisions. Unbounded if unset.
    #[arg(long, env = MAX_ATTEMPTS_ENV)]
    pub max_attempts: Option<NonZeroU32>,

    #[arg(
        long,
        env = RESOLVE_MODE_ENV,
        value_enum,
        default_value_t = ResolveMode::Json
    )]
    pub resolve_mode: ResolveMode,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}

impl CLI {
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            code_length: self.code_length,
            max_attempts: self.max_attempts,
        }
    }
}
