//! Server configuration.

use std::net::SocketAddr;

use crate::i18n::{Locale, UnsupportedLocale};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Bind address did not parse
    #[error("invalid AGENCY_BIND_ADDR `{value}`: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// Default locale is not supported
    #[error("invalid AGENCY_DEFAULT_LOCALE: {0}")]
    Locale(#[from] UnsupportedLocale),

    /// CTA target must be a site-relative path
    #[error("invalid AGENCY_CTA_TARGET `{0}`: must start with '/'")]
    CtaTarget(String),
}

/// Configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// Locale active at startup.
    pub default_locale: Locale,

    /// Where the floating call-to-action leads.
    pub cta_target: String,
}

impl ServerConfig {
    /// Load from the process environment, using defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("AGENCY_BIND_ADDR") {
            config.bind_addr = value
                .parse()
                .map_err(|source| ConfigError::BindAddr { value, source })?;
        }
        if let Some(value) = lookup("AGENCY_STATIC_DIR") {
            config.static_dir = value;
        }
        if let Some(value) = lookup("AGENCY_DEFAULT_LOCALE") {
            config.default_locale = Locale::parse(&value)?;
        }
        if let Some(value) = lookup("AGENCY_CTA_TARGET") {
            if !value.starts_with('/') {
                return Err(ConfigError::CtaTarget(value));
            }
            config.cta_target = value;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
            default_locale: Locale::En,
            cta_target: "/dashboard".to_string(),
        }
    }
}
