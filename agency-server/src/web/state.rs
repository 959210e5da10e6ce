//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::i18n::LocaleContext;

/// Shared application state.
///
/// Contains everything handlers need: the active-locale context and the
/// server configuration.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide active locale
    pub locale: LocaleContext,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state, starting in the configured default locale.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            locale: LocaleContext::new(config.default_locale),
            config: Arc::new(config),
        }
    }
}
