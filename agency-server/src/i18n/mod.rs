//! Localization context.
//!
//! The active locale is process-wide state owned by a [`LocaleContext`],
//! which the web layer holds in its application state and hands to
//! handlers. Rendering code takes a [`Translator`] snapshot so a page is
//! rendered in one locale even if the locale changes mid-request.

mod locale;
mod messages;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use locale::{Locale, UnsupportedLocale};

/// Shared, switchable active locale.
#[derive(Clone)]
pub struct LocaleContext {
    active: Arc<RwLock<Locale>>,
}

impl LocaleContext {
    /// Create a context with the given initial locale.
    pub fn new(initial: Locale) -> Self {
        Self {
            active: Arc::new(RwLock::new(initial)),
        }
    }

    /// The currently active locale.
    pub async fn current(&self) -> Locale {
        *self.active.read().await
    }

    /// Change the active locale, returning the previous one.
    pub async fn set(&self, locale: Locale) -> Locale {
        let mut guard = self.active.write().await;
        std::mem::replace(&mut *guard, locale)
    }

    /// A translator for the currently active locale.
    pub async fn translator(&self) -> Translator {
        Translator::new(self.current().await)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Key lookup fixed to one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate a key.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        messages::lookup(self.locale, key)
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }

    /// HTML `dir` attribute value.
    pub fn dir(&self) -> &'static str {
        self.locale.dir()
    }

    /// HTML `lang` attribute value.
    pub fn lang(&self) -> &'static str {
        self.locale.code()
    }
}
