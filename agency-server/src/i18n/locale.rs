//! Supported display locales.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{code}`; expected one of: en, ar, fr, de")]
pub struct UnsupportedLocale {
    code: String,
}

/// One of the four display languages.
///
/// # Examples
///
/// ```
/// use agency_server::i18n::Locale;
///
/// let ar = Locale::parse("ar").unwrap();
/// assert!(ar.is_rtl());
/// assert_eq!(ar.native_name(), "العربية");
///
/// assert!(Locale::parse("es").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
    Fr,
    De,
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Ar, Locale::Fr, Locale::De];

    /// Parse a locale code. Surrounding whitespace and case are ignored.
    pub fn parse(code: &str) -> Result<Self, UnsupportedLocale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "fr" => Ok(Locale::Fr),
            "de" => Ok(Locale::De),
            _ => Err(UnsupportedLocale {
                code: code.to_string(),
            }),
        }
    }

    /// ISO 639-1 code, also used as the HTML `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Name of the language in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    /// Path of the flag image under the static directory.
    pub fn flag(&self) -> &'static str {
        match self {
            Locale::En => "/static/flags/gb.svg",
            Locale::Ar => "/static/flags/ma.svg",
            Locale::Fr => "/static/flags/fr.svg",
            Locale::De => "/static/flags/de.svg",
        }
    }

    /// Whether text in this locale runs right to left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// HTML `dir` attribute value.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
