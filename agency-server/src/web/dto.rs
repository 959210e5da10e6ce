//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dashboard::StatCardView;
use crate::domain::{
    ClosedEnum, Currency, DemandStatus, Gender, RoomTypeEnum, ServiceType, ShapeError,
    TransportType, TravelerType, UserRole,
};
use crate::i18n::Locale;

/// Form posted by the language switcher.
#[derive(Debug, Deserialize)]
pub struct LocaleForm {
    /// Locale code to activate
    pub locale: String,

    /// Page to go back to afterwards
    pub return_to: Option<String>,
}

/// JSON request to change the active locale.
#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

/// The active locale.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResponse {
    pub code: String,
    pub native_name: String,
    pub flag: String,
    pub rtl: bool,
    pub dir: String,
    /// Every locale that can be selected
    pub available: Vec<String>,
}

impl LocaleResponse {
    pub fn from_locale(locale: Locale) -> Self {
        Self {
            code: locale.code().to_string(),
            native_name: locale.native_name().to_string(),
            flag: locale.flag().to_string(),
            rtl: locale.is_rtl(),
            dir: locale.dir().to_string(),
            available: Locale::ALL.iter().map(|l| l.code().to_string()).collect(),
        }
    }
}

/// Dashboard stat cards.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub locale: Locale,
    pub cards: Vec<StatCardView>,
}

/// Members of one closed enumeration.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl EnumEntry {
    fn of<E: ClosedEnum>() -> Self {
        Self {
            name: E::NAME,
            members: E::TAGS,
        }
    }
}

/// Every enumeration of the wire contract.
#[derive(Debug, Serialize)]
pub struct EnumCatalogResponse {
    pub enums: Vec<EnumEntry>,
}

impl EnumCatalogResponse {
    pub fn build() -> Self {
        Self {
            enums: vec![
                EnumEntry::of::<DemandStatus>(),
                EnumEntry::of::<TransportType>(),
                EnumEntry::of::<Gender>(),
                EnumEntry::of::<TravelerType>(),
                EnumEntry::of::<ServiceType>(),
                EnumEntry::of::<Currency>(),
                EnumEntry::of::<RoomTypeEnum>(),
                EnumEntry::of::<UserRole>(),
            ],
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Entity whose shape was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Path of the offending field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn message(error: String) -> Self {
        Self {
            error,
            entity: None,
            field: None,
        }
    }

    pub fn from_shape(err: &ShapeError) -> Self {
        Self {
            error: err.to_string(),
            entity: Some(err.entity().to_string()),
            field: Some(err.field().to_string()),
        }
    }
}
