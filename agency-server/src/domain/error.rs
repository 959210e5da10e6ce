//! Domain error types.
//!
//! `ShapeError` reports a value that does not fit an entity's structural
//! contract. `DomainError` covers lifecycle and pricing failures on values
//! that are already well-formed.

use super::{Currency, DemandStatus, HotelId, RoomTypeEnum};

/// What was wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeErrorKind {
    /// Required field absent or null
    #[error("is required")]
    Missing,

    /// Field present with the wrong JSON type
    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    /// Field has the right type but an unacceptable value
    #[error("invalid value {value}: {reason}")]
    InvalidValue { value: String, reason: String },

    /// Field disagrees with other fields of the same entity
    #[error("{reason}")]
    Inconsistent { reason: String },

    /// The entity itself is not a JSON object
    #[error("expected an object")]
    NotAnObject,
}

/// A value rejected because it does not match an entity's shape.
///
/// `field` is the path from the root of the validated document, e.g.
/// `travelers[1].gender`. The root itself is `$`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} field `{field}` {kind}")]
pub struct ShapeError {
    entity: &'static str,
    field: String,
    kind: ShapeErrorKind,
}

impl ShapeError {
    pub(crate) fn new(entity: &'static str, field: impl Into<String>, kind: ShapeErrorKind) -> Self {
        Self {
            entity,
            field: field.into(),
            kind,
        }
    }

    pub(crate) fn inconsistent(
        entity: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            entity,
            field,
            ShapeErrorKind::Inconsistent {
                reason: reason.into(),
            },
        )
    }

    /// Name of the entity whose field was rejected.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &ShapeErrorKind {
        &self.kind
    }
}

/// Errors from operating on well-formed domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Status change not allowed by the demand lifecycle
    #[error("cannot move demand from {from} to {to}")]
    InvalidTransition { from: DemandStatus, to: DemandStatus },

    /// A referenced entity is not in the catalog
    #[error("unknown {kind} `{id}`")]
    UnknownReference { kind: &'static str, id: String },

    /// The hotel has no rooms of the requested type
    #[error("hotel {hotel} does not offer {room} rooms")]
    RoomNotOffered { hotel: HotelId, room: RoomTypeEnum },

    /// The hotel is booked for a city it is not in
    #[error("hotel {hotel} is not in city {city}")]
    HotelNotInCity { hotel: HotelId, city: String },

    /// A line item is priced in another currency than the demand
    #[error("{kind} `{id}` is priced in {found}, demand is in {expected}")]
    CurrencyMismatch {
        kind: &'static str,
        id: String,
        expected: Currency,
        found: Currency,
    },

    /// Quote total does not fit
    #[error("price overflow while quoting")]
    PriceOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_display() {
        let err = ShapeError::new("ClientDemand", "status", ShapeErrorKind::Missing);
        assert_eq!(err.to_string(), "ClientDemand field `status` is required");

        let err = ShapeError::new(
            "Traveler",
            "travelers[0].gender",
            ShapeErrorKind::InvalidValue {
                value: "\"x\"".into(),
                reason: "unknown Gender".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Traveler field `travelers[0].gender` invalid value \"x\": unknown Gender"
        );

        let err = ShapeError::new("City", "$", ShapeErrorKind::NotAnObject);
        assert_eq!(err.to_string(), "City field `$` expected an object");

        let err = ShapeError::inconsistent("SpecialPackage", "finalPrice", "expected 900");
        assert_eq!(err.entity(), "SpecialPackage");
        assert_eq!(err.field(), "finalPrice");
        assert_eq!(err.to_string(), "SpecialPackage field `finalPrice` expected 900");
    }

    #[test]
    fn domain_error_display() {
        let err = DomainError::InvalidTransition {
            from: DemandStatus::Cancelled,
            to: DemandStatus::Confirmed,
        };
        assert_eq!(err.to_string(), "cannot move demand from cancelled to confirmed");

        let err = DomainError::UnknownReference {
            kind: "hotel",
            id: "h9".into(),
        };
        assert_eq!(err.to_string(), "unknown hotel `h9`");

        let err = DomainError::RoomNotOffered {
            hotel: HotelId::new("h1").unwrap(),
            room: RoomTypeEnum::Suite,
        };
        assert_eq!(err.to_string(), "hotel h1 does not offer suite rooms");

        let err = DomainError::CurrencyMismatch {
            kind: "service",
            id: "s1".into(),
            expected: Currency::Eur,
            found: Currency::Usd,
        };
        assert_eq!(err.to_string(), "service `s1` is priced in USD, demand is in EUR");
    }
}
