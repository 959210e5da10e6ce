//! Closed enumerations of the travel domain.
//!
//! Every enumeration here is part of the wire contract: its member list is
//! exhaustive, and a tag outside that list is rejected rather than coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {enum_name} `{value}`; expected one of: {}", .allowed.join(", "))]
pub struct InvalidEnumValue {
    enum_name: &'static str,
    value: String,
    allowed: &'static [&'static str],
}

impl InvalidEnumValue {
    /// Name of the enumeration that rejected the value.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The accepted wire tags.
    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }
}

/// A closed set of wire tags.
pub trait ClosedEnum: Copy + Sized + 'static {
    /// Name used in error messages and the enum catalog.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Wire tags of every member, in declaration order.
    const TAGS: &'static [&'static str];

    /// Returns the wire tag of this member.
    fn tag(&self) -> &'static str;
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Returns the wire tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag ),+
                }
            }

            /// Parse a wire tag. Matching is exact and case-sensitive.
            pub fn parse(s: &str) -> Result<Self, InvalidEnumValue> {
                match s {
                    $( $tag => Ok($name::$variant), )+
                    _ => Err(InvalidEnumValue {
                        enum_name: stringify!($name),
                        value: s.to_string(),
                        allowed: <$name as ClosedEnum>::TAGS,
                    }),
                }
            }
        }

        impl ClosedEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$( $name::$variant ),+];
            const TAGS: &'static [&'static str] = &[$( $tag ),+];

            fn tag(&self) -> &'static str {
                self.as_str()
            }
        }

        impl FromStr for $name {
            type Err = InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

closed_enum! {
    /// Lifecycle status of a client demand.
    ///
    /// Demands are never deleted; `Cancelled` and `Completed` are terminal.
    pub enum DemandStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
        Completed => "completed",
    }
}

impl DemandStatus {
    /// Returns true if no further transition is allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DemandStatus::Cancelled | DemandStatus::Completed)
    }

    /// Whether staff may move a demand from `self` to `next`.
    pub fn can_transition_to(&self, next: DemandStatus) -> bool {
        use DemandStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

closed_enum! {
    /// Mode of a transport line item.
    pub enum TransportType {
        Flight => "flight",
        Train => "train",
        Bus => "bus",
        Car => "car",
        Ferry => "ferry",
    }
}

closed_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

closed_enum! {
    /// Age band of a traveler.
    pub enum TravelerType {
        Adult => "adult",
        Child => "child",
        Infant => "infant",
    }
}

closed_enum! {
    /// Classifier of a bookable service.
    pub enum ServiceType {
        Guide => "guide",
        Transfer => "transfer",
        Insurance => "insurance",
        Visa => "visa",
        Other => "other",
    }
}

closed_enum! {
    /// Currencies prices may be quoted in (ISO 4217 codes).
    pub enum Currency {
        Usd => "USD",
        Eur => "EUR",
        Gbp => "GBP",
        Mad => "MAD",
    }
}

impl Currency {
    /// Display symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Mad => "MAD ",
        }
    }
}

closed_enum! {
    /// Kind of hotel room.
    pub enum RoomTypeEnum {
        Single => "single",
        Double => "double",
        Twin => "twin",
        Triple => "triple",
        Suite => "suite",
    }
}

closed_enum! {
    /// Role of a user of the agency back office.
    pub enum UserRole {
        Admin => "admin",
        Agent => "agent",
        Client => "client",
    }
}
