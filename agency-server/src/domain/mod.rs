//! Travel domain model.
//!
//! This module contains the core types of the agency: closed enumerations,
//! identifiers, money, and the records for cities, hotels, bookable items,
//! travelers, client demands and packages. Values read from untyped JSON go
//! through [`from_value`] (or `serde::Deserialize`, which uses it), so code
//! that receives these types can trust their shape.

mod catalog;
mod city;
mod demand;
mod enums;
mod error;
mod hotel;
mod ids;
mod money;
mod package;
mod shape;
mod traveler;

pub use catalog::{Activity, Catalog, Service, Transport};
pub use city::{City, CitySelection};
pub use demand::{ClientDemand, DEFAULT_ROOM_TYPE, DemandCity, NewDemand, Quote, QuoteLine};
pub use enums::{
    ClosedEnum, Currency, DemandStatus, Gender, InvalidEnumValue, RoomTypeEnum, ServiceType,
    TransportType, TravelerType, UserRole,
};
pub use error::{DomainError, ShapeError, ShapeErrorKind};
pub use hotel::{Hotel, RoomType};
pub use ids::{ActivityId, CityId, DemandId, HotelId, InvalidId, PackageId, ServiceId, TransportId};
pub use money::{Amount, DiscountPercent, InvalidAmount};
pub use package::{AdminPackage, NewSpecialPackage, PackageCityPeriod, SpecialPackage};
pub use shape::{Record, Scope, Shape, from_value};
pub use traveler::{ClientInfo, MainTraveler, Traveler};

// Legacy names. These are synonyms of the canonical types, kept so callers
// written against the older names keep compiling.

/// Former name of [`ClientDemand`].
pub type Demand = ClientDemand;

/// Former name of [`ClientDemand`] used by listing views.
pub type DemandForDisplay = ClientDemand;

/// Former name of [`Service`].
pub type ServiceOffering = Service;
