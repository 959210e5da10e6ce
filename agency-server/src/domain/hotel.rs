//! Hotels and the room types they offer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ShapeError;
use super::ids::{CityId, HotelId};
use super::money::Amount;
use super::shape::{Record, Scope, Shape, shape_from_json};
use super::{Currency, RoomTypeEnum};

/// Highest hotel star rating.
const MAX_STARS: u8 = 5;

/// A kind of room a hotel offers, with its nightly price and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct RoomType {
    #[serde(rename = "type")]
    pub kind: RoomTypeEnum,
    pub price_per_night: Amount,
    /// Maximum guests per room
    pub capacity: u8,
}

impl RoomType {
    pub fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.at_least("capacity", self.capacity, 1)
    }
}

impl Shape for RoomType {
    const ENTITY: &'static str = "RoomType";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let room = RoomType {
            kind: record.parse("type")?,
            price_per_night: record.amount("pricePerNight")?,
            capacity: record.count("capacity")?,
        };
        room.validate(record.scope())?;
        Ok(room)
    }
}

/// A hotel in a city.
///
/// Room types are non-empty and each kind appears at most once, so
/// [`Hotel::room`] is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub city_id: CityId,
    pub stars: u8,
    pub currency: Currency,
    room_types: Vec<RoomType>,
}

impl Hotel {
    /// Create a hotel, checking its star rating and room types.
    pub fn new(
        id: HotelId,
        name: String,
        city_id: CityId,
        stars: u8,
        currency: Currency,
        room_types: Vec<RoomType>,
    ) -> Result<Self, ShapeError> {
        let hotel = Self {
            id,
            name,
            city_id,
            stars,
            currency,
            room_types,
        };
        hotel.validate(&Scope::root(Self::ENTITY))?;
        Ok(hotel)
    }

    fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.text("name", &self.name)?;
        if !(1..=MAX_STARS).contains(&self.stars) {
            return Err(scope.invalid(
                "stars",
                &Value::from(self.stars),
                format!("must be between 1 and {MAX_STARS}"),
            ));
        }
        for (i, room) in self.room_types.iter().enumerate() {
            room.validate(&scope.item(RoomType::ENTITY, "roomTypes", i))?;
        }
        check_room_types(&self.room_types).map_err(|reason| scope.inconsistent("roomTypes", reason))
    }

    pub fn room_types(&self) -> &[RoomType] {
        &self.room_types
    }

    /// Returns the offered room of the given kind, if any.
    pub fn room(&self, kind: RoomTypeEnum) -> Option<&RoomType> {
        self.room_types.iter().find(|r| r.kind == kind)
    }

    /// Cheapest nightly price over all room types.
    pub fn cheapest_night(&self) -> Option<Amount> {
        self.room_types.iter().map(|r| r.price_per_night).min()
    }
}

fn check_room_types(room_types: &[RoomType]) -> Result<(), String> {
    if room_types.is_empty() {
        return Err("must offer at least one room type".to_string());
    }
    let mut seen = HashSet::new();
    for room in room_types {
        if !seen.insert(room.kind) {
            return Err(format!("room type {} listed more than once", room.kind));
        }
    }
    Ok(())
}

impl Shape for Hotel {
    const ENTITY: &'static str = "Hotel";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let hotel = Hotel {
            id: record.parse("id")?,
            name: record.string("name")?,
            city_id: record.parse("cityId")?,
            stars: record.count("stars")?,
            currency: record.parse("currency")?,
            room_types: record.list("roomTypes")?,
        };
        hotel.validate(record.scope())?;
        Ok(hotel)
    }
}

shape_from_json!(RoomType, Hotel);
