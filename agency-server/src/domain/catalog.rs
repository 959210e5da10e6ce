//! Bookable line items and the catalog that prices them.
//!
//! Activities, services and transports are each priced in one currency.
//! A [`Catalog`] indexes them (and hotels) by id for quoting demands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::{DomainError, ShapeError};
use super::hotel::Hotel;
use super::ids::{ActivityId, CityId, HotelId, ServiceId, TransportId};
use super::money::Amount;
use super::shape::{Record, Shape, shape_from_json};
use super::{Currency, ServiceType, TransportType};

/// A sightseeing or leisure activity in a city, priced per person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub city_id: CityId,
    pub price: Amount,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Shape for Activity {
    const ENTITY: &'static str = "Activity";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        Ok(Activity {
            id: record.parse("id")?,
            name: record.string("name")?,
            city_id: record.parse("cityId")?,
            price: record.amount("price")?,
            currency: record.parse("currency")?,
            duration_hours: record.opt_count("durationHours")?,
            description: record.opt_string("description")?,
        })
    }
}

/// A service sold once per demand (guide, transfer, insurance, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub price: Amount,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Shape for Service {
    const ENTITY: &'static str = "Service";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        Ok(Service {
            id: record.parse("id")?,
            name: record.string("name")?,
            service_type: record.parse("type")?,
            price: record.amount("price")?,
            currency: record.parse("currency")?,
            description: record.opt_string("description")?,
        })
    }
}

/// A transport leg between two cities, priced per person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Transport {
    pub id: TransportId,
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    pub from_city_id: CityId,
    pub to_city_id: CityId,
    pub price: Amount,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Shape for Transport {
    const ENTITY: &'static str = "Transport";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let transport = Transport {
            id: record.parse("id")?,
            transport_type: record.parse("type")?,
            from_city_id: record.parse("fromCityId")?,
            to_city_id: record.parse("toCityId")?,
            price: record.amount("price")?,
            currency: record.parse("currency")?,
            provider: record.opt_string("provider")?,
        };
        if transport.from_city_id == transport.to_city_id {
            return Err(record.inconsistent("toCityId", "must differ from fromCityId"));
        }
        Ok(transport)
    }
}

shape_from_json!(Activity, Service, Transport);

/// Priced items indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: HashMap<HotelId, Hotel>,
    activities: HashMap<ActivityId, Activity>,
    services: HashMap<ServiceId, Service>,
    transports: HashMap<TransportId, Transport>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hotel(&mut self, hotel: Hotel) {
        self.hotels.insert(hotel.id.clone(), hotel);
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.insert(activity.id.clone(), activity);
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.insert(service.id.clone(), service);
    }

    pub fn add_transport(&mut self, transport: Transport) {
        self.transports.insert(transport.id.clone(), transport);
    }

    pub fn hotel(&self, id: &HotelId) -> Result<&Hotel, DomainError> {
        self.hotels.get(id).ok_or_else(|| unknown("hotel", id.as_str()))
    }

    pub fn activity(&self, id: &ActivityId) -> Result<&Activity, DomainError> {
        self.activities
            .get(id)
            .ok_or_else(|| unknown("activity", id.as_str()))
    }

    pub fn service(&self, id: &ServiceId) -> Result<&Service, DomainError> {
        self.services
            .get(id)
            .ok_or_else(|| unknown("service", id.as_str()))
    }

    pub fn transport(&self, id: &TransportId) -> Result<&Transport, DomainError> {
        self.transports
            .get(id)
            .ok_or_else(|| unknown("transport", id.as_str()))
    }
}

fn unknown(kind: &'static str, id: &str) -> DomainError {
    DomainError::UnknownReference {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::from_value;
    use serde_json::json;

    #[test]
    fn read_service() {
        let service: Service = from_value(&json!({
            "id": "s1",
            "name": "Airport pickup",
            "type": "transfer",
            "price": 35,
            "currency": "EUR"
        }))
        .unwrap();
        assert_eq!(service.service_type, ServiceType::Transfer);
        assert_eq!(service.price, Amount::from_units(35).unwrap());
    }

    #[test]
    fn reject_unknown_service_type() {
        let err = from_value::<Service>(&json!({
            "id": "s1",
            "name": "Spa",
            "type": "spa",
            "price": 35,
            "currency": "EUR"
        }))
        .unwrap_err();
        assert_eq!(err.entity(), "Service");
        assert_eq!(err.field(), "type");
    }

    #[test]
    fn read_transport() {
        let transport: Transport = from_value(&json!({
            "id": "t1",
            "type": "train",
            "fromCityId": "rak",
            "toCityId": "fes",
            "price": 22.5,
            "currency": "MAD",
            "provider": "ONCF"
        }))
        .unwrap();
        assert_eq!(transport.transport_type, TransportType::Train);
        assert_eq!(transport.provider.as_deref(), Some("ONCF"));
    }

    #[test]
    fn reject_unknown_transport_type() {
        let err = from_value::<Transport>(&json!({
            "id": "t1",
            "type": "camel",
            "fromCityId": "rak",
            "toCityId": "fes",
            "price": 1,
            "currency": "MAD"
        }))
        .unwrap_err();
        assert_eq!(err.field(), "type");
    }

    #[test]
    fn transport_must_move() {
        let err = from_value::<Transport>(&json!({
            "id": "t1",
            "type": "bus",
            "fromCityId": "rak",
            "toCityId": "rak",
            "price": 1,
            "currency": "MAD"
        }))
        .unwrap_err();
        assert_eq!(err.field(), "toCityId");
    }

    #[test]
    fn activity_optional_fields() {
        let activity: Activity = from_value(&json!({
            "id": "a1",
            "name": "Desert night",
            "cityId": "merzouga",
            "price": 120,
            "currency": "USD",
            "durationHours": 14
        }))
        .unwrap();
        assert_eq!(activity.duration_hours, Some(14));
        assert_eq!(activity.description, None);

        let value = serde_json::to_value(&activity).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["durationHours"], json!(14));
    }

    #[test]
    fn catalog_lookup() {
        let mut catalog = Catalog::new();
        catalog.add_service(Service {
            id: ServiceId::new("s1").unwrap(),
            name: "Guide".into(),
            service_type: ServiceType::Guide,
            price: Amount::from_units(50).unwrap(),
            currency: Currency::Usd,
            description: None,
        });

        assert!(catalog.service(&ServiceId::new("s1").unwrap()).is_ok());
        assert_eq!(
            catalog.service(&ServiceId::new("s2").unwrap()).unwrap_err(),
            DomainError::UnknownReference {
                kind: "service",
                id: "s2".into()
            }
        );
        assert!(catalog.hotel(&HotelId::new("h1").unwrap()).is_err());
    }
}
