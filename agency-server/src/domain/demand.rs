//! Client demands.
//!
//! A `ClientDemand` is one customer's trip request: who is travelling, which
//! cities they want to visit and for how long, and the extra services and
//! transport they asked for. Staff move it through its lifecycle (see
//! [`DemandStatus`]) and price it against a [`Catalog`]; it is never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::error::{DomainError, ShapeError};
use super::ids::{ActivityId, CityId, DemandId, HotelId, ServiceId, TransportId};
use super::money::Amount;
use super::shape::{Record, Scope, Shape, shape_from_json};
use super::traveler::{ClientInfo, MainTraveler, Traveler};
use super::{Currency, DemandStatus, RoomTypeEnum};

/// Room booked when a demand names a hotel but no room type.
pub const DEFAULT_ROOM_TYPE: RoomTypeEnum = RoomTypeEnum::Double;

/// A city visited as part of one demand.
///
/// This is the demand-scoped counterpart of
/// [`CitySelection`](super::CitySelection): it also records where the
/// travelers sleep and what they do there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct DemandCity {
    pub city_id: CityId,
    pub nights: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomTypeEnum>,
    pub activity_ids: Vec<ActivityId>,
}

impl DemandCity {
    /// A stay of `nights` nights with nothing else booked.
    pub fn new(city_id: CityId, nights: u16) -> Self {
        Self {
            city_id,
            nights,
            hotel_id: None,
            room_type: None,
            activity_ids: Vec::new(),
        }
    }

    /// Check the stay length and that a room type comes with a hotel.
    pub fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.at_least("nights", self.nights, 1)?;
        if self.room_type.is_some() && self.hotel_id.is_none() {
            return Err(scope.inconsistent("roomType", "a room type needs a hotelId"));
        }
        Ok(())
    }
}

impl Shape for DemandCity {
    const ENTITY: &'static str = "DemandCity";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let city = DemandCity {
            city_id: record.parse("cityId")?,
            nights: record.count("nights")?,
            hotel_id: record.opt_parse("hotelId")?,
            room_type: record.opt_parse("roomType")?,
            activity_ids: record.parse_list("activityIds")?,
        };
        city.validate(record.scope())?;
        Ok(city)
    }
}

/// Input for creating a new demand.
#[derive(Debug, Clone)]
pub struct NewDemand {
    pub id: DemandId,
    pub client: ClientInfo,
    pub main_traveler: MainTraveler,
    /// Companions of the main traveler
    pub travelers: Vec<Traveler>,
    pub cities: Vec<DemandCity>,
    pub service_ids: Vec<ServiceId>,
    pub transport_ids: Vec<TransportId>,
    pub currency: Currency,
    pub notes: Option<String>,
}

/// One customer's trip request.
///
/// # Examples
///
/// ```
/// use agency_server::domain::{ClientDemand, DemandStatus, from_value};
/// use serde_json::json;
///
/// let demand: ClientDemand = from_value(&json!({
///     "id": "D-1",
///     "client": { "fullName": "Omar Idrissi", "email": "omar@example.com", "phone": "0600" },
///     "mainTraveler": { "firstName": "Omar", "lastName": "Idrissi", "gender": "male", "type": "adult" },
///     "cities": [{ "cityId": "rak", "nights": 3 }],
///     "status": "pending",
///     "currency": "MAD",
///     "createdAt": "2024-05-01T10:00:00Z"
/// }))
/// .unwrap();
/// assert_eq!(demand.status(), DemandStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct ClientDemand {
    id: DemandId,
    client: ClientInfo,
    main_traveler: MainTraveler,
    travelers: Vec<Traveler>,
    cities: Vec<DemandCity>,
    service_ids: Vec<ServiceId>,
    transport_ids: Vec<TransportId>,
    status: DemandStatus,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_price: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClientDemand {
    /// Create a demand as submitted by a customer. It starts `pending`.
    ///
    /// Runs the same checks as reading a demand from JSON, so a created
    /// demand always reads back unchanged. Blank notes are dropped.
    pub fn new(new: NewDemand, now: DateTime<Utc>) -> Result<Self, ShapeError> {
        let scope = Scope::root(Self::ENTITY);
        new.client.validate(&scope.nested(ClientInfo::ENTITY, "client"))?;
        new.main_traveler
            .validate(&scope.nested(Traveler::ENTITY, "mainTraveler"))?;
        for (i, traveler) in new.travelers.iter().enumerate() {
            traveler.validate(&scope.item(Traveler::ENTITY, "travelers", i))?;
        }
        if new.cities.is_empty() {
            return Err(scope.inconsistent("cities", "must include at least one city"));
        }
        for (i, city) in new.cities.iter().enumerate() {
            city.validate(&scope.item(DemandCity::ENTITY, "cities", i))?;
        }

        Ok(Self {
            id: new.id,
            client: new.client,
            main_traveler: new.main_traveler,
            travelers: new.travelers,
            cities: new.cities,
            service_ids: new.service_ids,
            transport_ids: new.transport_ids,
            status: DemandStatus::Pending,
            currency: new.currency,
            total_price: None,
            notes: new.notes.filter(|n| !n.trim().is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &DemandId {
        &self.id
    }

    pub fn client(&self) -> &ClientInfo {
        &self.client
    }

    pub fn main_traveler(&self) -> &MainTraveler {
        &self.main_traveler
    }

    /// Companions of the main traveler.
    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    pub fn cities(&self) -> &[DemandCity] {
        &self.cities
    }

    pub fn service_ids(&self) -> &[ServiceId] {
        &self.service_ids
    }

    pub fn transport_ids(&self) -> &[TransportId] {
        &self.transport_ids
    }

    pub fn status(&self) -> DemandStatus {
        self.status
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Total from the last applied quote, if any.
    pub fn total_price(&self) -> Option<Amount> {
        self.total_price
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Everyone on the trip, main traveler first.
    pub fn all_travelers(&self) -> impl Iterator<Item = &Traveler> {
        std::iter::once(&self.main_traveler).chain(self.travelers.iter())
    }

    pub fn traveler_count(&self) -> usize {
        1 + self.travelers.len()
    }

    pub fn total_nights(&self) -> u32 {
        self.cities.iter().map(|c| u32::from(c.nights)).sum()
    }

    /// Move the demand to a new status.
    ///
    /// Fails without changing anything if the lifecycle does not allow it.
    pub fn transition_to(
        &mut self,
        next: DemandStatus,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = now;
        Ok(())
    }

    /// Price the demand against a catalog.
    ///
    /// Hotel rooms are charged per night, with enough rooms of the chosen
    /// type for every traveler (`ceil(travelers / capacity)`). Activities and transports are charged per
    /// traveler; services once.
    pub fn quote(&self, catalog: &Catalog) -> Result<Quote, DomainError> {
        let travelers = self.traveler_count() as u64;
        let mut lines = Vec::new();

        for stay in &self.cities {
            if let Some(hotel_id) = &stay.hotel_id {
                let hotel = catalog.hotel(hotel_id)?;
                if hotel.city_id != stay.city_id {
                    return Err(DomainError::HotelNotInCity {
                        hotel: hotel_id.clone(),
                        city: stay.city_id.to_string(),
                    });
                }
                self.check_currency("hotel", hotel_id.as_str(), hotel.currency)?;

                let kind = stay.room_type.unwrap_or(DEFAULT_ROOM_TYPE);
                let room = hotel.room(kind).ok_or_else(|| DomainError::RoomNotOffered {
                    hotel: hotel_id.clone(),
                    room: kind,
                })?;
                let rooms = travelers.div_ceil(u64::from(room.capacity));
                let amount = room
                    .price_per_night
                    .checked_mul(u64::from(stay.nights))
                    .and_then(|a| a.checked_mul(rooms))
                    .ok_or(DomainError::PriceOverflow)?;
                lines.push(QuoteLine {
                    description: format!(
                        "{} ({} x {}, {} nights)",
                        hotel.name, rooms, kind, stay.nights
                    ),
                    amount,
                });
            }

            for activity_id in &stay.activity_ids {
                let activity = catalog.activity(activity_id)?;
                self.check_currency("activity", activity_id.as_str(), activity.currency)?;
                let amount = activity
                    .price
                    .checked_mul(travelers)
                    .ok_or(DomainError::PriceOverflow)?;
                lines.push(QuoteLine {
                    description: activity.name.clone(),
                    amount,
                });
            }
        }

        for service_id in &self.service_ids {
            let service = catalog.service(service_id)?;
            self.check_currency("service", service_id.as_str(), service.currency)?;
            lines.push(QuoteLine {
                description: service.name.clone(),
                amount: service.price,
            });
        }

        for transport_id in &self.transport_ids {
            let transport = catalog.transport(transport_id)?;
            self.check_currency("transport", transport_id.as_str(), transport.currency)?;
            let amount = transport
                .price
                .checked_mul(travelers)
                .ok_or(DomainError::PriceOverflow)?;
            lines.push(QuoteLine {
                description: format!(
                    "{} {} to {}",
                    transport.transport_type, transport.from_city_id, transport.to_city_id
                ),
                amount,
            });
        }

        let total = lines
            .iter()
            .try_fold(Amount::ZERO, |acc, line| acc.checked_add(line.amount))
            .ok_or(DomainError::PriceOverflow)?;

        Ok(Quote {
            currency: self.currency,
            lines,
            total,
        })
    }

    /// Store a quote's total as the demand's price.
    pub fn apply_quote(&mut self, quote: &Quote, now: DateTime<Utc>) {
        self.total_price = Some(quote.total);
        self.updated_at = now;
    }

    fn check_currency(
        &self,
        kind: &'static str,
        id: &str,
        found: Currency,
    ) -> Result<(), DomainError> {
        if found != self.currency {
            return Err(DomainError::CurrencyMismatch {
                kind,
                id: id.to_string(),
                expected: self.currency,
                found,
            });
        }
        Ok(())
    }
}

impl Shape for ClientDemand {
    const ENTITY: &'static str = "ClientDemand";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let created_at: DateTime<Utc> = record.parse("createdAt")?;
        let updated_at: DateTime<Utc> = record.opt_parse("updatedAt")?.unwrap_or(created_at);
        if updated_at < created_at {
            return Err(record.inconsistent("updatedAt", "must not be before createdAt"));
        }

        Ok(ClientDemand {
            id: record.parse("id")?,
            client: record.nested("client")?,
            main_traveler: record.nested("mainTraveler")?,
            travelers: record.opt_list("travelers")?,
            cities: record.list("cities")?,
            service_ids: record.parse_list("serviceIds")?,
            transport_ids: record.parse_list("transportIds")?,
            status: record.parse("status")?,
            currency: record.parse("currency")?,
            total_price: record.opt_amount("totalPrice")?,
            notes: record.opt_string("notes")?,
            created_at,
            updated_at,
        })
    }
}

shape_from_json!(DemandCity, ClientDemand);

/// A priced line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub description: String,
    pub amount: Amount,
}

/// The derived price of a demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub currency: Currency,
    pub lines: Vec<QuoteLine>,
    pub total: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Activity, Gender, Hotel, RoomType, Service, ServiceType, ShapeErrorKind, Transport,
        TransportType, TravelerType, from_value,
    };
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn city(id: &str) -> CityId {
        CityId::new(id).unwrap()
    }

    fn traveler(first: &str) -> Traveler {
        Traveler {
            first_name: first.into(),
            last_name: "Idrissi".into(),
            gender: Gender::Male,
            traveler_type: TravelerType::Adult,
            date_of_birth: None,
            passport_number: None,
        }
    }

    fn new_demand(cities: Vec<DemandCity>) -> NewDemand {
        NewDemand {
            id: DemandId::new("D-1").unwrap(),
            client: ClientInfo {
                full_name: "Omar Idrissi".into(),
                email: "omar@example.com".into(),
                phone: "0600".into(),
                nationality: None,
            },
            main_traveler: traveler("Omar"),
            travelers: vec![],
            cities,
            service_ids: vec![],
            transport_ids: vec![],
            currency: Currency::Mad,
            notes: None,
        }
    }

    fn demand_json() -> Value {
        json!({
            "id": "D-1",
            "client": {
                "fullName": "Omar Idrissi",
                "email": "omar@example.com",
                "phone": "0600"
            },
            "mainTraveler": {
                "firstName": "Omar",
                "lastName": "Idrissi",
                "gender": "male",
                "type": "adult"
            },
            "travelers": [],
            "cities": [{ "cityId": "rak", "nights": 3, "activityIds": [] }],
            "serviceIds": [],
            "transportIds": [],
            "status": "pending",
            "currency": "MAD",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        })
    }

    #[test]
    fn pending_demand_roundtrips_unchanged() {
        let demand: ClientDemand = from_value(&demand_json()).unwrap();
        assert_eq!(demand.status(), DemandStatus::Pending);
        assert_eq!(demand.cities().len(), 1);
        assert_eq!(demand.main_traveler().first_name, "Omar");

        let value = serde_json::to_value(&demand).unwrap();
        assert_eq!(value, demand_json());

        let back: ClientDemand = serde_json::from_value(value).unwrap();
        assert_eq!(back, demand);
    }

    #[test]
    fn archived_status_rejected() {
        let mut value = demand_json();
        value["status"] = json!("archived");
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.entity(), "ClientDemand");
        assert_eq!(err.field(), "status");
        assert!(matches!(err.kind(), ShapeErrorKind::InvalidValue { .. }));

        assert!(serde_json::from_value::<ClientDemand>(value).is_err());
    }

    #[test]
    fn nested_errors_carry_paths() {
        let mut value = demand_json();
        value["travelers"] = json!([{
            "firstName": "Sara",
            "lastName": "Idrissi",
            "gender": "other",
            "type": "child"
        }]);
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.entity(), "Traveler");
        assert_eq!(err.field(), "travelers[0].gender");

        let mut value = demand_json();
        value["cities"][0]["roomType"] = json!("palace");
        value["cities"][0]["hotelId"] = json!("h1");
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.entity(), "DemandCity");
        assert_eq!(err.field(), "cities[0].roomType");

        let mut value = demand_json();
        value["serviceIds"] = json!(["s1", ""]);
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.field(), "serviceIds[1]");
    }

    #[test]
    fn missing_parts_rejected() {
        for field in ["id", "client", "mainTraveler", "cities", "status", "currency", "createdAt"] {
            let mut value = demand_json();
            value.as_object_mut().unwrap().remove(field);
            let err = from_value::<ClientDemand>(&value).unwrap_err();
            assert_eq!(err.field(), field);
            assert_eq!(err.kind(), &ShapeErrorKind::Missing);
        }

        let mut value = demand_json();
        value["cities"] = json!([]);
        assert_eq!(
            from_value::<ClientDemand>(&value).unwrap_err().field(),
            "cities"
        );
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let mut value = demand_json();
        for field in ["travelers", "serviceIds", "transportIds", "updatedAt"] {
            value.as_object_mut().unwrap().remove(field);
        }
        let demand: ClientDemand = from_value(&value).unwrap();
        assert!(demand.travelers().is_empty());
        assert_eq!(demand.updated_at(), demand.created_at());
    }

    #[test]
    fn room_type_needs_hotel() {
        let mut value = demand_json();
        value["cities"][0]["roomType"] = json!("double");
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.field(), "cities[0].roomType");
    }

    #[test]
    fn updated_before_created_rejected() {
        let mut value = demand_json();
        value["updatedAt"] = json!("2024-04-30T10:00:00Z");
        let err = from_value::<ClientDemand>(&value).unwrap_err();
        assert_eq!(err.field(), "updatedAt");
    }

    #[test]
    fn new_demand_starts_pending() {
        let demand =
            ClientDemand::new(new_demand(vec![DemandCity::new(city("rak"), 2)]), at(9)).unwrap();
        assert_eq!(demand.status(), DemandStatus::Pending);
        assert_eq!(demand.created_at(), at(9));
        assert_eq!(demand.traveler_count(), 1);
        assert_eq!(demand.total_nights(), 2);
        assert_eq!(demand.total_price(), None);
    }

    #[test]
    fn new_demand_needs_a_city() {
        let err = ClientDemand::new(new_demand(vec![]), at(9)).unwrap_err();
        assert_eq!(err.field(), "cities");
    }

    #[test]
    fn new_demand_checks_nested_records() {
        let err = ClientDemand::new(new_demand(vec![DemandCity::new(city("rak"), 0)]), at(9))
            .unwrap_err();
        assert_eq!(err.entity(), "DemandCity");
        assert_eq!(err.field(), "cities[0].nights");

        let mut stay = DemandCity::new(city("rak"), 2);
        stay.room_type = Some(RoomTypeEnum::Suite);
        let err = ClientDemand::new(new_demand(vec![stay]), at(9)).unwrap_err();
        assert_eq!(err.field(), "cities[0].roomType");
        assert!(matches!(err.kind(), ShapeErrorKind::Inconsistent { .. }));

        let mut new = new_demand(vec![DemandCity::new(city("rak"), 2)]);
        new.client.email = "not-an-email".into();
        let err = ClientDemand::new(new, at(9)).unwrap_err();
        assert_eq!(err.entity(), "ClientInfo");
        assert_eq!(err.field(), "client.email");

        let mut new = new_demand(vec![DemandCity::new(city("rak"), 2)]);
        new.main_traveler.first_name = "  ".into();
        let err = ClientDemand::new(new, at(9)).unwrap_err();
        assert_eq!(err.field(), "mainTraveler.firstName");

        let mut new = new_demand(vec![DemandCity::new(city("rak"), 2)]);
        new.travelers = vec![traveler("Sara"), traveler("")];
        let err = ClientDemand::new(new, at(9)).unwrap_err();
        assert_eq!(err.entity(), "Traveler");
        assert_eq!(err.field(), "travelers[1].firstName");
    }

    #[test]
    fn created_demand_reads_back_unchanged() {
        let mut new = new_demand(vec![DemandCity::new(city("rak"), 2)]);
        new.travelers = vec![traveler("Sara")];
        new.notes = Some("   ".into());
        let demand = ClientDemand::new(new, at(9)).unwrap();
        assert_eq!(demand.notes(), None);

        let value = serde_json::to_value(&demand).unwrap();
        assert_eq!(from_value::<ClientDemand>(&value).unwrap(), demand);
    }

    #[test]
    fn lifecycle() {
        let mut demand =
            ClientDemand::new(new_demand(vec![DemandCity::new(city("rak"), 2)]), at(9)).unwrap();

        demand.transition_to(DemandStatus::Confirmed, at(10)).unwrap();
        assert_eq!(demand.status(), DemandStatus::Confirmed);
        assert_eq!(demand.updated_at(), at(10));

        demand.transition_to(DemandStatus::Cancelled, at(11)).unwrap();
        let err = demand
            .transition_to(DemandStatus::Confirmed, at(12))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: DemandStatus::Cancelled,
                to: DemandStatus::Confirmed,
            }
        );
        // Failed transitions change nothing
        assert_eq!(demand.status(), DemandStatus::Cancelled);
        assert_eq!(demand.updated_at(), at(11));
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_hotel(
            Hotel::new(
                HotelId::new("riad").unwrap(),
                "Riad Yasmine".into(),
                city("rak"),
                4,
                Currency::Mad,
                vec![RoomType {
                    kind: RoomTypeEnum::Double,
                    price_per_night: Amount::from_units(500).unwrap(),
                    capacity: 2,
                }],
            )
            .unwrap(),
        );
        catalog.add_activity(Activity {
            id: ActivityId::new("hammam").unwrap(),
            name: "Hammam".into(),
            city_id: city("rak"),
            price: Amount::from_units(200).unwrap(),
            currency: Currency::Mad,
            duration_hours: Some(2),
            description: None,
        });
        catalog.add_service(Service {
            id: ServiceId::new("guide").unwrap(),
            name: "Guide".into(),
            service_type: ServiceType::Guide,
            price: Amount::from_units(300).unwrap(),
            currency: Currency::Mad,
            description: None,
        });
        catalog.add_transport(Transport {
            id: TransportId::new("train").unwrap(),
            transport_type: TransportType::Train,
            from_city_id: city("cas"),
            to_city_id: city("rak"),
            price: Amount::from_units(150).unwrap(),
            currency: Currency::Mad,
            provider: None,
        });
        catalog
    }

    fn full_demand() -> ClientDemand {
        let mut stay = DemandCity::new(city("rak"), 3);
        stay.hotel_id = Some(HotelId::new("riad").unwrap());
        stay.activity_ids = vec![ActivityId::new("hammam").unwrap()];

        let mut new = new_demand(vec![stay]);
        new.travelers = vec![traveler("Sara"), traveler("Youssef")];
        new.service_ids = vec![ServiceId::new("guide").unwrap()];
        new.transport_ids = vec![TransportId::new("train").unwrap()];
        ClientDemand::new(new, at(9)).unwrap()
    }

    #[test]
    fn quote_prices_every_line() {
        let demand = full_demand();
        let quote = demand.quote(&catalog()).unwrap();

        // 3 travelers need 2 double rooms: 500 * 3 nights * 2 rooms
        // hammam 200 * 3, guide 300, train 150 * 3
        let amounts: Vec<u64> = quote.lines.iter().map(|l| l.amount.cents() / 100).collect();
        assert_eq!(amounts, vec![3000, 600, 300, 450]);
        assert_eq!(quote.total, Amount::from_units(4350).unwrap());
        assert_eq!(quote.currency, Currency::Mad);
    }

    #[test]
    fn one_room_when_capacity_covers_everyone() {
        let mut stay = DemandCity::new(city("rak"), 3);
        stay.hotel_id = Some(HotelId::new("riad").unwrap());
        let solo = ClientDemand::new(new_demand(vec![stay.clone()]), at(9)).unwrap();

        // 500 * 3 nights, a single double room
        let quote = solo.quote(&catalog()).unwrap();
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.total, Amount::from_units(1500).unwrap());

        let mut pair = new_demand(vec![stay]);
        pair.travelers = vec![traveler("Sara")];
        let pair = ClientDemand::new(pair, at(9)).unwrap();
        assert_eq!(
            pair.quote(&catalog()).unwrap().total,
            Amount::from_units(1500).unwrap()
        );
    }

    #[test]
    fn apply_quote_sets_total() {
        let mut demand = full_demand();
        let quote = demand.quote(&catalog()).unwrap();
        demand.apply_quote(&quote, at(12));
        assert_eq!(demand.total_price(), Some(quote.total));
        assert_eq!(demand.updated_at(), at(12));
    }

    #[test]
    fn quote_errors() {
        let mut missing_room = full_demand();
        missing_room.cities[0].room_type = Some(RoomTypeEnum::Suite);
        assert!(matches!(
            missing_room.quote(&catalog()),
            Err(DomainError::RoomNotOffered { .. })
        ));

        let mut wrong_city = full_demand();
        wrong_city.cities[0].city_id = city("fes");
        assert!(matches!(
            wrong_city.quote(&catalog()),
            Err(DomainError::HotelNotInCity { .. })
        ));

        let mut unknown = full_demand();
        unknown.service_ids.push(ServiceId::new("spa").unwrap());
        assert_eq!(
            unknown.quote(&catalog()),
            Err(DomainError::UnknownReference {
                kind: "service",
                id: "spa".into()
            })
        );

        let mut other_currency = full_demand();
        other_currency.currency = Currency::Eur;
        assert!(matches!(
            other_currency.quote(&catalog()),
            Err(DomainError::CurrencyMismatch { kind: "hotel", .. })
        ));
    }
}
