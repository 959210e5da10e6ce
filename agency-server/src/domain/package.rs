//! Staff-curated packages.
//!
//! An [`AdminPackage`] is a bundle of cities and services sold as a unit at
//! a set price. A [`SpecialPackage`] adds explicit day counts per city and a
//! discounted price; its `total_period_days` and `final_price` are derived
//! from the other fields and checked whenever a package is read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::city::CitySelection;
use super::error::ShapeError;
use super::ids::{ActivityId, CityId, HotelId, PackageId, ServiceId, TransportId};
use super::money::{Amount, DiscountPercent};
use super::shape::{Record, Scope, Shape, shape_from_json};
use super::{Currency, UserRole};

/// A bundle of cities and services sold as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct AdminPackage {
    pub id: PackageId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cities: Vec<CitySelection>,
    pub hotel_ids: Vec<HotelId>,
    pub activity_ids: Vec<ActivityId>,
    pub service_ids: Vec<ServiceId>,
    pub transport_ids: Vec<TransportId>,
    pub price: Amount,
    pub currency: Currency,
    pub is_active: bool,
    pub created_by: UserRole,
}

impl AdminPackage {
    pub fn total_nights(&self) -> u32 {
        self.cities.iter().map(|c| u32::from(c.nights)).sum()
    }
}

impl Shape for AdminPackage {
    const ENTITY: &'static str = "AdminPackage";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        Ok(AdminPackage {
            id: record.parse("id")?,
            name: record.string("name")?,
            description: record.opt_string("description")?,
            cities: record.list("cities")?,
            hotel_ids: record.parse_list("hotelIds")?,
            activity_ids: record.parse_list("activityIds")?,
            service_ids: record.parse_list("serviceIds")?,
            transport_ids: record.parse_list("transportIds")?,
            price: record.amount("price")?,
            currency: record.parse("currency")?,
            is_active: record.flag("isActive", true)?,
            created_by: record.parse("createdBy")?,
        })
    }
}

/// A city of a special package with an explicit number of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct PackageCityPeriod {
    pub city_id: CityId,
    pub period_days: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,
}

impl PackageCityPeriod {
    pub fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.at_least("periodDays", self.period_days, 1)
    }
}

impl Shape for PackageCityPeriod {
    const ENTITY: &'static str = "PackageCityPeriod";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let period = PackageCityPeriod {
            city_id: record.parse("cityId")?,
            period_days: record.count("periodDays")?,
            hotel_id: record.opt_parse("hotelId")?,
        };
        period.validate(record.scope())?;
        Ok(period)
    }
}

/// Input for creating a special package.
#[derive(Debug, Clone)]
pub struct NewSpecialPackage {
    pub id: PackageId,
    pub name: String,
    pub description: Option<String>,
    pub city_periods: Vec<PackageCityPeriod>,
    pub base_price: Amount,
    pub discount_percent: DiscountPercent,
    pub currency: Currency,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub is_active: bool,
}

/// A package with per-city day counts and a discounted price.
///
/// `total_period_days` always equals the sum of the periods' days, and
/// `final_price` always equals `base_price` less `discount_percent`.
///
/// # Examples
///
/// ```
/// use agency_server::domain::{Amount, SpecialPackage, from_value};
/// use serde_json::json;
///
/// let package: SpecialPackage = from_value(&json!({
///     "id": "summer",
///     "name": "Summer in the south",
///     "cityPeriods": [{ "cityId": "rak", "periodDays": 4 }],
///     "basePrice": 1000,
///     "discountPercent": 10,
///     "currency": "EUR"
/// }))
/// .unwrap();
/// assert_eq!(package.final_price(), Amount::from_units(900).unwrap());
/// assert_eq!(package.total_period_days(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct SpecialPackage {
    id: PackageId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    city_periods: Vec<PackageCityPeriod>,
    total_period_days: u32,
    base_price: Amount,
    discount_percent: DiscountPercent,
    final_price: Amount,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_until: Option<NaiveDate>,
    is_active: bool,
}

fn sum_days(periods: &[PackageCityPeriod]) -> u32 {
    periods.iter().map(|p| u32::from(p.period_days)).sum()
}

impl SpecialPackage {
    /// Create a package, deriving its total days and final price.
    pub fn new(new: NewSpecialPackage) -> Result<Self, ShapeError> {
        Self::build(new, &Scope::root(Self::ENTITY))
    }

    fn build(new: NewSpecialPackage, scope: &Scope) -> Result<Self, ShapeError> {
        scope.text("name", &new.name)?;
        scope.opt_text("description", new.description.as_deref())?;
        if new.city_periods.is_empty() {
            return Err(scope.inconsistent("cityPeriods", "must include at least one city"));
        }
        for (i, period) in new.city_periods.iter().enumerate() {
            period.validate(&scope.item(PackageCityPeriod::ENTITY, "cityPeriods", i))?;
        }
        if let (Some(from), Some(until)) = (new.valid_from, new.valid_until) {
            if until < from {
                return Err(scope.inconsistent("validUntil", "must not be before validFrom"));
            }
        }

        Ok(Self {
            total_period_days: sum_days(&new.city_periods),
            final_price: new.base_price.discounted(new.discount_percent),
            id: new.id,
            name: new.name,
            description: new.description,
            city_periods: new.city_periods,
            base_price: new.base_price,
            discount_percent: new.discount_percent,
            currency: new.currency,
            valid_from: new.valid_from,
            valid_until: new.valid_until,
            is_active: new.is_active,
        })
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn city_periods(&self) -> &[PackageCityPeriod] {
        &self.city_periods
    }

    pub fn total_period_days(&self) -> u32 {
        self.total_period_days
    }

    pub fn base_price(&self) -> Amount {
        self.base_price
    }

    pub fn discount_percent(&self) -> DiscountPercent {
        self.discount_percent
    }

    pub fn final_price(&self) -> Amount {
        self.final_price
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn valid_from(&self) -> Option<NaiveDate> {
        self.valid_from
    }

    pub fn valid_until(&self) -> Option<NaiveDate> {
        self.valid_until
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Amount saved by the discount.
    pub fn savings(&self) -> Amount {
        Amount::from_cents(self.base_price.cents() - self.final_price.cents())
    }

    /// Whether the package can be sold on `date`.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.valid_from.is_none_or(|from| from <= date)
            && self.valid_until.is_none_or(|until| date <= until)
    }
}

impl Shape for SpecialPackage {
    const ENTITY: &'static str = "SpecialPackage";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let new = NewSpecialPackage {
            id: record.parse("id")?,
            name: record.string("name")?,
            description: record.opt_string("description")?,
            city_periods: record.list("cityPeriods")?,
            base_price: record.amount("basePrice")?,
            discount_percent: record.discount("discountPercent")?,
            currency: record.parse("currency")?,
            valid_from: record.opt_parse("validFrom")?,
            valid_until: record.opt_parse("validUntil")?,
            is_active: record.flag("isActive", true)?,
        };
        let package = SpecialPackage::build(new, record.scope())?;

        // Derived fields may be omitted; if given they must agree.
        if let Some(total) = record.opt_count::<u32>("totalPeriodDays")? {
            if total != package.total_period_days {
                return Err(record.inconsistent(
                    "totalPeriodDays",
                    format!(
                        "is {total} but the city periods add up to {}",
                        package.total_period_days
                    ),
                ));
            }
        }
        if let Some(final_price) = record.opt_amount("finalPrice")? {
            if final_price != package.final_price {
                return Err(record.inconsistent(
                    "finalPrice",
                    format!(
                        "is {final_price} but basePrice {} less {} is {}",
                        package.base_price, package.discount_percent, package.final_price
                    ),
                ));
            }
        }

        Ok(package)
    }
}

shape_from_json!(AdminPackage, PackageCityPeriod, SpecialPackage);
