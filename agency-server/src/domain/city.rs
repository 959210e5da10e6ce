//! Cities and package-scoped city selections.

use serde::{Deserialize, Serialize};

use super::error::ShapeError;
use super::ids::CityId;
use super::shape::{Record, Shape, shape_from_json};

/// A named destination, referenced by id from itineraries and packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Shape for City {
    const ENTITY: &'static str = "City";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        Ok(City {
            id: record.parse("id")?,
            name: record.string("name")?,
            country: record.string("country")?,
            description: record.opt_string("description")?,
        })
    }
}

/// A city included in an admin package for a number of nights.
///
/// This is the package-scoped counterpart of [`DemandCity`](super::DemandCity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct CitySelection {
    pub city_id: CityId,
    pub nights: u16,
}

impl Shape for CitySelection {
    const ENTITY: &'static str = "CitySelection";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        Ok(CitySelection {
            city_id: record.parse("cityId")?,
            nights: record.count_at_least("nights", 1)?,
        })
    }
}

shape_from_json!(City, CitySelection);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::from_value;
    use serde_json::json;

    #[test]
    fn read_city() {
        let city: City = from_value(&json!({
            "id": "fes",
            "name": "Fes",
            "country": "Morocco",
            "description": "Old medina"
        }))
        .unwrap();
        assert_eq!(city.id.as_str(), "fes");
        assert_eq!(city.description.as_deref(), Some("Old medina"));
    }

    #[test]
    fn city_requires_name_and_country() {
        let err = from_value::<City>(&json!({ "id": "fes", "name": "Fes" })).unwrap_err();
        assert_eq!(err.entity(), "City");
        assert_eq!(err.field(), "country");

        let err = from_value::<City>(&json!({ "id": "", "name": "Fes", "country": "MA" }))
            .unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn city_serializes_camel_case_without_empty_description() {
        let city = City {
            id: CityId::new("rak").unwrap(),
            name: "Marrakech".into(),
            country: "Morocco".into(),
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&city).unwrap(),
            json!({ "id": "rak", "name": "Marrakech", "country": "Morocco" })
        );
    }

    #[test]
    fn selection_needs_at_least_one_night() {
        let sel: CitySelection = serde_json::from_value(json!({ "cityId": "rak", "nights": 2 }))
            .unwrap();
        assert_eq!(sel.nights, 2);

        let err = from_value::<CitySelection>(&json!({ "cityId": "rak", "nights": 0 }))
            .unwrap_err();
        assert_eq!(err.field(), "nights");
    }
}
