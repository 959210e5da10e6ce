//! Travelers and client contact details.

use chrono::NaiveDate;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ShapeError;
use super::shape::{Record, Scope, Shape, shape_from_json};
use super::{Gender, TravelerType};

/// A person on a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct Traveler {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    #[serde(rename = "type")]
    pub traveler_type: TravelerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
}

/// The primary contact among the travelers of one demand.
///
/// Same shape as [`Traveler`]; the role comes from where it sits on the
/// demand, not from a separate type.
pub type MainTraveler = Traveler;

impl Traveler {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the fields a traveler built in code could get wrong.
    pub fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.text("firstName", &self.first_name)?;
        scope.text("lastName", &self.last_name)?;
        scope.opt_text("passportNumber", self.passport_number.as_deref())
    }
}

impl Shape for Traveler {
    const ENTITY: &'static str = "Traveler";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let traveler = Traveler {
            first_name: record.string("firstName")?,
            last_name: record.string("lastName")?,
            gender: record.parse("gender")?,
            traveler_type: record.parse("type")?,
            date_of_birth: record.opt_parse("dateOfBirth")?,
            passport_number: record.opt_string("passportNumber")?,
        };
        traveler.validate(record.scope())?;
        Ok(traveler)
    }
}

/// Contact and identity data for the client submitting a demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct ClientInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

impl ClientInfo {
    /// Check the fields client details built in code could get wrong.
    pub fn validate(&self, scope: &Scope) -> Result<(), ShapeError> {
        scope.text("fullName", &self.full_name)?;
        if !EmailAddress::is_valid(&self.email) {
            return Err(scope.invalid(
                "email",
                &Value::from(self.email.as_str()),
                "not an email address",
            ));
        }
        scope.text("phone", &self.phone)?;
        scope.opt_text("nationality", self.nationality.as_deref())
    }
}

impl Shape for ClientInfo {
    const ENTITY: &'static str = "ClientInfo";

    fn read(record: &Record<'_>) -> Result<Self, ShapeError> {
        let client = ClientInfo {
            full_name: record.string("fullName")?,
            email: record.string("email")?,
            phone: record.string("phone")?,
            nationality: record.opt_string("nationality")?,
        };
        client.validate(record.scope())?;
        Ok(client)
    }
}

shape_from_json!(Traveler, ClientInfo);
