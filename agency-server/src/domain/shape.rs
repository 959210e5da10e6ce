//! Reading entities out of untyped JSON.
//!
//! Each entity implements [`Shape`], pulling its fields from a [`Record`].
//! The record knows which entity it belongs to and where it sits in the
//! document, so every rejection names both the entity and the full field
//! path. `null` is treated the same as an absent field.

use std::fmt::Display;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::error::{ShapeError, ShapeErrorKind};
use super::money::{Amount, DiscountPercent, InvalidAmount};

/// Path of the document root.
const ROOT: &str = "$";

/// An entity that can be read from a JSON object.
pub trait Shape: Sized {
    /// Entity name used in errors.
    const ENTITY: &'static str;

    fn read(record: &Record<'_>) -> Result<Self, ShapeError>;
}

/// Read and validate an entity from a JSON value.
///
/// # Examples
///
/// ```
/// use agency_server::domain::{City, from_value};
/// use serde_json::json;
///
/// let city: City = from_value(&json!({
///     "id": "rak",
///     "name": "Marrakech",
///     "country": "Morocco"
/// }))
/// .unwrap();
/// assert_eq!(city.name, "Marrakech");
///
/// let err = from_value::<City>(&json!({ "id": "rak" })).unwrap_err();
/// assert_eq!(err.field(), "name");
/// ```
pub fn from_value<T: Shape>(value: &Value) -> Result<T, ShapeError> {
    read_at(value, ROOT.to_string())
}

fn read_at<T: Shape>(value: &Value, path: String) -> Result<T, ShapeError> {
    let record = Record::new(T::ENTITY, path, value)?;
    T::read(&record)
}

/// Short JSON rendering of a rejected value for error messages.
fn describe(value: &Value) -> String {
    const MAX: usize = 64;
    let s = value.to_string();
    if s.chars().count() > MAX {
        let truncated: String = s.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        s
    }
}

/// Where an entity sits in a document.
///
/// Builds errors about the entity's fields, so checks shared between a
/// constructor (rooted at `$`) and [`Shape::read`] (at the record's path)
/// report the same field paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    entity: &'static str,
    path: String,
}

impl Scope {
    /// Scope of an entity at the document root.
    pub fn root(entity: &'static str) -> Self {
        Self {
            entity,
            path: ROOT.to_string(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Full path of a field of this entity.
    pub fn path_of(&self, name: &str) -> String {
        if self.path == ROOT {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Scope of the entity held in field `name`.
    pub fn nested(&self, entity: &'static str, name: &str) -> Scope {
        Scope {
            entity,
            path: self.path_of(name),
        }
    }

    /// Scope of item `index` of list field `name`.
    pub fn item(&self, entity: &'static str, name: &str, index: usize) -> Scope {
        Scope {
            entity,
            path: format!("{}[{}]", self.path_of(name), index),
        }
    }

    /// Build an error about one of this entity's fields.
    pub fn error(&self, name: &str, kind: ShapeErrorKind) -> ShapeError {
        ShapeError::new(self.entity, self.path_of(name), kind)
    }

    /// Build an `Inconsistent` error about one of this entity's fields.
    pub fn inconsistent(&self, name: &str, reason: impl Into<String>) -> ShapeError {
        ShapeError::inconsistent(self.entity, self.path_of(name), reason)
    }

    /// Build an `InvalidValue` error about one of this entity's fields.
    pub fn invalid(&self, name: &str, value: &Value, reason: impl Display) -> ShapeError {
        self.error(
            name,
            ShapeErrorKind::InvalidValue {
                value: describe(value),
                reason: reason.to_string(),
            },
        )
    }

    /// A required text field must not be blank.
    pub fn text(&self, name: &str, value: &str) -> Result<(), ShapeError> {
        if value.trim().is_empty() {
            return Err(self.invalid(name, &Value::from(value), "must not be empty"));
        }
        Ok(())
    }

    /// An optional text field is either absent or not blank.
    pub fn opt_text(&self, name: &str, value: Option<&str>) -> Result<(), ShapeError> {
        value.map_or(Ok(()), |v| self.text(name, v))
    }

    /// A count must be at least `min`.
    pub fn at_least<T>(&self, name: &str, value: T, min: T) -> Result<(), ShapeError>
    where
        T: PartialOrd + Display + Into<u64>,
    {
        if value < min {
            let reason = format!("must be at least {min}");
            let n: u64 = value.into();
            return Err(self.invalid(name, &Value::from(n), reason));
        }
        Ok(())
    }
}

/// Fields of one JSON object being read as an entity.
pub struct Record<'a> {
    scope: Scope,
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    fn new(entity: &'static str, path: String, value: &'a Value) -> Result<Self, ShapeError> {
        match value.as_object() {
            Some(fields) => Ok(Self {
                scope: Scope { entity, path },
                fields,
            }),
            None => Err(ShapeError::new(entity, path, ShapeErrorKind::NotAnObject)),
        }
    }

    /// Where this record sits in the document.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Full path of a field of this record.
    pub fn path_of(&self, name: &str) -> String {
        self.scope.path_of(name)
    }

    /// Build an error about one of this record's fields.
    pub fn error(&self, name: &str, kind: ShapeErrorKind) -> ShapeError {
        self.scope.error(name, kind)
    }

    /// Build an `Inconsistent` error about one of this record's fields.
    pub fn inconsistent(&self, name: &str, reason: impl Into<String>) -> ShapeError {
        self.scope.inconsistent(name, reason)
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    fn require(&self, name: &str) -> Result<&'a Value, ShapeError> {
        self.get(name)
            .ok_or_else(|| self.error(name, ShapeErrorKind::Missing))
    }

    fn invalid(&self, name: &str, value: &Value, reason: impl Display) -> ShapeError {
        self.scope.invalid(name, value, reason)
    }

    fn str_of(&self, name: &str, value: &'a Value) -> Result<&'a str, ShapeError> {
        value.as_str().ok_or_else(|| {
            self.error(
                name,
                ShapeErrorKind::WrongType {
                    expected: "string",
                },
            )
        })
    }

    /// A required, non-empty string.
    pub fn string(&self, name: &str) -> Result<String, ShapeError> {
        let value = self.require(name)?;
        let s = self.str_of(name, value)?;
        if s.trim().is_empty() {
            return Err(self.invalid(name, value, "must not be empty"));
        }
        Ok(s.to_string())
    }

    /// An optional string. Blank strings count as absent.
    pub fn opt_string(&self, name: &str) -> Result<Option<String>, ShapeError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        let s = self.str_of(name, value)?;
        if s.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(s.to_string()))
        }
    }

    /// A required string parsed with `FromStr` (enums, ids, dates).
    pub fn parse<T>(&self, name: &str) -> Result<T, ShapeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.require(name)?;
        self.parse_value(name, value)
    }

    /// An optional string parsed with `FromStr`.
    pub fn opt_parse<T>(&self, name: &str) -> Result<Option<T>, ShapeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(name)
            .map(|value| self.parse_value(name, value))
            .transpose()
    }

    fn parse_value<T>(&self, name: &str, value: &Value) -> Result<T, ShapeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let s = self.str_of(name, value)?;
        s.parse().map_err(|e| self.invalid(name, value, e))
    }

    fn number_of(&self, name: &str, value: &Value) -> Result<f64, ShapeError> {
        value.as_f64().ok_or_else(|| {
            self.error(
                name,
                ShapeErrorKind::WrongType {
                    expected: "number",
                },
            )
        })
    }

    fn money<T>(
        &self,
        name: &str,
        value: &Value,
        parse: fn(f64) -> Result<T, InvalidAmount>,
    ) -> Result<T, ShapeError> {
        let n = self.number_of(name, value)?;
        parse(n).map_err(|e| self.invalid(name, value, e))
    }

    /// A required money amount.
    pub fn amount(&self, name: &str) -> Result<Amount, ShapeError> {
        let value = self.require(name)?;
        self.money(name, value, Amount::from_f64)
    }

    /// An optional money amount.
    pub fn opt_amount(&self, name: &str) -> Result<Option<Amount>, ShapeError> {
        self.get(name)
            .map(|value| self.money(name, value, Amount::from_f64))
            .transpose()
    }

    /// A required discount percentage.
    pub fn discount(&self, name: &str) -> Result<DiscountPercent, ShapeError> {
        let value = self.require(name)?;
        self.money(name, value, DiscountPercent::from_f64)
    }

    fn count_of<T: TryFrom<u64>>(&self, name: &str, value: &Value) -> Result<T, ShapeError> {
        let n = value.as_u64().ok_or_else(|| {
            self.error(
                name,
                ShapeErrorKind::WrongType {
                    expected: "non-negative integer",
                },
            )
        })?;
        T::try_from(n).map_err(|_| self.invalid(name, value, "out of range"))
    }

    /// A required non-negative integer.
    pub fn count<T: TryFrom<u64>>(&self, name: &str) -> Result<T, ShapeError> {
        let value = self.require(name)?;
        self.count_of(name, value)
    }

    /// A required integer that must be at least `min`.
    pub fn count_at_least<T>(&self, name: &str, min: T) -> Result<T, ShapeError>
    where
        T: TryFrom<u64> + PartialOrd + Display,
    {
        let value = self.require(name)?;
        let n: T = self.count_of(name, value)?;
        if n < min {
            return Err(self.invalid(name, value, format!("must be at least {min}")));
        }
        Ok(n)
    }

    /// An optional non-negative integer.
    pub fn opt_count<T: TryFrom<u64>>(&self, name: &str) -> Result<Option<T>, ShapeError> {
        self.get(name)
            .map(|value| self.count_of(name, value))
            .transpose()
    }

    /// A boolean with a default for when it is absent.
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, ShapeError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| {
                self.error(
                    name,
                    ShapeErrorKind::WrongType {
                        expected: "boolean",
                    },
                )
            }),
        }
    }

    /// A required nested entity.
    pub fn nested<T: Shape>(&self, name: &str) -> Result<T, ShapeError> {
        let value = self.require(name)?;
        read_at(value, self.path_of(name))
    }

    fn array_of(&self, name: &str, value: &'a Value) -> Result<&'a Vec<Value>, ShapeError> {
        value.as_array().ok_or_else(|| {
            self.error(
                name,
                ShapeErrorKind::WrongType {
                    expected: "array",
                },
            )
        })
    }

    fn read_list<T: Shape>(&self, name: &str, items: &[Value]) -> Result<Vec<T>, ShapeError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| read_at(item, format!("{}[{}]", self.path_of(name), i)))
            .collect()
    }

    /// A required, non-empty list of entities.
    pub fn list<T: Shape>(&self, name: &str) -> Result<Vec<T>, ShapeError> {
        let value = self.require(name)?;
        let items = self.array_of(name, value)?;
        if items.is_empty() {
            return Err(self.invalid(name, value, "must not be empty"));
        }
        self.read_list(name, items)
    }

    /// An optional list of entities; absent means empty.
    pub fn opt_list<T: Shape>(&self, name: &str) -> Result<Vec<T>, ShapeError> {
        match self.get(name) {
            None => Ok(Vec::new()),
            Some(value) => {
                let items = self.array_of(name, value)?;
                self.read_list(name, items)
            }
        }
    }

    /// An optional list of strings parsed with `FromStr`; absent means empty.
    pub fn parse_list<T>(&self, name: &str) -> Result<Vec<T>, ShapeError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.get(name) else {
            return Ok(Vec::new());
        };
        let items = self.array_of(name, value)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item_name = format!("{name}[{i}]");
                self.parse_value(&item_name, item)
            })
            .collect()
    }
}

/// Implements `TryFrom<serde_json::Value>` through [`Shape`], so entities can
/// use `#[serde(try_from = "serde_json::Value")]`.
macro_rules! shape_from_json {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<serde_json::Value> for $ty {
                type Error = $crate::domain::ShapeError;

                fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
                    $crate::domain::from_value(&value)
                }
            }
        )+
    };
}

pub(crate) use shape_from_json;
