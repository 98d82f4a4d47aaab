//! Facility record types.
//!
//! Records are read from JSON objects shaped like
//! `{"Id": 1, "facility": "Tennis Court", ...}`. The `id`/`name` spellings are
//! accepted as aliases, and any other keys are carried through untouched.

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// Opaque facility identifier.
///
/// Data files may use integer or string ids; both are kept as given. Integers
/// must fit in an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum FacilityId {
    Number(i64),
    Text(String),
}

impl FacilityId {
    /// Interpret user input as an id without looking at any store: the
    /// trimmed input becomes [`FacilityId::Number`] when it is an integer and
    /// [`FacilityId::Text`] otherwise.
    ///
    /// Prefer `FacilityStore::resolve_id` when a store is at hand, since a
    /// data file may use text ids that look like numbers.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        input
            .parse::<i64>()
            .map_or_else(|_| Self::Text(input.to_owned()), Self::Number)
    }
}

struct FacilityIdVisitor;

impl Visitor<'_> for FacilityIdVisitor {
    type Value = FacilityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string facility id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FacilityId::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v).map(FacilityId::Number).map_err(|_| {
            E::custom(format!(
                "facility id {v} is out of range, integer ids must fit in an i64"
            ))
        })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FacilityId::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FacilityId::Text(v))
    }
}

impl<'de> Deserialize<'de> for FacilityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FacilityIdVisitor)
    }
}

impl FromStr for FacilityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<i64> for FacilityId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FacilityId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<String> for FacilityId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single named facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "Id", alias = "id")]
    pub id: FacilityId,
    /// The searchable label
    #[serde(rename = "facility", alias = "name")]
    pub name: String,
    /// Pass-through attributes, never interpreted
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FacilityRecord {
    pub fn new(id: impl Into<FacilityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl fmt::Display for FacilityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Facility: {}", self.id, self.name)
    }
}
