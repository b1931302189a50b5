//! Field types shared by every record: identifiers, timestamps and loosely stored scalars

use bson::Bson;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize, Serializer,
};
use std::fmt;
use tracing::warn;

/// Store-assigned document identifier.
///
/// Documents written here carry an ObjectId; collections filled by the
/// analysis jobs use plain string ids. Both render as JSON strings.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordId(Bson);

impl RecordId {
    pub fn new(id: Bson) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Bson::ObjectId(oid) => write!(f, "{}", oid.to_hex()),
            Bson::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Bson::ObjectId(_) | Bson::String(_) => serializer.serialize_str(&self.to_string()),
            other => other.clone().into_relaxed_extjson().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Bson::deserialize(deserializer).map(RecordId)
    }
}

/// Creation time, stored as a BSON date and rendered as RFC 3339 UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(bson::DateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self(bson::DateTime::now())
    }

    pub fn from_chrono(time: DateTime<Utc>) -> Self {
        Self(bson::DateTime::from_chrono(time))
    }

    pub fn to_chrono(self) -> DateTime<Utc> {
        self.0.to_chrono()
    }

    pub fn timestamp_millis(self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl From<Timestamp> for Bson {
    fn from(value: Timestamp) -> Self {
        Bson::DateTime(value.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Bson::deserialize(deserializer)? {
            Bson::DateTime(time) => Ok(Timestamp(time)),
            Bson::String(text) => DateTime::parse_from_rfc3339(&text)
                .map(|time| Timestamp::from_chrono(time.with_timezone(&Utc)))
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a date, found {:?}",
                other.element_type()
            ))),
        }
    }
}

/// Parse numeric text the way the API accepts it: surrounding whitespace is
/// ignored, empty text means absent, anything else must be a finite number.
pub fn parse_number(text: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!("invalid number: {:?}", text)),
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_number(v).map_err(E::custom)
    }
}

/// Accepts `12.5`, `"12.5"`, `null`, `""`; rejects non-numeric text
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or number")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(TextVisitor)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }
}

/// Free-text field that older writers sometimes stored as a number
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextVisitor)
}

// Stored documents predate input validation, so a field that cannot be read
// back is logged and treated as absent instead of failing the whole listing.

/// Stored number: numbers and numeric text decode, anything else becomes `None`
pub fn deserialize_stored_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => None,
        Some(Bson::Int32(v)) => Some(f64::from(v)),
        Some(Bson::Int64(v)) => Some(v as f64),
        Some(Bson::Double(v)) if v.is_finite() => Some(v),
        Some(Bson::String(text)) => parse_number(&text).unwrap_or_else(|reason| {
            warn!(reason = %reason, "Ignoring unreadable stored number");
            None
        }),
        Some(other) => {
            warn!(found = ?other.element_type(), "Ignoring unreadable stored number");
            None
        }
    };
    Ok(value)
}

/// Stored whole number such as a month index; `3`, `3.0` and `"3"` all decode
pub fn deserialize_stored_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => None,
        Some(Bson::Int32(v)) => Some(v),
        Some(Bson::Int64(v)) => i32::try_from(v).ok(),
        Some(Bson::Double(v)) if v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX) => {
            Some(v as i32)
        }
        Some(Bson::String(text)) => text.trim().parse::<i32>().ok(),
        Some(_) => None,
    };
    Ok(value)
}

/// Stored free text; scalars are stringified, anything else becomes `None`
pub fn deserialize_stored_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Bson>::deserialize(deserializer)? {
        None | Some(Bson::Null) => None,
        Some(Bson::String(text)) => Some(text),
        Some(Bson::Int32(v)) => Some(v.to_string()),
        Some(Bson::Int64(v)) => Some(v.to_string()),
        Some(Bson::Double(v)) => Some(v.to_string()),
        Some(Bson::Boolean(v)) => Some(v.to_string()),
        Some(other) => {
            warn!(found = ?other.element_type(), "Ignoring unreadable stored text");
            None
        }
    };
    Ok(value)
}
