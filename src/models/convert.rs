//! Primitive converters between wire representations and typed values.
//!
//! The Mealie API sends ISO 8601 strings for dates, datetimes, and durations,
//! with some inconsistency: datetimes come back both with and without an
//! offset suffix depending on the endpoint. The converters here normalize all
//! of that. Absent input (`None` or an empty string) maps to `None`; malformed
//! non-empty input always fails with [`MealieError::Format`] rather than being
//! silently dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{MealieError, Result};

/// Parse an optional ISO 8601 datetime string.
///
/// Accepts RFC 3339 (`2023-01-15T10:30:00Z`, `2023-01-15T10:30:00+02:00`) as
/// well as the offset-less form Mealie emits for some timestamp fields, which
/// is interpreted as UTC.
pub fn convert_datetime(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = value else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(Utc.from_utc_datetime(&naive)));
    }

    Err(MealieError::Format(format!("invalid datetime: '{raw}'")))
}

/// Parse an optional ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn convert_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(raw) = value else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| MealieError::Format(format!("invalid date: '{raw}'")))
}

/// Parse the `PT#H#M` subset of ISO 8601 durations into total minutes.
///
/// Hours and minutes only, each at most once, hours before minutes, and at
/// least one component present: `PT30M` -> 30, `PT1H30M` -> 90, `PT2H` -> 120.
pub fn parse_duration(value: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = value else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }

    let malformed = || MealieError::Format(format!("invalid duration: '{raw}'"));

    let body = raw.strip_prefix("PT").ok_or_else(malformed)?;
    if body.is_empty() {
        return Err(malformed());
    }

    let mut minutes: i64 = 0;
    let mut digits = String::new();
    let mut seen_hours = false;
    let mut seen_minutes = false;

    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        if digits.is_empty() {
            return Err(malformed());
        }
        let count: i64 = digits.parse().map_err(|_| malformed())?;
        digits.clear();
        match ch {
            'H' if !seen_hours && !seen_minutes => {
                minutes = count
                    .checked_mul(60)
                    .and_then(|h| minutes.checked_add(h))
                    .ok_or_else(|| malformed())?;
                seen_hours = true;
            }
            'M' if !seen_minutes => {
                minutes = minutes.checked_add(count).ok_or_else(|| malformed())?;
                seen_minutes = true;
            }
            _ => return Err(malformed()),
        }
    }

    // Trailing digits without a unit designator.
    if !digits.is_empty() {
        return Err(malformed());
    }

    Ok(Some(minutes))
}

/// Null-safe field lookup on a JSON object.
///
/// Returns `None` for non-objects, missing keys, and explicit JSON nulls.
pub fn safe_get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .as_object()
        .and_then(|map| map.get(key))
        .filter(|v| !v.is_null())
}

/// Recursively remove null-valued keys from JSON objects.
///
/// This is the sparse serialization step used for create/update payloads:
/// unset optional fields are omitted entirely so the server does not read
/// them as an explicit clear. Array elements are kept in place (an array is
/// positional data, not a field bag), but objects inside arrays are cleaned.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Serde codec for optional datetime fields that arrive with or without an
/// offset suffix. Serializes to RFC 3339 or null.
pub mod flexible_datetime {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        convert_datetime(raw.as_deref()).map_err(D::Error::custom)
    }
}

/// Serde codec for optional calendar-date fields.
pub mod flexible_date {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        convert_date(raw.as_deref()).map_err(D::Error::custom)
    }
}

/// Serde codec for optional numeric fields that some endpoints send as
/// strings (nutrition values in particular).
pub mod lenient_f64 {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_f64(*n),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid number: '{s}'"))),
            Some(other) => Err(D::Error::custom(format!(
                "expected number or numeric string, got {other}"
            ))),
        }
    }
}

/// Deserialize helper collapsing an explicit JSON null to the type's default.
///
/// The API sends `null` rather than `[]`/`{}` for empty collections on some
/// endpoints; collection-typed model fields must always default to empty.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
