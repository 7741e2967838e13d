//! Field codecs for values the API sends in more than one JSON shape.
//!
//! Amounts arrive either as JSON numbers or numeric strings. Timestamps
//! arrive as RFC 3339 strings or bare dates. Use these with
//! `#[serde(with = "...")]`; optional fields also need `#[serde(default)]`.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid amount: {:?}", text))),
        }
    }
}

fn parse_timestamp<E: de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| E::custom(format!("invalid timestamp: {:?}", raw)))
}

fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub mod amount {
    use super::{Deserialize, Deserializer, NumberOrString, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        NumberOrString::deserialize(deserializer)?.into_f64()
    }
}

pub mod option_amount {
    use super::{Deserialize, Deserializer, NumberOrString, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_f64(*value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<NumberOrString>::deserialize(deserializer)?
            .map(NumberOrString::into_f64)
            .transpose()
    }
}

pub mod timestamp {
    use super::{format_timestamp, parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
    }
}

pub mod option_timestamp {
    use super::{format_timestamp, parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&format_timestamp(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_timestamp(&raw))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, Timelike, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::amount")]
        amount: f64,
        #[serde(default, with = "super::option_amount")]
        fee: Option<f64>,
        #[serde(with = "super::timestamp")]
        created_at: DateTime<Utc>,
        #[serde(default, with = "super::option_timestamp")]
        completed_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let sample: Sample = serde_json::from_value(json!({
            "amount": "1010.50",
            "fee": 1.53,
            "created_at": "2021-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!((sample.amount - 1010.5).abs() < f64::EPSILON);
        assert_eq!(sample.fee, Some(1.53));
        assert!(sample.completed_at.is_none());
    }

    #[test]
    fn test_amount_rejects_non_numeric_text() {
        let result: Result<Sample, _> = serde_json::from_value(json!({
            "amount": "ten",
            "created_at": "2021-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_accepts_bare_dates_and_millis() {
        let sample: Sample = serde_json::from_value(json!({
            "amount": 1,
            "created_at": "2021-01-01",
            "completed_at": "2011-10-05T14:48:00.000Z"
        }))
        .unwrap();
        assert_eq!(sample.created_at.year(), 2021);
        assert_eq!(sample.created_at.hour(), 0);
        assert_eq!(sample.completed_at.unwrap().minute(), 48);
    }

    #[test]
    fn test_timestamp_serializes_rfc3339() {
        let sample: Sample = serde_json::from_value(json!({
            "amount": 5240,
            "fee": null,
            "created_at": "2025-09-30T04:23:30.823Z"
        }))
        .unwrap();
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["created_at"], "2025-09-30T04:23:30.823Z");
        assert_eq!(value["completed_at"], serde_json::Value::Null);
    }

    #[test]
    fn test_timestamp_keeps_sub_millisecond_precision() {
        let sample: Sample = serde_json::from_value(json!({
            "amount": 1,
            "created_at": "2025-09-30T04:23:30.823456Z",
            "completed_at": "2025-09-30T04:23:31.000000001Z"
        }))
        .unwrap();
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["created_at"], "2025-09-30T04:23:30.823456Z");

        let again: Sample = serde_json::from_value(value).unwrap();
        assert_eq!(again.created_at, sample.created_at);
        assert_eq!(again.completed_at, sample.completed_at);
        assert_eq!(again.created_at.nanosecond(), 823_456_000);
    }
}
