// crates/shared-kernel/src/infrastructure/firestore/documents/firestore_value.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Représentation JSON d'une `Value` de l'API REST Firestore.
/// Les int64 transitent en chaîne (mapping proto3 JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue(()),
    BooleanValue(bool),
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
}

impl FirestoreValue {
    pub fn null() -> Self {
        Self::NullValue(())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::StringValue(value.into())
    }

    pub fn integer(value: i64) -> Self {
        Self::IntegerValue(value.to_string())
    }

    /// Un champ absent devient un `nullValue` explicite, jamais omis.
    pub fn string_or_null(value: Option<&str>) -> Self {
        value.map(Self::string).unwrap_or_else(Self::null)
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::TimestampValue(raw) => parse_timestamp(raw),
            _ => None,
        }
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_serialized_explicitly() {
        let value = FirestoreValue::string_or_null(None);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({ "nullValue": null }));
    }

    #[test]
    fn test_integer_is_serialized_as_string() {
        let value = FirestoreValue::integer(0);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({ "integerValue": "0" }));
    }

    #[test]
    fn test_timestamp_value_is_parsed() {
        let value: FirestoreValue =
            serde_json::from_value(json!({ "timestampValue": "2025-03-01T10:15:30.123456Z" })).unwrap();

        let ts = value.as_timestamp().expect("timestamp should parse");
        assert_eq!(ts.timestamp(), 1_740_824_130);
    }
}
