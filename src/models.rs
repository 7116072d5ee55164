//! Data transfer shapes for the readings API.

use std::fmt;

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::ApiError;

// ---

/// Incoming request body shared by `/getLast` and `/getRange`.
///
/// Only a JSON object (or `null`) decodes. Keys match `Type`, `DateStart` and
/// `DateEnd` ignoring ASCII case, and a repeated key keeps its last value.
/// Absent or `null` fields keep their zero value; unknown fields are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryRequest {
    // ---
    pub reading_type: String,
    pub date_start: i64,
    pub date_end: i64,
}

impl<'de> Deserialize<'de> for QueryRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QueryRequestVisitor)
    }
}

struct QueryRequestVisitor;

impl<'de> Visitor<'de> for QueryRequestVisitor {
    type Value = QueryRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with Type, DateStart and DateEnd")
    }

    fn visit_unit<E>(self) -> Result<QueryRequest, E>
    where
        E: serde::de::Error,
    {
        Ok(QueryRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<QueryRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        // ---
        let mut request = QueryRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("Type") {
                if let Some(v) = map.next_value::<Option<String>>()? {
                    request.reading_type = v;
                }
            } else if key.eq_ignore_ascii_case("DateStart") {
                if let Some(v) = map.next_value::<Option<i64>>()? {
                    request.date_start = v;
                }
            } else if key.eq_ignore_ascii_case("DateEnd") {
                if let Some(v) = map.next_value::<Option<i64>>()? {
                    request.date_end = v;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(request)
    }
}

/// One stored sensor sample, as returned by `/getLast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    // ---
    #[serde(rename = "Id")]
    pub id: String,

    /// Epoch timestamp.
    #[serde(rename = "Date")]
    pub date: i64,

    #[serde(rename = "Value")]
    pub value: f64,

    #[serde(rename = "Type")]
    pub reading_type: String,
}

/// Projected reading returned by `/getRange`; the scan does not fetch `Type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReading {
    // ---
    #[serde(rename = "Date")]
    pub date: i64,

    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Value")]
    pub value: f64,
}

impl From<&Reading> for RangeReading {
    fn from(r: &Reading) -> Self {
        RangeReading {
            date: r.date,
            id: r.id.clone(),
            value: r.value,
        }
    }
}

/// Decode a raw request body into a [`QueryRequest`].
pub fn decode_request(body: &[u8]) -> Result<QueryRequest, ApiError> {
    // ---
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
