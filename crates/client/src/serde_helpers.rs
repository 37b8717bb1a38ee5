//! Serde helpers for LogPoint's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for
//!   numeric fields.
//! - Keep parsing behavior centralized so model definitions stay readable.
//!
//! Invariants / assumptions:
//! - LogPoint may return numeric fields as `"123"` strings or as `123`
//!   numbers depending on endpoint and version.
//! - These helpers must not log values; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    U64(u64),
    I64(i64),
    String(String),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    match value {
        NumberOrString::U64(v) => Ok(v),
        NumberOrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        NumberOrString::String(s) => s.parse::<u64>().map_err(D::Error::custom),
    }
}

pub fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    match value {
        NumberOrString::U64(v) => i64::try_from(v).map_err(D::Error::custom),
        NumberOrString::I64(v) => Ok(v),
        NumberOrString::String(s) => s.parse::<i64>().map_err(D::Error::custom),
    }
}
