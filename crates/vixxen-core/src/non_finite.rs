//! Serde adapter for values that may be non-finite
//!
//! JSON has no infinity or NaN; `serde_json` writes them as `null`. Reading
//! `null` back yields `f64::NAN`, which callers already treat as "N/A".

use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(*value)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
