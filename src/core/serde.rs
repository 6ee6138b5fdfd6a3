/// Serde helper functions for custom serialization/deserialization
use super::types::Tick;
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<Tick>` as a signed integer with `-1` meaning "unset"
pub mod tick_or_sentinel {
    use super::*;

    /// Sentinel written for `None`
    pub const UNSET: i64 = -1;

    pub fn serialize<S>(value: &Option<Tick>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(to_signed(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Tick>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            return Ok(None);
        }
        Tick::try_from(raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }

    /// Signed representation used by text reports
    #[inline]
    pub fn to_signed(value: Option<Tick>) -> i64 {
        value.map(i64::from).unwrap_or(UNSET)
    }
}
