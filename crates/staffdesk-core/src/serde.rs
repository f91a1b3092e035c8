// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer, Serializer};
use chrono::{DateTime, NaiveTime, SecondsFormat, Timelike, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Serialize a time of day as `HH:MM`, or `HH:MM:SS` when seconds are set.
pub fn to_time_of_day<S>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
    s.serialize_str(&time.format(format).to_string())
}

/// Deserialize a time of day from `HH:MM` or `HH:MM:SS`.
pub fn from_time_of_day<'de, D>(d: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    parse_time_of_day(&raw).map_err(::serde::de::Error::custom)
}

/// Same as [`from_time_of_day`] for optional fields. Pair with `#[serde(default)]`.
pub fn from_time_of_day_opt<'de, D>(d: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(d)?;
    raw.map(|v| parse_time_of_day(&v).map_err(::serde::de::Error::custom))
        .transpose()
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| format!("invalid time of day `{raw}`, expected HH:MM"))
}
