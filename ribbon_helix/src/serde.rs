use serde::Deserialize as _;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub(crate) fn from_str<'de, D, T>(deser: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deser)?;
    s.parse().map_err(serde::de::Error::custom)
}

pub(crate) fn utc_date_time<'de, D>(deser: D) -> Result<OffsetDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deser)?;
    OffsetDateTime::parse(&s, &Rfc3339).map_err(serde::de::Error::custom)
}

pub(crate) fn rfc3339<S>(dt: &OffsetDateTime, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let s = dt.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    ser.serialize_str(&s)
}
