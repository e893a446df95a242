//! `SystemTime` serialized as whole seconds since the UNIX epoch.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn to_secs<E: serde::ser::Error>(time: &SystemTime) -> Result<u64, E> {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(E::custom)
}

fn from_secs<E: serde::de::Error>(secs: u64) -> Result<SystemTime, E> {
    UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or_else(|| E::custom(format!("timestamp {secs} out of range")))
}

pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    to_secs::<S::Error>(time)?.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
where
    D: Deserializer<'de>,
{
    from_secs(u64::deserialize(deserializer)?)
}

pub mod option {
    use super::*;

    pub fn serialize<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => Some(to_secs::<S::Error>(t)?).serialize(serializer),
            None => None::<u64>.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SystemTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<u64>::deserialize(deserializer)?
            .map(from_secs)
            .transpose()
    }
}

pub mod vec {
    use super::*;

    pub fn serialize<S>(times: &[SystemTime], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let secs = times
            .iter()
            .map(to_secs::<S::Error>)
            .collect::<Result<Vec<_>, _>>()?;
        secs.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SystemTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Vec::<u64>::deserialize(deserializer)?;
        secs.into_iter().map(from_secs).collect()
    }
}
