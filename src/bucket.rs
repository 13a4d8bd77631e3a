//! Grouping of readings into partitions and breakdown buckets

use crate::reading::{Reading, TIMESTAMP_FORMAT};
use chrono::{Datelike, NaiveDateTime};
use indexmap::IndexMap;
use std::{fmt, ops::Deref};
use strum_macros::EnumString;

/// Partition key of readings with an unknown partition mode
pub const DEFAULT_PARTITION_KEY: &str = "default_key";

#[derive(thiserror::Error, Debug)]
pub enum BucketError {
    #[error("reading at {0} has no value")]
    MissingValue(NaiveDateTime),
}
type Result<T> = std::result::Result<T, BucketError>;

/// Coarse time bucket, one output file per bucket
#[derive(EnumString, Debug, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Partition {
    Yearly,
    Monthly,
    #[strum(default)]
    Other(String),
}
impl Partition {
    /// Returns the partition key of a timestamp
    pub fn key(&self, timestamp: &NaiveDateTime) -> String {
        match self {
            Partition::Yearly => format!("{}", timestamp.year()),
            Partition::Monthly => format!("{}_{}", timestamp.year(), timestamp.month()),
            Partition::Other(_) => DEFAULT_PARTITION_KEY.to_string(),
        }
    }
}
impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Yearly => write!(f, "yearly"),
            Partition::Monthly => write!(f, "monthly"),
            Partition::Other(mode) => write!(f, "{}", mode),
        }
    }
}

/// Fine time bucket the statistics are computed over
#[derive(EnumString, Debug, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Breakdown {
    Daily,
    Hourly,
    None,
    #[strum(default)]
    Other(String),
}
impl Breakdown {
    /// Returns the breakdown key of a timestamp
    ///
    /// All the key layouts are zero-padded so sorting the keys as strings sorts them in time.
    pub fn key(&self, timestamp: &NaiveDateTime) -> String {
        match self {
            Breakdown::Daily => timestamp.format("%Y-%m-%d").to_string(),
            Breakdown::Hourly => timestamp.format("%Y-%m-%d %H:00:00").to_string(),
            Breakdown::None | Breakdown::Other(_) => timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakdown::Daily => write!(f, "daily"),
            Breakdown::Hourly => write!(f, "hourly"),
            Breakdown::None => write!(f, "none"),
            Breakdown::Other(mode) => write!(f, "{}", mode),
        }
    }
}

/// Readings grouped by partition key and then by breakdown key
///
/// Both levels keep the order in which the keys were first seen,
/// and each bucket keeps its readings in input order.
#[derive(Debug, Default)]
pub struct Buckets(IndexMap<String, IndexMap<String, Vec<Reading>>>);
impl Deref for Buckets {
    type Target = IndexMap<String, IndexMap<String, Vec<Reading>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Buckets {
    /// Groups the readings, skipping the ones without a timestamp
    pub fn new<'a, I>(readings: I, partition: &Partition, breakdown: &Breakdown) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        let mut this = Self::default();
        for reading in readings {
            this.insert(reading, partition, breakdown)?;
        }
        Ok(this)
    }
    fn insert(
        &mut self,
        reading: &Reading,
        partition: &Partition,
        breakdown: &Breakdown,
    ) -> Result<()> {
        let Some(timestamp) = reading.timestamp else {
            return Ok(());
        };
        if reading.value.is_none() {
            return Err(BucketError::MissingValue(timestamp));
        }
        self.0
            .entry(partition.key(&timestamp))
            .or_default()
            .entry(breakdown.key(&timestamp))
            .or_default()
            .push(*reading);
        Ok(())
    }
    /// Returns the breakdown buckets of a partition
    pub fn partition(&self, key: &str) -> Option<&IndexMap<String, Vec<Reading>>> {
        self.0.get(key)
    }
    /// Consumes the buckets into the inner map
    pub fn into_inner(self) -> IndexMap<String, IndexMap<String, Vec<Reading>>> {
        self.0
    }
}
