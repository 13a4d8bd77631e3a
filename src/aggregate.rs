//! Per bucket statistics

use crate::{bucket::Buckets, reading::Reading};
use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Deref;

/// Statistics of the integer part of the readings in a bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub max: i64,
    pub min: i64,
}
impl Stats {
    /// Computes the statistics, `None` if there are no values
    pub fn from_values(values: &[i64]) -> Option<Self> {
        let max = *values.iter().max()?;
        let min = *values.iter().min()?;
        let mean = values.iter().map(|&x| x as f64).sum::<f64>() / values.len() as f64;
        Some(Self { mean, max, min })
    }
    /// Computes the statistics of the readings values truncated toward zero
    pub fn from_readings(readings: &[Reading]) -> Option<Self> {
        let values: Vec<i64> = readings
            .iter()
            .filter_map(Reading::truncated_value)
            .collect();
        Self::from_values(&values)
    }
}

/// A row of an output file
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OutputRow {
    /// the breakdown key
    pub dt: String,
    pub avg_hr: f64,
    pub max_hr: i64,
    pub min_hr: i64,
}
impl OutputRow {
    pub fn new(dt: String, stats: Stats) -> Self {
        Self {
            dt,
            avg_hr: stats.mean,
            max_hr: stats.max,
            min_hr: stats.min,
        }
    }
}

/// Output rows per partition key, sorted by breakdown key
#[derive(Debug, Default)]
pub struct Dataset(IndexMap<String, Vec<OutputRow>>);
impl Deref for Dataset {
    type Target = IndexMap<String, Vec<OutputRow>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<Buckets> for Dataset {
    fn from(buckets: Buckets) -> Self {
        let dataset = buckets
            .into_inner()
            .into_iter()
            .map(|(partition_key, breakdown)| {
                let mut rows: Vec<OutputRow> = breakdown
                    .into_iter()
                    .filter_map(|(breakdown_key, readings)| {
                        Stats::from_readings(&readings)
                            .map(|stats| OutputRow::new(breakdown_key, stats))
                    })
                    .collect();
                // breakdown keys are unique within a partition
                rows.sort_by(|a, b| a.dt.cmp(&b.dt));
                log::debug!("{partition_key}: {} rows", rows.len());
                (partition_key, rows)
            })
            .collect();
        Self(dataset)
    }
}
