//! Time-series CSV partitioning
//!
//! Readings are loaded from a CSV file, grouped into partitions (one output file per partition)
//! and broken down into finer time buckets, the integer part of the readings in each bucket is
//! reduced to its mean, maximum and minimum.
//!
//! ```no_run
//! use partition_readings::{Breakdown, Partition, Pipeline};
//!
//! let paths = Pipeline::new("readings.csv", "output")
//!     .partition(Partition::Yearly)
//!     .breakdown(Breakdown::Hourly)
//!     .run()?;
//! # Ok::<(), partition_readings::Error>(())
//! ```

use std::path::{Path, PathBuf};

pub mod aggregate;
pub mod bucket;
mod error;
pub mod loader;
pub mod reading;
pub mod writer;

pub use aggregate::{Dataset, OutputRow, Stats};
pub use bucket::{Breakdown, Buckets, Partition};
pub use error::{Error, Result};
pub use loader::ReadingsLoader;
pub use reading::Reading;

/// Groups and reduces the readings
pub fn process<'a, I>(
    readings: I,
    partition: &Partition,
    breakdown: &Breakdown,
) -> Result<Dataset>
where
    I: IntoIterator<Item = &'a Reading>,
{
    let buckets = Buckets::new(readings, partition, breakdown)?;
    log::info!("{} partitions", buckets.len());
    Ok(Dataset::from(buckets))
}

/// Loads, processes and writes the readings
pub struct Pipeline {
    path: PathBuf,
    output_dir: PathBuf,
    partition: Partition,
    breakdown: Breakdown,
}
impl Pipeline {
    /// Creates a yearly partitioned, exact timestamp pipeline
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(path: P, output_dir: Q) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            partition: Partition::Yearly,
            breakdown: Breakdown::None,
        }
    }
    pub fn partition(self, partition: Partition) -> Self {
        Self { partition, ..self }
    }
    pub fn breakdown(self, breakdown: Breakdown) -> Self {
        Self { breakdown, ..self }
    }
    /// Runs the pipeline and returns the paths of the files that were written
    ///
    /// Nothing is written if any of the input readings fails to parse.
    pub fn run(self) -> Result<Vec<PathBuf>> {
        log::info!("{:?}", self.path);
        let readings = ReadingsLoader::default().data_path(&self.path).load()?;
        log::info!("data len {}", readings.len());
        let dataset = process(&readings, &self.partition, &self.breakdown)?;
        Ok(writer::to_csv(&dataset, &self.output_dir, &self.breakdown)?)
    }
}
