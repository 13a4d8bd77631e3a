use crate::{aggregate::Dataset, bucket::Breakdown};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum WriterError {
    #[error("failed to create {path:?}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path:?}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("failed to flush {path:?}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
type Result<T> = std::result::Result<T, WriterError>;

/// Path to the output file of a partition
pub fn output_path<P: AsRef<Path>>(
    output_dir: P,
    partition_key: &str,
    breakdown: &Breakdown,
) -> PathBuf {
    output_dir
        .as_ref()
        .join(format!("{}_{}.csv", partition_key, breakdown))
}

/// Writes one CSV file per partition into `output_dir`
///
/// Files already written are left in place if a later partition fails.
pub fn to_csv<P: AsRef<Path>>(
    dataset: &Dataset,
    output_dir: P,
    breakdown: &Breakdown,
) -> Result<Vec<PathBuf>> {
    dataset
        .iter()
        .map(|(partition_key, rows)| {
            let path = output_path(&output_dir, partition_key, breakdown);
            let file = File::create(&path).map_err(|source| WriterError::Create {
                path: path.clone(),
                source,
            })?;
            let mut wtr = csv::Writer::from_writer(file);
            for row in rows {
                wtr.serialize(row).map_err(|source| WriterError::Csv {
                    path: path.clone(),
                    source,
                })?;
            }
            wtr.flush().map_err(|source| WriterError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("{:?}: {} rows", path, rows.len());
            Ok(path)
        })
        .collect()
}
