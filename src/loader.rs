use crate::reading::{Reading, ReadingError};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Instant,
};

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("failed to open {path:?}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read the CSV file")]
    Csv(#[from] csv::Error),
    #[error("failed to parse record #{record}")]
    Reading {
        record: usize,
        source: ReadingError,
    },
}
type Result<T> = std::result::Result<T, LoaderError>;

/// Loads the readings from a CSV file
///
/// The first row of the file is a header and is skipped.
pub struct ReadingsLoader {
    path: PathBuf,
    delimiter: u8,
    quote: u8,
}
impl Default for ReadingsLoader {
    fn default() -> Self {
        Self {
            path: PathBuf::from("readings.csv"),
            delimiter: b',',
            quote: b'"',
        }
    }
}
impl ReadingsLoader {
    pub fn data_path<P: AsRef<Path>>(self, data_path: P) -> Self {
        Self {
            path: data_path.as_ref().to_path_buf(),
            ..self
        }
    }
    pub fn delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }
    pub fn quote(self, quote: u8) -> Self {
        Self { quote, ..self }
    }
    pub fn load(self) -> Result<Vec<Reading>> {
        let csv_file = File::open(&self.path).map_err(|source| LoaderError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Loading {:?}...", self.path);
        let now = Instant::now();
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(csv_file));
        let mut readings = vec![];
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let reading = Reading::from_fields(&record).map_err(|source| LoaderError::Reading {
                record: i + 1,
                source,
            })?;
            readings.push(reading);
        }
        log::info!(
            "... loaded {} readings in {}ms",
            readings.len(),
            now.elapsed().as_millis()
        );
        Ok(readings)
    }
}
