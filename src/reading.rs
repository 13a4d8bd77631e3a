use chrono::NaiveDateTime;
use std::fmt;

/// Timestamp layout of the first column of the input file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(thiserror::Error, Debug)]
pub enum ReadingError {
    #[error("failed to parse {value:?} as a number")]
    Value {
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("value {0:?} is not a finite number")]
    NonFinite(String),
    #[error("integer part of {0:?} does not fit in 64 bits")]
    OutOfRange(String),
}
type Result<T> = std::result::Result<T, ReadingError>;

/// A timestamped reading
///
/// Either field may be missing: a row with a malformed timestamp keeps its value
/// but no timestamp, and is ignored when the readings are bucketed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    pub timestamp: Option<NaiveDateTime>,
    pub value: Option<f64>,
}
impl Reading {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            value: Some(value),
        }
    }
    /// Parses a row of fields: the timestamp first, then the value
    ///
    /// A malformed timestamp is logged and left out, a malformed value is an error.
    pub fn from_fields<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = fields.into_iter();
        let mut this = Self::default();
        if let Some(field) = fields.next() {
            let field = field.as_ref();
            match NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT) {
                Ok(timestamp) => this.timestamp = Some(timestamp),
                Err(e) => log::warn!("error {e} while parsing {field:?}"),
            }
        }
        if let Some(field) = fields.next() {
            let field = field.as_ref();
            let value = field
                .trim()
                .parse::<f64>()
                .map_err(|source| ReadingError::Value {
                    value: field.to_string(),
                    source,
                })?;
            if !value.is_finite() {
                return Err(ReadingError::NonFinite(field.to_string()));
            }
            // i64::MIN is -2^63 exactly, i64::MAX rounds up to 2^63
            let truncated = value.trunc();
            if truncated < i64::MIN as f64 || truncated >= -(i64::MIN as f64) {
                return Err(ReadingError::OutOfRange(field.to_string()));
            }
            this.value = Some(value);
        }
        Ok(this)
    }
    /// Returns the value truncated toward zero
    pub fn truncated_value(&self) -> Option<i64> {
        self.value.map(|v| v.trunc() as i64)
    }
}
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(ts) => write!(f, "datetime: {}", ts.format(TIMESTAMP_FORMAT))?,
            None => write!(f, "datetime: -")?,
        }
        match self.value {
            Some(v) => write!(f, " value: {}", v),
            None => write!(f, " value: -"),
        }
    }
}
