//! # Rate Log Loader
//!
//! Reads a throughput log, a JSON array of records, into a column-oriented
//! [`SampleTable`] backed by an Arrow `RecordBatch`.
//!
//! ## Record Semantics
//!
//! - A column exists if at least one record carries its key. An empty array
//!   therefore has no columns at all.
//! - A record missing a key that other records carry, or holding `null`,
//!   produces a null cell.
//! - Any other non-numeric value is rejected with [`LoadError::NonNumeric`].
//! - Keys other than `Second` and `RateBytes` are ignored.
//!
//! ## Example
//!
//! ```rust
//! use ratechart::loader::SampleTable;
//!
//! let table = SampleTable::from_json_str(
//!     r#"[{"Second": 0, "RateBytes": 0}, {"Second": 1, "RateBytes": 1048576}]"#,
//! )?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.rate_bytes().value(1), 1048576.0);
//! # Ok::<(), ratechart::loader::LoadError>(())
//! ```

mod error;
mod utils;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub(crate) use utils::get_optional_f64;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, AsArray, Float64Array};
use arrow::datatypes::Float64Type;
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use serde_json::{Map, Value};

use crate::schema::{columns, create_sample_schema};
use utils::column_from_records;

/// One JSON record of the input log
type Record = Map<String, Value>;

/// In-memory throughput log with `Second` and `RateBytes` columns, in input order
#[derive(Debug, Clone)]
pub struct SampleTable {
    batch: RecordBatch,
}

impl SampleTable {
    /// Load a log from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("Loading rate log {}", path.display());

        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file))?;

        debug!("Loaded {} samples from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load a log from any reader yielding JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Self::from_records(&records)
    }

    /// Load a log from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    /// Build a table from parallel value vectors
    pub fn from_values(second: Vec<f64>, rate_bytes: Vec<f64>) -> Result<Self, LoadError> {
        if second.len() != rate_bytes.len() {
            return Err(LoadError::InvalidFormat(format!(
                "column lengths differ: {} seconds, {} rates",
                second.len(),
                rate_bytes.len()
            )));
        }
        Self::from_arrays(Float64Array::from(second), Float64Array::from(rate_bytes))
    }

    fn from_records(records: &[Record]) -> Result<Self, LoadError> {
        let second = column_from_records(records, columns::SECOND)?;
        let rate_bytes = column_from_records(records, columns::RATE_BYTES)?;
        Self::from_arrays(second, rate_bytes)
    }

    fn from_arrays(second: Float64Array, rate_bytes: Float64Array) -> Result<Self, LoadError> {
        let arrays: Vec<ArrayRef> = vec![Arc::new(second), Arc::new(rate_bytes)];
        let batch = RecordBatch::try_new(Arc::new(create_sample_schema()), arrays)?;
        Ok(Self { batch })
    }

    /// Underlying Arrow batch
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.batch.num_rows()
    }

    /// Whether the log holds no samples
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// The `Second` column
    pub fn seconds(&self) -> &Float64Array {
        self.batch.column(0).as_primitive::<Float64Type>()
    }

    /// The `RateBytes` column
    pub fn rate_bytes(&self) -> &Float64Array {
        self.batch.column(1).as_primitive::<Float64Type>()
    }
}
