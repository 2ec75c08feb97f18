//! Byte rate to MB/s conversion.
//!
//! The conversion divides by 1024 twice (bytes → KiB → MiB), so "MB/s" in
//! chart labels means mebibytes per second.

use std::sync::Arc;

use arrow::array::{ArrayRef, AsArray, Float64Array};
use arrow::datatypes::Float64Type;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::loader::SampleTable;
use crate::schema::create_rate_schema;

/// Bytes in one mebibyte
pub const BYTES_PER_MEBIBYTE: f64 = 1024.0 * 1024.0;

/// Convert a byte-rate column into MB/s, preserving order, length and nulls.
///
/// ```
/// use arrow::array::Float64Array;
/// use ratechart::transform::rate_mbps;
///
/// let rates = rate_mbps(&Float64Array::from(vec![0.0, 1048576.0]));
/// assert_eq!(rates.values().to_vec(), vec![0.0, 1.0]);
/// ```
pub fn rate_mbps(rate_bytes: &Float64Array) -> Float64Array {
    rate_bytes.unary(|bytes| bytes / BYTES_PER_MEBIBYTE)
}

/// A [`SampleTable`] extended with the derived `RateMBps` column
#[derive(Debug, Clone)]
pub struct RateTable {
    batch: RecordBatch,
}

impl RateTable {
    /// Derive `RateMBps` from the `RateBytes` column of a loaded log
    pub fn from_samples(samples: &SampleTable) -> Result<Self, ArrowError> {
        let rate = rate_mbps(samples.rate_bytes());
        let mut arrays: Vec<ArrayRef> = samples.batch().columns().to_vec();
        arrays.push(Arc::new(rate));

        let batch = RecordBatch::try_new(Arc::new(create_rate_schema()), arrays)?;
        Ok(Self { batch })
    }

    /// Underlying Arrow batch (`Second`, `RateBytes`, `RateMBps`)
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.batch.num_rows()
    }

    /// Whether the table holds no samples
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

    /// The `RateMBps` column
    pub fn rate_mbps(&self) -> &Float64Array {
        self.batch.column(2).as_primitive::<Float64Type>()
    }

    /// Plot-ready `(second, rate_mbps)` vectors; nulls become NaN
    pub fn series(&self) -> (Vec<f64>, Vec<f64>) {
        (nan_filled(self.seconds()), nan_filled(self.rate_mbps()))
    }
}

fn nan_filled(array: &Float64Array) -> Vec<f64> {
    array.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;
    use proptest::prelude::*;

    #[test]
    fn test_scenario_zero_and_one_mebibyte() {
        let samples = SampleTable::from_json_str(
            r#"[{"Second":0,"RateBytes":0},{"Second":1,"RateBytes":1048576}]"#,
        )
        .unwrap();
        let table = RateTable::from_samples(&samples).unwrap();

        assert_eq!(table.rate_mbps().values().to_vec(), vec![0.0, 1.0]);
        assert_eq!(table.batch().num_columns(), 3);
    }

    #[test]
    fn test_nulls_are_preserved() {
        let input = Float64Array::from(vec![Some(2097152.0), None, Some(524288.0)]);
        let output = rate_mbps(&input);

        assert_eq!(output.len(), 3);
        assert_eq!(output.value(0), 2.0);
        assert!(output.is_null(1));
        assert_eq!(output.value(2), 0.5);
    }

    #[test]
    fn test_series_fills_gaps_with_nan() {
        let samples =
            SampleTable::from_json_str(r#"[{"Second":0,"RateBytes":1048576},{"Second":1}]"#)
                .unwrap();
        let table = RateTable::from_samples(&samples).unwrap();
        let (x, y) = table.series();

        assert_eq!(x, vec![0.0, 1.0]);
        assert_eq!(y[0], 1.0);
        assert!(y[1].is_nan());
    }

    #[test]
    fn test_empty_column() {
        let output = rate_mbps(&Float64Array::from(Vec::<f64>::new()));
        assert!(output.is_empty());
    }

    proptest! {
        #[test]
        fn prop_length_preserved(values in prop::collection::vec(-1e15f64..1e15, 0..256)) {
            let output = rate_mbps(&Float64Array::from(values.clone()));
            prop_assert_eq!(output.len(), values.len());
        }

        #[test]
        fn prop_exact_quotient(values in prop::collection::vec(any::<f64>().prop_filter("finite", |v| v.is_finite()), 1..256)) {
            let output = rate_mbps(&Float64Array::from(values.clone()));
            for (i, bytes) in values.iter().enumerate() {
                prop_assert_eq!(output.value(i).to_bits(), (bytes / 1048576.0).to_bits());
            }
        }

        #[test]
        fn prop_table_keeps_order(seconds in prop::collection::vec(0f64..1e6, 1..64)) {
            let rates: Vec<f64> = seconds.iter().map(|s| s * 1024.0).collect();
            let samples = SampleTable::from_values(seconds.clone(), rates).unwrap();
            let table = RateTable::from_samples(&samples).unwrap();
            prop_assert_eq!(table.len(), seconds.len());
            prop_assert_eq!(table.seconds().values().to_vec(), seconds);
        }
    }
}
