use arrow::array::{Array, Float64Array};
use serde_json::{Map, Value};

use super::LoadError;

/// Read an optional f64 value from a nullable array.
pub(crate) fn get_optional_f64(array: &Float64Array, idx: usize) -> Option<f64> {
    if array.is_null(idx) {
        None
    } else {
        Some(array.value(idx))
    }
}

/// Build a Float64 column from one key of every record.
///
/// The column exists if at least one record carries the key; records without
/// it, or with an explicit `null`, produce a null cell.
pub(super) fn column_from_records(
    records: &[Map<String, Value>],
    name: &str,
) -> Result<Float64Array, LoadError> {
    if !records.iter().any(|record| record.contains_key(name)) {
        return Err(LoadError::ColumnNotFound(name.to_string()));
    }

    let values = records
        .iter()
        .enumerate()
        .map(|(row, record)| match record.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| non_numeric(name, row, n)),
            Some(other) => Err(non_numeric(name, row, other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Float64Array::from(values))
}

fn non_numeric(column: &str, row: usize, value: impl ToString) -> LoadError {
    LoadError::NonNumeric {
        column: column.to_string(),
        row,
        value: value.to_string(),
    }
}
