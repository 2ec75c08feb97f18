use std::collections::HashMap;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::columns;

/// Field metadata key holding the physical unit of a column
pub const KEY_UNIT: &str = "unit";

/// Creates a nullable Float64 field annotated with its unit
fn field_with_unit(name: &str, unit: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_UNIT.to_string(), unit.to_string());
    Field::new(name, DataType::Float64, true).with_metadata(metadata)
}

/// Creates the schema of a freshly loaded log: `Second` and `RateBytes`.
///
/// # Example
///
/// ```
/// use ratechart::schema::{columns, create_sample_schema};
///
/// let schema = create_sample_schema();
/// assert_eq!(schema.fields().len(), 2);
/// assert!(schema.field_with_name(columns::RATE_BYTES).is_ok());
/// ```
pub fn create_sample_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder.push(field_with_unit(columns::SECOND, "s"));
    builder.push(field_with_unit(columns::RATE_BYTES, "B/s"));
    builder.finish()
}

/// Creates the schema of a transformed log: the sample columns plus `RateMBps`.
pub fn create_rate_schema() -> Schema {
    let mut builder = SchemaBuilder::from(create_sample_schema().fields());
    builder.push(field_with_unit(columns::RATE_MBPS, "MiB/s"));
    builder.finish()
}
