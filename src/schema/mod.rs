//! # Rate Log Schema Definition
//!
//! This module defines the Apache Arrow schemas used for throughput logs once
//! they are loaded into memory.
//!
//! ## Schema Columns
//!
//! | Column | Type | Description | Unit |
//! |--------|------|-------------|------|
//! | Second | Float64 (nullable) | Elapsed time since the first byte | s |
//! | RateBytes | Float64 (nullable) | Byte rate observed during that second | B/s |
//! | RateMBps | Float64 (nullable) | Derived rate, `RateBytes / 1048576` | MiB/s |
//!
//! Column names match the keys of the JSON records, so a record such as
//! `{"Second": 3, "RateBytes": 2097152}` maps one-to-one onto a table row.
//! Nulls mark gaps: a record without the key, or with an explicit `null`.

mod builders;
/// Rate table column name constants.
pub mod columns;


pub use builders::{create_rate_schema, create_sample_schema, KEY_UNIT};
