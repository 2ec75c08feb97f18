use super::*;
use arrow::array::Array;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_load_records_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let table = SampleTable::from_json_str(
        r#"[
            {"Second": 0, "RateBytes": 1048576},
            {"Second": 1, "RateBytes": 2097152},
            {"Second": 2, "RateBytes": 524288.5}
        ]"#,
    )?;

    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    assert_eq!(table.seconds().values().to_vec(), vec![0.0, 1.0, 2.0]);
    assert_eq!(
        table.rate_bytes().values().to_vec(),
        vec![1048576.0, 2097152.0, 524288.5]
    );
    Ok(())
}

#[test]
fn test_extra_keys_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let table = SampleTable::from_json_str(
        r#"[{"RateBits": 8.0, "Bytes": 1, "Second": 4, "Packets": 1, "RateBytes": 1.0}]"#,
    )?;

    assert_eq!(table.batch().num_columns(), 2);
    assert_eq!(table.seconds().value(0), 4.0);
    assert_eq!(table.rate_bytes().value(0), 1.0);
    Ok(())
}

#[test]
fn test_missing_column() {
    let err = SampleTable::from_json_str(r#"[{"Second": 0}, {"Second": 1}]"#).unwrap_err();
    assert!(matches!(err, LoadError::ColumnNotFound(ref c) if c == "RateBytes"));
}

#[test]
fn test_empty_array_has_no_columns() {
    let err = SampleTable::from_json_str("[]").unwrap_err();
    assert!(matches!(err, LoadError::ColumnNotFound(ref c) if c == "Second"));
}

#[test]
fn test_partial_records_become_nulls() -> Result<(), Box<dyn std::error::Error>> {
    let table = SampleTable::from_json_str(
        r#"[{"Second": 0, "RateBytes": 10}, {"Second": 1}, {"Second": 2, "RateBytes": null}]"#,
    )?;

    let rates = table.rate_bytes();
    assert_eq!(rates.len(), 3);
    assert_eq!(rates.null_count(), 2);
    assert!(rates.is_valid(0));
    assert!(rates.is_null(1));
    assert!(rates.is_null(2));
    Ok(())
}

#[test]
fn test_non_numeric_value() {
    let err = SampleTable::from_json_str(
        r#"[{"Second": 0, "RateBytes": 1}, {"Second": 1, "RateBytes": "fast"}]"#,
    )
    .unwrap_err();

    match err {
        LoadError::NonNumeric { column, row, value } => {
            assert_eq!(column, "RateBytes");
            assert_eq!(row, 1);
            assert_eq!(value, "\"fast\"");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_json() {
    let err = SampleTable::from_json_str(r#"[{"Second": 0,"#).unwrap_err();
    assert!(matches!(err, LoadError::JsonError(_)));
}

#[test]
fn test_not_an_array_of_objects() {
    let err = SampleTable::from_json_str(r#"{"Second": [0, 1]}"#).unwrap_err();
    assert!(matches!(err, LoadError::JsonError(_)));

    let err = SampleTable::from_json_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, LoadError::JsonError(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = SampleTable::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::IoError(_)));
}

#[test]
fn test_load_from_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("quic-full.json");
    let mut file = std::fs::File::create(&path)?;
    write!(
        file,
        "[\n\t{{\n\t\t\"RateBits\": 16777216,\n\t\t\"Bytes\": 2097152,\n\t\t\"Second\": 0,\n\t\t\"Packets\": 1500,\n\t\t\"RateBytes\": 2097152\n\t}}\n]"
    )?;
    drop(file);

    let table = SampleTable::from_path(&path)?;
    assert_eq!(table.len(), 1);
    assert_eq!(table.rate_bytes().value(0), 2097152.0);
    Ok(())
}

#[test]
fn test_from_values_length_mismatch() {
    let err = SampleTable::from_values(vec![0.0, 1.0], vec![1.0]).unwrap_err();
    assert!(matches!(err, LoadError::InvalidFormat(_)));
}
