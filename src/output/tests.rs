//! Tests for the CSV table writer

use super::*;
use crate::types::Row;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;

fn row(fields: &[(&str, serde_json::Value)]) -> Row {
    let mut row = Row::new();
    for (key, value) in fields {
        row.insert((*key).to_string(), value.clone());
    }
    row
}

#[test]
fn test_header_written_on_create() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let writer =
        CsvTableWriter::create(&path, ["order_id", "commission", "id", "date_inserted"]).unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "order_id,commission,id,date_inserted\n");
}

#[test]
fn test_rows_projected_onto_header_order() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let mut writer =
        CsvTableWriter::create(&path, ["order_id", "commission", "id", "date_inserted"]).unwrap();
    // Row keys deliberately out of header order, with an extra field.
    writer
        .write_row(&row(&[
            ("id", json!("42")),
            ("date_inserted", json!("2024-03-01 10:00:00")),
            ("order_id", json!("A-100")),
            ("commission", json!("12.50")),
            ("ignored", json!("x")),
        ]))
        .unwrap();
    assert_eq!(writer.rows_written(), 1);
    writer.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "order_id,commission,id,date_inserted\nA-100,12.50,42,2024-03-01 10:00:00\n"
    );
}

#[test]
fn test_missing_and_null_fields_become_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let mut writer = CsvTableWriter::create(&path, ["a", "b", "c"]).unwrap();
    writer
        .write_row(&row(&[("a", json!("x")), ("b", json!(null))]))
        .unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "a,b,c\nx,,\n");
}

#[test]
fn test_non_string_scalars_rendered() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let mut writer = CsvTableWriter::create(&path, ["n", "f", "b"]).unwrap();
    writer
        .write_row(&row(&[
            ("n", json!(7)),
            ("f", json!(12.5)),
            ("b", json!(true)),
        ]))
        .unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "n,f,b\n7,12.5,true\n");
}

#[test]
fn test_embedded_delimiters_and_quotes_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let tricky = "12,5\"";
    let mut writer = CsvTableWriter::create(&path, ["order_id", "commission"]).unwrap();
    writer
        .write_row(&row(&[
            ("order_id", json!("A,1")),
            ("commission", json!(tricky)),
        ]))
        .unwrap();
    writer
        .write_row(&row(&[
            ("order_id", json!("line\nbreak")),
            ("commission", json!("plain")),
        ]))
        .unwrap();
    writer.close().unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "A,1");
    assert_eq!(&records[0][1], tricky);
    assert_eq!(&records[1][0], "line\nbreak");

    // Plain fields stay unquoted.
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(",plain\n"));
}

#[test]
fn test_creates_missing_parent_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out").join("tables").join("data.csv");

    let writer = CsvTableWriter::create(&path, ["id"]).unwrap();
    writer.close().unwrap();
    assert!(path.is_file());
}

#[test]
fn test_line_count_matches_rows_plus_header() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("data.csv");

    let mut writer = CsvTableWriter::create(&path, ["id"]).unwrap();
    for i in 0..250 {
        writer.write_row(&row(&[("id", json!(i.to_string()))])).unwrap();
    }
    assert_eq!(writer.rows_written(), 250);
    writer.close().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 251);
}
