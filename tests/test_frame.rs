//! Tests for the tabular data model and the delimited reader

mod common;

use common::{assert_shape, create_temp_csv, separable_frame};
use entrobin::frame::{load_csv, read_csv, Dataframe, FrameError};

#[test]
fn test_merge_combines_row_counts_and_empties_source() {
    let mut left = separable_frame();
    let mut right = separable_frame();
    let left_rows = left.instance_count();
    let right_rows = right.instance_count();

    left.merge(&mut right).unwrap();

    assert_eq!(left.instance_count(), left_rows + right_rows);
    assert_eq!(right.instance_count(), 0);
}

#[test]
fn test_merge_with_different_columns_changes_nothing() {
    let mut left = separable_frame();
    let mut right = Dataframe::new();
    right.add_column("value");
    right.add_column("grade");
    let row = right.create_instance();
    row.add_attribute("7");
    row.add_attribute("C");

    let result = left.merge(&mut right);

    assert!(matches!(result, Err(FrameError::ColumnMismatch)));
    assert_shape(&left, 6, 2);
    assert_shape(&right, 1, 2);
}

#[test]
fn test_export_reingest_round_trip() {
    let df = separable_frame();

    let mut exported = Vec::new();
    df.write_csv(&mut exported).unwrap();
    let (_dir, path) = create_temp_csv(std::str::from_utf8(&exported).unwrap());

    let reloaded = load_csv(&path, true).unwrap();

    assert_eq!(reloaded.column_names(), df.column_names());
    assert_eq!(reloaded.instance_count(), df.instance_count());
    for i in 0..df.instance_count() {
        for j in 0..df.column_count() {
            assert_eq!(
                reloaded.instance(i).attribute(j).as_text(),
                df.instance(i).attribute(j).as_text()
            );
        }
    }
}

#[test]
fn test_reader_reports_missing_file_on_table() {
    let mut df = Dataframe::new();
    let ok = read_csv(&mut df, "/definitely/not/here.csv", true);

    assert!(!ok);
    assert!(!df.error_message().is_empty());
}

#[test]
fn test_reader_clears_message_on_success() {
    let (_dir, path) = create_temp_csv("value,class\n1,A\n");

    let mut df = Dataframe::new();
    df.set_error_message("stale");
    assert!(read_csv(&mut df, &path, true));
    assert_eq!(df.error_message(), "");
    assert_shape(&df, 1, 2);
}

#[test]
fn test_reader_rejects_ragged_records() {
    let (_dir, path) = create_temp_csv("a,b,c\n1,2,3\n4,5\n");

    let err = load_csv(&path, true).unwrap_err();
    assert!(matches!(err, FrameError::RaggedRecord { record: 1, .. }));
}

#[test]
fn test_headerless_load_names_columns_by_position() {
    let (_dir, path) = create_temp_csv("1,A\n2,B\n");

    let df = load_csv(&path, false).unwrap();
    assert_eq!(df.column_names(), ["column_0", "column_1"]);
    assert_shape(&df, 2, 2);
}

#[test]
fn test_numeric_view_is_loud_on_text() {
    let df = separable_frame();
    // The class column is textual; the numeric view must not coerce.
    let err = df.instance(0).attribute(1).as_number().unwrap_err();
    assert!(matches!(err, FrameError::NotNumeric { .. }));
}
