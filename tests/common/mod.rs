//! Shared test utilities and fixture generators

use std::io::Write as _;
use std::path::PathBuf;

use entrobin::frame::Dataframe;
use tempfile::TempDir;

/// Two well-separated groups: values <= 3 are class "A", values >= 10 are
/// class "B". The single informative boundary sits between 3 and 10.
pub fn separable_frame() -> Dataframe {
    let mut df = Dataframe::new();
    df.add_column("value");
    df.add_column("class");
    let rows = [
        ("1", "A"),
        ("2", "A"),
        ("3", "A"),
        ("10", "B"),
        ("11", "B"),
        ("12", "B"),
    ];
    for (value, label) in rows {
        let row = df.create_instance();
        row.add_attribute(value);
        row.add_attribute(label);
    }
    df
}

/// A frame whose rows all carry the same class label.
pub fn single_class_frame() -> Dataframe {
    let mut df = Dataframe::new();
    df.add_column("value");
    df.add_column("class");
    for value in ["1", "4", "9", "16"] {
        let row = df.create_instance();
        row.add_attribute(value);
        row.add_attribute("A");
    }
    df
}

/// Four class groups at increasing value ranges; discretization should
/// separate all four.
pub fn four_group_frame() -> Dataframe {
    let mut df = Dataframe::new();
    df.add_column("value");
    df.add_column("class");
    let groups: [(&[&str], &str); 4] = [
        (&["1", "2", "3"], "A"),
        (&["10", "11", "12"], "B"),
        (&["20", "21", "22"], "C"),
        (&["30", "31", "32"], "D"),
    ];
    for (values, label) in groups {
        for value in values {
            let row = df.create_instance();
            row.add_attribute(*value);
            row.add_attribute(label);
        }
    }
    df
}

/// Write `contents` to a CSV file inside a fresh temporary directory.
pub fn create_temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a dataframe has the expected shape.
pub fn assert_shape(df: &Dataframe, expected_rows: usize, expected_cols: usize) {
    assert_eq!(
        df.instance_count(),
        expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows,
        df.instance_count()
    );
    assert_eq!(
        df.column_count(),
        expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols,
        df.column_count()
    );
}
