//! Delimited-text ingestion.
//!
//! The reader is a collaborator of the [`Dataframe`], not part of it: it
//! drives the table's construction interface (`add_column` plus
//! `create_instance`) and reports failure by storing a human-readable
//! message on the table. The table itself never opens files.

use std::path::Path;

use csv::ReaderBuilder;

use super::{Dataframe, FrameError};

/// Populate `df` from a delimited file.
///
/// Returns `true` on success. On failure, returns `false` and leaves the
/// message retrievable via [`Dataframe::error_message`]; rows ingested
/// before the failure remain on the table.
pub fn read_csv(df: &mut Dataframe, path: impl AsRef<Path>, has_header: bool) -> bool {
    match populate(df, path.as_ref(), has_header) {
        Ok(()) => {
            df.set_error_message("");
            true
        }
        Err(err) => {
            df.set_error_message(err.to_string());
            false
        }
    }
}

/// Load a fresh dataframe from a delimited file.
pub fn load_csv(path: impl AsRef<Path>, has_header: bool) -> Result<Dataframe, FrameError> {
    let mut df = Dataframe::new();
    populate(&mut df, path.as_ref(), has_header)?;
    Ok(df)
}

fn populate(df: &mut Dataframe, path: &Path, has_header: bool) -> Result<(), FrameError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_path(path)?;

    let mut expected = 0usize;
    if has_header {
        for name in reader.headers()?.clone().iter() {
            df.add_column(name);
        }
        expected = df.column_count();
    }

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if df.column_count() == 0 {
            // Headerless source: the first record fixes the width and the
            // columns are named by position.
            for i in 0..record.len() {
                df.add_column(format!("column_{}", i));
            }
            expected = record.len();
        }
        if record.len() != expected {
            return Err(FrameError::RaggedRecord {
                record: index,
                expected,
                found: record.len(),
            });
        }
        let instance = df.create_instance();
        for field in record.iter() {
            instance.add_attribute(field);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_with_header() {
        let file = write_file("name,score\nalice,9.5\nbob,3.0\n");

        let mut df = Dataframe::new();
        assert!(read_csv(&mut df, file.path(), true));
        assert_eq!(df.error_message(), "");
        assert_eq!(df.column_names(), ["name", "score"]);
        assert_eq!(df.instance_count(), 2);
        assert_eq!(df.instance(0).attribute(1).as_number().unwrap(), 9.5);
    }

    #[test]
    fn test_read_without_header_names_columns_by_position() {
        let file = write_file("alice,9.5\nbob,3.0\n");

        let df = load_csv(file.path(), false).unwrap();
        assert_eq!(df.column_names(), ["column_0", "column_1"]);
        assert_eq!(df.instance_count(), 2);
    }

    #[test]
    fn test_missing_file_reports_message_on_table() {
        let mut df = Dataframe::new();
        assert!(!read_csv(&mut df, "/no/such/file.csv", true));
        assert!(!df.error_message().is_empty());
        assert_eq!(df.instance_count(), 0);
    }

    #[test]
    fn test_ragged_record_rejected() {
        let file = write_file("a,b\n1,2\n3\n");

        let err = load_csv(file.path(), true).unwrap_err();
        assert!(matches!(
            err,
            FrameError::RaggedRecord {
                record: 1,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn test_round_trip_preserves_names_and_values() {
        let file = write_file("name,score\nalice,9.5\nbob,3.0\n");
        let df = load_csv(file.path(), true).unwrap();

        let mut exported = Vec::new();
        df.write_csv(&mut exported).unwrap();
        let copy = write_file(std::str::from_utf8(&exported).unwrap());
        let reloaded = load_csv(copy.path(), true).unwrap();

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
}
