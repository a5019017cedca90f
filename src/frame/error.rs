//! Error types for the tabular data model and the delimited reader.

use thiserror::Error;

/// Errors raised by the dataframe and the delimited-text reader.
#[derive(Debug, Error)]
pub enum FrameError {
    /// A referenced column name was never declared on the table.
    #[error("unknown column '{name}'")]
    UnknownColumn {
        /// The name that failed to resolve
        name: String,
    },

    /// A cell was read through its numeric view but does not parse as a
    /// number. The caller assumed a numeric column; nothing is coerced.
    #[error("value '{value}' is not numeric")]
    NotNumeric {
        /// The offending cell text
        value: String,
    },

    /// Two tables with different column sequences were asked to merge.
    /// Neither table is modified when this is raised.
    #[error("cannot merge dataframes with different column sequences")]
    ColumnMismatch,

    /// A data record's field count does not match the declared columns.
    #[error("record {record} has {found} fields, expected {expected}")]
    RaggedRecord {
        /// Zero-based data record index
        record: usize,
        /// Declared column count
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// The underlying CSV parser failed (unreadable source, bad UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
