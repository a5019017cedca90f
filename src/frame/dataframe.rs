//! The owning table: named columns plus a sequence of instances.

use std::collections::HashMap;
use std::io::{self, Write};

use super::{FrameError, Instance};

/// An in-memory table with named columns and owned rows.
///
/// Columns are declared one at a time with [`add_column`]; every owned
/// instance has exactly as many attributes as there are columns, with
/// attribute `i` belonging to column `i`. Duplicate column names are not
/// rejected; name lookup resolves to the most recently declared index.
///
/// The dataframe never touches the filesystem itself. Ingestion is driven
/// from outside (see [`reader`](super::reader)), and the table only
/// stores the last ingestion error message for retrieval.
///
/// [`add_column`]: Dataframe::add_column
#[derive(Debug, Default)]
pub struct Dataframe {
    column_names: Vec<String>,
    column_lookup: HashMap<String, usize>,
    instances: Vec<Instance>,
    error_message: String,
}

impl Dataframe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the next column.
    pub fn add_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.column_lookup
            .insert(name.clone(), self.column_names.len());
        self.column_names.push(name);
    }

    /// Append a new empty row and hand back a handle for populating it.
    /// Ownership stays with the dataframe.
    pub fn create_instance(&mut self) -> &mut Instance {
        self.instances.push(Instance::default());
        self.instances.last_mut().unwrap()
    }

    /// Resolve a column name to its index.
    pub fn column_index(&self, name: &str) -> Result<usize, FrameError> {
        self.column_lookup
            .get(name)
            .copied()
            .ok_or_else(|| FrameError::UnknownColumn {
                name: name.to_string(),
            })
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn column_name(&self, idx: usize) -> &str {
        &self.column_names[idx]
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn instance(&self, idx: usize) -> &Instance {
        &self.instances[idx]
    }

    pub fn instance_mut(&mut self, idx: usize) -> &mut Instance {
        &mut self.instances[idx]
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Indices of columns whose every cell parses as a number. A table
    /// with no rows has no numeric columns.
    pub fn numeric_columns(&self) -> Vec<usize> {
        if self.instances.is_empty() {
            return Vec::new();
        }
        (0..self.column_names.len())
            .filter(|&idx| {
                self.instances
                    .iter()
                    .all(|instance| instance.attribute(idx).as_number().is_ok())
            })
            .collect()
    }

    /// Move every row of `other` into this dataframe.
    ///
    /// Succeeds only when the two column-name sequences are identical; on
    /// success `other` is left empty, on failure neither table changes.
    pub fn merge(&mut self, other: &mut Dataframe) -> Result<(), FrameError> {
        if self.column_names != other.column_names {
            return Err(FrameError::ColumnMismatch);
        }
        self.instances.append(&mut other.instances);
        Ok(())
    }

    /// Write the table as delimited text: a header line of column names,
    /// then one comma-separated line per row.
    ///
    /// Fields are written verbatim; embedded delimiters are neither quoted
    /// nor escaped.
    pub fn write_csv<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{}", self.column_names.join(","))?;
        for instance in &self.instances {
            for i in 0..self.column_names.len() {
                if i > 0 {
                    write!(sink, ",")?;
                }
                write!(sink, "{}", instance.attribute(i).as_text())?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }

    /// The last ingestion error message; empty when the last ingestion
    /// succeeded (or none has run).
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }
}
