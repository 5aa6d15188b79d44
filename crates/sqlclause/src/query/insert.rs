//! INSERT statement.

use std::collections::{BTreeMap, BTreeSet};

use crate::builder::{Build, Builder};
use crate::error::ClauseError;
use crate::query::Statement;
use crate::value::Value;

/// One row of column/value pairs, ordered by column name.
pub type Row = BTreeMap<String, Value>;

/// Collect `(column, value)` pairs into a [`Row`]. Later pairs overwrite
/// earlier ones for the same column.
pub fn row<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Row
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(column, value)| (column.into(), value.into()))
        .collect()
}

/// `INSERT INTO <table> (<columns>) VALUES (...), (...)`.
///
/// The column list is the sorted union of every row's columns; a row that
/// lacks a column binds NULL for it.
#[derive(Debug, Clone, Default)]
pub struct InsertQuery {
    pub(crate) table: String,
    pub(crate) rows: Vec<Row>,
    pub(crate) error: Option<ClauseError>,
}

impl InsertQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Append one row. Rows without columns are ignored.
    pub fn row<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let row = row(pairs);
        if !row.is_empty() {
            self.rows.push(row);
        }
        self
    }

    /// Append several rows.
    pub fn rows<R, K, V>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for pairs in rows {
            self = self.row(pairs);
        }
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn error(&self) -> Option<&ClauseError> {
        self.error.as_ref()
    }

    fn columns(&self) -> Vec<&str> {
        let columns: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        columns.into_iter().collect()
    }
}

impl Build for InsertQuery {
    fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("INSERT INTO ");
        builder.write_quoted(&self.table);

        if self.rows.is_empty() {
            builder.add_error(ClauseError::invalid_insert_values(format!(
                "no rows to insert into '{}'",
                self.table
            )));
            return;
        }

        let columns = self.columns();
        builder.write_str(" (");
        for (idx, column) in columns.iter().enumerate() {
            if idx > 0 {
                builder.write_str(", ");
            }
            builder.write_quoted(column);
        }
        builder.write_str(") VALUES ");

        for (row_idx, row) in self.rows.iter().enumerate() {
            if row_idx > 0 {
                builder.write_str(", ");
            }
            builder.write_char('(');
            for (idx, column) in columns.iter().enumerate() {
                if idx > 0 {
                    builder.write_str(", ");
                }
                builder.add_var(row.get(*column).unwrap_or(&Value::Null));
            }
            builder.write_char(')');
        }
    }
}

impl Statement for InsertQuery {
    fn construction_error(&self) -> Option<&ClauseError> {
        self.error.as_ref()
    }
}
