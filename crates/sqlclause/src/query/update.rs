//! UPDATE statement.

use std::collections::BTreeMap;

use crate::builder::{Build, Builder};
use crate::clause::Pagination;
use crate::error::ClauseError;
use crate::query::{Statement, WhereBuilder};
use crate::value::Value;

/// `UPDATE <table> SET ... [WHERE] [LIMIT]`.
///
/// SET columns render in sorted order. Only the LIMIT half of the
/// pagination is emitted.
#[derive(Debug, Clone, Default)]
pub struct UpdateQuery {
    pub(crate) table: String,
    pub(crate) values: BTreeMap<String, Value>,
    pub(crate) filter: WhereBuilder,
    pub(crate) pagination: Pagination,
}

impl UpdateQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set one column. Setting the same column again overwrites it.
    pub fn update(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// Set several columns at once.
    pub fn update_values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Set LIMIT.
    pub fn limit(mut self, limit: i64) -> Self {
        self.pagination = self.pagination.limit(limit);
        self
    }

    // ==================== WHERE ====================

    impl_where_methods!(filter);
}

impl Build for UpdateQuery {
    fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("UPDATE ");
        builder.write_quoted(&self.table);

        if self.values.is_empty() {
            builder.add_error(ClauseError::InvalidUpdateValues(format!(
                "no columns to set on '{}'",
                self.table
            )));
        } else {
            builder.write_str(" SET ");
            for (idx, (column, value)) in self.values.iter().enumerate() {
                if idx > 0 {
                    builder.write_str(", ");
                }
                builder.write_quoted(column);
                builder.write_str(" = ");
                builder.add_var(value);
            }
        }

        self.filter.where_clause().build(builder);

        if let Some(limit) = self.pagination.effective_limit() {
            builder.write_str(" LIMIT ");
            builder.add_var(&Value::Int(limit));
        }
    }
}

impl Statement for UpdateQuery {
    fn construction_error(&self) -> Option<&ClauseError> {
        self.filter.error()
    }
}
