//! SELECT statement.

use crate::builder::{Build, Builder};
use crate::clause::{OrderBys, Pagination};
use crate::query::{Statement, WhereBuilder};

/// `SELECT <columns> FROM <table> [WHERE] [ORDER BY] [LIMIT/OFFSET]`.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    pub(crate) table: String,
    /// Empty means `*`.
    pub(crate) columns: Vec<String>,
    pub(crate) filter: WhereBuilder,
    pub(crate) orders: OrderBys,
    pub(crate) pagination: Pagination,
}

impl SelectQuery {
    /// Create a `SELECT *` for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Append selected columns.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    // ==================== WHERE ====================

    impl_where_methods!(filter);

    // ==================== ORDER BY ====================

    impl_order_methods!(orders);

    // ==================== LIMIT / OFFSET ====================

    impl_pagination_methods!(pagination);
}

impl Build for SelectQuery {
    fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("SELECT ");
        if self.columns.is_empty() {
            builder.write_char('*');
        } else {
            for (idx, column) in self.columns.iter().enumerate() {
                if idx > 0 {
                    builder.write_str(", ");
                }
                builder.write_quoted(column);
            }
        }

        if !self.table.is_empty() {
            builder.write_str(" FROM ");
            builder.write_quoted(&self.table);
        }

        self.filter.where_clause().build(builder);
        self.orders.build(builder);
        self.pagination.build(builder);
    }
}

impl Statement for SelectQuery {
    fn construction_error(&self) -> Option<&crate::error::ClauseError> {
        self.filter.error()
    }
}
