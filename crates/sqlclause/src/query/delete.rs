//! DELETE statement.

use crate::builder::{Build, Builder};
use crate::error::ClauseError;
use crate::query::{Statement, WhereBuilder};

/// `DELETE FROM <table> [WHERE]`.
#[derive(Debug, Clone, Default)]
pub struct DeleteQuery {
    pub(crate) table: String,
    pub(crate) filter: WhereBuilder,
}

impl DeleteQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filter: WhereBuilder::new(),
        }
    }

    impl_where_methods!(filter);
}

impl Build for DeleteQuery {
    fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("DELETE FROM ");
        builder.write_quoted(&self.table);
        self.filter.where_clause().build(builder);
    }
}

impl Statement for DeleteQuery {
    fn construction_error(&self) -> Option<&ClauseError> {
        self.filter.error()
    }
}
