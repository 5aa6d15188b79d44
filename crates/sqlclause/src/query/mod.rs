//! Fluent statement layer on top of [`clause`](crate::clause).
//!
//! A [`Query`] collects a table name, WHERE conditions, ORDER BY keys and
//! pagination, then converts into one of the statement types:
//!
//! ```ignore
//! use sqlclause::query::{self, Statement};
//! use sqlclause::Dialect;
//!
//! let built = query::table("users")
//!     .and_where(("age", ">", 18))
//!     .or_where(("name", "admin"))
//!     .order_by("age desc, name")
//!     .paginate(2, 20)
//!     .select(["id", "name", "age"])
//!     .to_sql(Dialect::postgres())?;
//!
//! // UPDATE
//! query::table("users")
//!     .and_where(("id", 1))
//!     .update("name", "John")
//!     .to_sql(Dialect::postgres())?;
//!
//! // INSERT
//! query::table("users")
//!     .insert_row([("name", "John")])
//!     .to_sql(Dialect::postgres())?;
//!
//! // DELETE
//! query::table("users")
//!     .and_where(("id", 1))
//!     .delete()
//!     .to_sql(Dialect::postgres())?;
//! ```

#[macro_use]
mod macros;

mod condition;
mod delete;
mod insert;
mod select;
mod update;
pub(crate) mod where_builder;

pub use condition::{IntoCondition, Operator};
pub use delete::DeleteQuery;
pub use insert::{InsertQuery, Row, row};
pub use select::SelectQuery;
pub use update::UpdateQuery;
pub use where_builder::WhereBuilder;

use crate::builder::{Build, BuiltQuery, Dialect, SqlBuilder};
use crate::clause::{OrderBys, Pagination};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// A renderable statement.
pub trait Statement: Build {
    /// An error recorded while the statement was being assembled.
    fn construction_error(&self) -> Option<&ClauseError>;

    /// Render with a fresh [`SqlBuilder`].
    ///
    /// A construction error wins over anything reported while rendering.
    fn to_sql(&self, dialect: Dialect) -> ClauseResult<BuiltQuery> {
        if let Some(err) = self.construction_error() {
            return Err(err.clone());
        }
        let mut builder = SqlBuilder::new(dialect);
        self.build(&mut builder);
        let built = builder.finish()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlclause.sql",
            sql = %built.sql,
            params = built.params.len(),
            "statement built"
        );

        Ok(built)
    }
}

/// Start a [`Query`] on `table`.
pub fn table(name: impl Into<String>) -> Query {
    Query::table(name)
}

/// Table-bound query state shared by every statement kind.
#[derive(Debug, Clone, Default)]
pub struct Query {
    table: String,
    filter: WhereBuilder,
    orders: OrderBys,
    pagination: Pagination,
}

impl Query {
    /// Create a query on `name`.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            ..Self::default()
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    // ==================== WHERE ====================

    impl_where_methods!(filter);

    // ==================== ORDER BY ====================

    impl_order_methods!(orders);

    // ==================== LIMIT / OFFSET ====================

    impl_pagination_methods!(pagination);

    // ==================== Statements ====================

    /// `SELECT columns` with this query's WHERE, ORDER BY and pagination.
    /// No columns means `*`.
    pub fn select<I, S>(&self, columns: I) -> SelectQuery
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SelectQuery {
            table: self.table.clone(),
            columns: Vec::new(),
            filter: self.filter.clone(),
            orders: self.orders.clone(),
            pagination: self.pagination,
        }
        .select(columns)
    }

    /// INSERT one row.
    pub fn insert_row<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> InsertQuery
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert_query().row(pairs)
    }

    /// INSERT several rows.
    pub fn insert_rows<R, K, V>(&self, rows: impl IntoIterator<Item = R>) -> InsertQuery
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert_query().rows(rows)
    }

    /// UPDATE one column; more can be chained on the result.
    pub fn update(&self, column: impl Into<String>, value: impl Into<Value>) -> UpdateQuery {
        self.update_query().update(column, value)
    }

    /// UPDATE several columns.
    pub fn update_values<K, V>(&self, values: impl IntoIterator<Item = (K, V)>) -> UpdateQuery
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.update_query().update_values(values)
    }

    /// DELETE with this query's WHERE.
    pub fn delete(&self) -> DeleteQuery {
        DeleteQuery {
            table: self.table.clone(),
            filter: self.filter.clone(),
        }
    }

    fn insert_query(&self) -> InsertQuery {
        InsertQuery {
            table: self.table.clone(),
            rows: Vec::new(),
            error: self.filter.error().cloned(),
        }
    }

    fn update_query(&self) -> UpdateQuery {
        UpdateQuery {
            table: self.table.clone(),
            values: Default::default(),
            filter: self.filter.clone(),
            pagination: self.pagination,
        }
    }
}
