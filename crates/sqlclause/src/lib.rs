//! # sqlclause
//!
//! Composable SQL predicate trees rendered into parameterized SQL.
//!
//! ## Features
//!
//! - **Closed expression tree**: comparison leaves, `LIKE`, `IN` and the
//!   `AND` / `OR` / `NOT` combinators as one [`Expr`] enum
//! - **Pluggable sink**: everything renders through the [`Builder`] trait, so
//!   quoting and placeholder style are the sink's business
//! - **Negation without `NOT`**: leaves invert their own operator (`=` → `<>`,
//!   `>` → `<=`, `IN` → `NOT IN`) when wrapped in [`clause::not`]
//! - **Errors don't abort**: a bad `LIKE` value is reported to the sink and
//!   rendering carries on; the first error wins
//! - **Fluent statements**: [`query::table`] builds SELECT / INSERT / UPDATE /
//!   DELETE on top of the clause layer
//!
//! ## Clause layer
//!
//! ```ignore
//! use sqlclause::clause::{self, Expr, Where};
//! use sqlclause::{Build, Dialect};
//!
//! let filter = Where::from(vec![
//!     Expr::gt("age", 18),
//!     clause::not(vec![Expr::in_list("status", ["banned", "deleted"])]).unwrap(),
//! ]);
//!
//! let built = filter.render(Dialect::postgres())?;
//! assert_eq!(built.sql, r#" WHERE "age" > $1 AND "status" NOT IN ($2,$3)"#);
//! ```
//!
//! ## Statement layer
//!
//! ```ignore
//! use sqlclause::query::{self, Statement};
//! use sqlclause::Dialect;
//!
//! let built = query::table("users")
//!     .and_where(("age", ">", 18))
//!     .order_by("created_at desc")
//!     .limit(20)
//!     .select(["id", "name"])
//!     .to_sql(Dialect::postgres())?;
//!
//! client.query(&built.sql, &built.params_ref()).await?;
//! ```

pub mod builder;
pub mod clause;
pub mod error;
pub mod query;
pub mod value;

pub use builder::{Build, Builder, BuiltQuery, Dialect, PlaceholderStyle, QuoteStyle, SqlBuilder};
pub use clause::{Expr, NegationBuild, OrderBy, OrderBys, Pagination, Where};
pub use error::{ClauseError, ClauseResult};
pub use query::{
    DeleteQuery, InsertQuery, IntoCondition, Operator, Query, SelectQuery, Statement,
    UpdateQuery, WhereBuilder,
};
pub use value::Value;
