//! Clause building blocks: expressions, WHERE, ORDER BY and pagination.
//!
//! Every type here is plain data with public fields and renders through
//! [`Build`](crate::Build) into any [`Builder`](crate::Builder).
//!
//! ```ignore
//! use sqlclause::clause::{self, Expr, Where};
//! use sqlclause::{Build, Dialect};
//!
//! let mut filter = Where::new();
//! filter.push(Expr::gt("age", 18));
//! filter.push(clause::or(vec![Expr::eq("role", "admin")]).unwrap());
//!
//! let built = filter.render(Dialect::postgres())?;
//! assert_eq!(built.sql, r#" WHERE "age" > $1 OR "role" = $2"#);
//! ```

mod expr;
mod order_by;
mod pagination;
mod where_clause;

pub use expr::{Eq, Expr, Gt, Gte, In, Like, Lt, Lte, NegationBuild, Neq};
pub use order_by::{OrderBy, OrderBys, order_by_with_direction, parse_order_by};
pub use pagination::Pagination;
pub use where_clause::{
    AND_WITH_SPACE, AndExpr, NotExpr, OR_WITH_SPACE, OrExpr, Where, and, build_exprs, not, or,
};
