//! Turning caller input into expressions.

use std::fmt;
use std::str::FromStr;

use crate::clause::{AndExpr, Eq, Expr, Gt, Gte, In, Like, Lt, Lte, Neq, NotExpr, OrExpr, Where};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// Comparison operator accepted in `(column, op, value)` conditions.
#[derive(Debug, Clone, Copy, PartialEq, std::cmp::Eq, Hash)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
}

impl Operator {
    /// SQL token for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
        }
    }

    /// Build the leaf expression for `column <op> value`.
    ///
    /// `IN` requires a list value.
    pub fn apply(self, column: impl Into<String>, value: impl Into<Value>) -> ClauseResult<Expr> {
        let column = column.into();
        let value = value.into();
        let expr = match self {
            Operator::Eq => Eq::new(column, value).into(),
            Operator::Neq => Neq::new(column, value).into(),
            Operator::Gt => Gt::new(column, value).into(),
            Operator::Gte => Gte::new(column, value).into(),
            Operator::Lt => Lt::new(column, value).into(),
            Operator::Lte => Lte::new(column, value).into(),
            Operator::Like => Like::new(column, value).into(),
            Operator::In => match value {
                Value::List(values) => In { column, values }.into(),
                other => {
                    return Err(ClauseError::invalid_condition(format!(
                        "IN on column '{column}' requires a list value, got {}",
                        other.kind()
                    )));
                }
            },
        };
        Ok(expr)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim() {
            "=" => Operator::Eq,
            "!=" | "<>" => Operator::Neq,
            ">" => Operator::Gt,
            ">=" => Operator::Gte,
            "<" => Operator::Lt,
            "<=" => Operator::Lte,
            t if t.eq_ignore_ascii_case("like") => Operator::Like,
            t if t.eq_ignore_ascii_case("in") => Operator::In,
            _ => return Err(ClauseError::invalid_operator(s)),
        };
        Ok(op)
    }
}

/// Input accepted by `and_where`, `or_where` and `where_not`.
///
/// - any expression node, `Vec<Expr>` or a whole [`Where`];
/// - `(column, value)`: `column = value`, or `column IN (...)` for a list;
/// - `(column, op, value)` with `op` as a string or an [`Operator`].
pub trait IntoCondition {
    fn into_condition(self) -> ClauseResult<Vec<Expr>>;
}

impl IntoCondition for Expr {
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        Ok(vec![self])
    }
}

impl IntoCondition for Vec<Expr> {
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        Ok(self)
    }
}

impl IntoCondition for Where {
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        Ok(self.exprs)
    }
}

macro_rules! node_into_condition {
    ($($node:ty),* $(,)?) => {
        $(
            impl IntoCondition for $node {
                fn into_condition(self) -> ClauseResult<Vec<Expr>> {
                    Ok(vec![Expr::from(self)])
                }
            }
        )*
    };
}

node_into_condition!(Eq, Neq, Gt, Gte, Lt, Lte, Like, In, AndExpr, OrExpr, NotExpr);

impl<C, V> IntoCondition for (C, V)
where
    C: Into<String>,
    V: Into<Value>,
{
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        let (column, value) = self;
        let expr = match value.into() {
            Value::List(values) => In {
                column: column.into(),
                values,
            }
            .into(),
            value => Eq::new(column, value).into(),
        };
        Ok(vec![expr])
    }
}

impl<C, V> IntoCondition for (C, &str, V)
where
    C: Into<String>,
    V: Into<Value>,
{
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        let (column, op, value) = self;
        let op: Operator = op.parse()?;
        Ok(vec![op.apply(column, value)?])
    }
}

impl<C, V> IntoCondition for (C, Operator, V)
where
    C: Into<String>,
    V: Into<Value>,
{
    fn into_condition(self) -> ClauseResult<Vec<Expr>> {
        let (column, op, value) = self;
        Ok(vec![op.apply(column, value)?])
    }
}
