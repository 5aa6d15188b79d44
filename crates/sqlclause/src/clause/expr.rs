//! Expression nodes for WHERE conditions.
//!
//! Leaves ([`Eq`], [`Neq`], [`Gt`], [`Gte`], [`Lt`], [`Lte`], [`Like`], [`In`])
//! compare one column with bound values. Combinators ([`AndExpr`], [`OrExpr`],
//! [`NotExpr`]) live in the `where_clause` module. All of them are wrapped by
//! the closed [`Expr`] enum.
//!
//! Leaves that can render their own inverse without a textual `NOT` implement
//! [`NegationBuild`]; [`Expr::as_negation`] is the single place that lists them.

use crate::builder::{Build, Builder};
use crate::clause::where_clause::{AndExpr, NotExpr, OrExpr};
use crate::error::ClauseError;
use crate::value::Value;

/// Render the logical inverse of an expression without emitting `NOT`.
pub trait NegationBuild {
    fn negation_build(&self, builder: &mut dyn Builder);
}

macro_rules! leaf {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub column: String,
            pub value: Value,
        }

        impl $name {
            pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
                Self {
                    column: column.into(),
                    value: value.into(),
                }
            }
        }

        impl From<$name> for Expr {
            fn from(leaf: $name) -> Self {
                Expr::$name(leaf)
            }
        }
    };
}

leaf!(
    /// `column = value`, `column IS NULL`, or `column IN (...)` for lists.
    Eq
);
leaf!(
    /// `column <> value`, `column IS NOT NULL`, or `column NOT IN (...)` for lists.
    Neq
);
leaf!(
    /// `column > value`
    Gt
);
leaf!(
    /// `column >= value`
    Gte
);
leaf!(
    /// `column < value`
    Lt
);
leaf!(
    /// `column <= value`
    Lte
);
leaf!(
    /// `column LIKE value`. The value must be text when rendered.
    Like
);

/// `column IN (values...)`.
///
/// An empty list renders `IN (NULL)`, which matches nothing. A single scalar
/// collapses to `column = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    pub column: String,
    pub values: Vec<Value>,
}

impl In {
    pub fn new<T: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<In> for Expr {
    fn from(leaf: In) -> Self {
        Expr::In(leaf)
    }
}

/// Expression node for building WHERE clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Eq(Eq),
    Neq(Neq),
    Gt(Gt),
    Gte(Gte),
    Lt(Lt),
    Lte(Lte),
    Like(Like),
    In(In),
    And(AndExpr),
    Or(OrExpr),
    Not(NotExpr),
}

impl Expr {
    /// Create an equality condition: column = value
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Eq::new(column, value).into()
    }

    /// Create an inequality condition: column <> value
    pub fn neq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Neq::new(column, value).into()
    }

    /// Create a greater-than condition: column > value
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Gt::new(column, value).into()
    }

    /// Create a greater-than-or-equal condition: column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Gte::new(column, value).into()
    }

    /// Create a less-than condition: column < value
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Lt::new(column, value).into()
    }

    /// Create a less-than-or-equal condition: column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Lte::new(column, value).into()
    }

    /// Create a LIKE condition: column LIKE pattern
    pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Like::new(column, pattern).into()
    }

    /// Create an IN condition: column IN (values...)
    pub fn in_list<T: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        In::new(column, values).into()
    }

    /// The negation capability of this node, if it has one.
    ///
    /// Leaves answer `Some`; `And`/`Or`/`Not` answer `None`.
    pub fn as_negation(&self) -> Option<&dyn NegationBuild> {
        match self {
            Expr::Eq(e) => Some(e),
            Expr::Neq(e) => Some(e),
            Expr::Gt(e) => Some(e),
            Expr::Gte(e) => Some(e),
            Expr::Lt(e) => Some(e),
            Expr::Lte(e) => Some(e),
            Expr::Like(e) => Some(e),
            Expr::In(e) => Some(e),
            Expr::And(_) | Expr::Or(_) | Expr::Not(_) => None,
        }
    }

    /// Whether this node is a leaf (no child expressions).
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Expr::And(_) | Expr::Or(_) | Expr::Not(_))
    }
}

impl Build for Expr {
    fn build(&self, builder: &mut dyn Builder) {
        match self {
            Expr::Eq(e) => e.build(builder),
            Expr::Neq(e) => e.build(builder),
            Expr::Gt(e) => e.build(builder),
            Expr::Gte(e) => e.build(builder),
            Expr::Lt(e) => e.build(builder),
            Expr::Lte(e) => e.build(builder),
            Expr::Like(e) => e.build(builder),
            Expr::In(e) => e.build(builder),
            Expr::And(e) => e.build(builder),
            Expr::Or(e) => e.build(builder),
            Expr::Not(e) => e.build(builder),
        }
    }
}

// ─── Leaf rendering ─────────────────────────────────────────────────────────

/// Shared body of Eq/Neq: NULL and list values change the operator.
fn build_equality(builder: &mut dyn Builder, column: &str, value: &Value, negated: bool) {
    builder.write_quoted(column);
    match value {
        Value::Null => builder.write_str(if negated { " IS NOT NULL" } else { " IS NULL" }),
        Value::List(values) => {
            builder.write_str(if negated { " NOT IN (" } else { " IN (" });
            if values.is_empty() {
                builder.write_str("NULL");
            } else {
                builder.add_vars(values);
            }
            builder.write_char(')');
        }
        value => {
            builder.write_str(if negated { " <> " } else { " = " });
            builder.add_var(value);
        }
    }
}

fn build_comparison(builder: &mut dyn Builder, column: &str, op: &str, value: &Value) {
    builder.write_quoted(column);
    builder.write_str(op);
    builder.add_var(value);
}

impl Build for Eq {
    fn build(&self, builder: &mut dyn Builder) {
        build_equality(builder, &self.column, &self.value, false);
    }
}

impl NegationBuild for Eq {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_equality(builder, &self.column, &self.value, true);
    }
}

impl Build for Neq {
    fn build(&self, builder: &mut dyn Builder) {
        build_equality(builder, &self.column, &self.value, true);
    }
}

impl NegationBuild for Neq {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_equality(builder, &self.column, &self.value, false);
    }
}

impl Build for Gt {
    fn build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " > ", &self.value);
    }
}

impl NegationBuild for Gt {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " <= ", &self.value);
    }
}

impl Build for Gte {
    fn build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " >= ", &self.value);
    }
}

impl NegationBuild for Gte {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " < ", &self.value);
    }
}

impl Build for Lt {
    fn build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " < ", &self.value);
    }
}

impl NegationBuild for Lt {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " >= ", &self.value);
    }
}

impl Build for Lte {
    fn build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " <= ", &self.value);
    }
}

impl NegationBuild for Lte {
    fn negation_build(&self, builder: &mut dyn Builder) {
        build_comparison(builder, &self.column, " > ", &self.value);
    }
}

impl Like {
    fn build_with(&self, builder: &mut dyn Builder, op: &str) {
        builder.write_quoted(&self.column);
        builder.write_str(op);
        match &self.value {
            Value::Text(_) => builder.add_var(&self.value),
            other => builder.add_error(ClauseError::LikeValueNotString {
                column: self.column.clone(),
                found: other.kind(),
            }),
        }
    }
}

impl Build for Like {
    fn build(&self, builder: &mut dyn Builder) {
        self.build_with(builder, " LIKE ");
    }
}

impl NegationBuild for Like {
    fn negation_build(&self, builder: &mut dyn Builder) {
        self.build_with(builder, " NOT LIKE ");
    }
}

impl In {
    fn build_with(&self, builder: &mut dyn Builder, negated: bool) {
        builder.write_quoted(&self.column);
        match self.values.as_slice() {
            [] => builder.write_str(if negated { " IS NOT NULL" } else { " IN (NULL)" }),
            [single] if !single.is_list() => {
                builder.write_str(if negated { " <> " } else { " = " });
                builder.add_var(single);
            }
            values => {
                builder.write_str(if negated { " NOT IN (" } else { " IN (" });
                builder.add_vars(values);
                builder.write_char(')');
            }
        }
    }
}

impl Build for In {
    fn build(&self, builder: &mut dyn Builder) {
        self.build_with(builder, false);
    }
}

impl NegationBuild for In {
    fn negation_build(&self, builder: &mut dyn Builder) {
        self.build_with(builder, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Dialect, PlaceholderStyle, SqlBuilder};

    fn render(f: impl FnOnce(&mut dyn Builder)) -> (String, Vec<Value>) {
        let mut b = SqlBuilder::new(Dialect::mysql().placeholder(PlaceholderStyle::Dollar));
        f(&mut b);
        (b.sql().to_string(), b.params().to_vec())
    }

    #[test]
    fn test_eq_scalar_null_and_list() {
        let (sql, params) = render(|b| Eq::new("name", "test").build(b));
        assert_eq!(sql, "`name` = $1");
        assert_eq!(params, vec![Value::from("test")]);

        let (sql, params) = render(|b| Eq::new("email", Value::Null).build(b));
        assert_eq!(sql, "`email` IS NULL");
        assert!(params.is_empty());

        let (sql, params) = render(|b| Eq::new("id", vec![1, 2, 3]).build(b));
        assert_eq!(sql, "`id` IN ($1,$2,$3)");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_eq_empty_list() {
        let (sql, params) = render(|b| Eq::new("id", Vec::<i32>::new()).build(b));
        assert_eq!(sql, "`id` IN (NULL)");
        assert!(params.is_empty());

        let (sql, _) = render(|b| Neq::new("id", Vec::<i32>::new()).build(b));
        assert_eq!(sql, "`id` NOT IN (NULL)");
    }

    #[test]
    fn test_neq_variants() {
        let (sql, _) = render(|b| Neq::new("age", 18).build(b));
        assert_eq!(sql, "`age` <> $1");

        let (sql, params) = render(|b| Neq::new("email", Option::<String>::None).build(b));
        assert_eq!(sql, "`email` IS NOT NULL");
        assert!(params.is_empty());

        let (sql, _) = render(|b| Neq::new("id", vec!["a", "b"]).build(b));
        assert_eq!(sql, "`id` NOT IN ($1,$2)");
    }

    #[test]
    fn test_comparisons() {
        let cases: Vec<(Expr, &str)> = vec![
            (Expr::gt("age", 18), "`age` > $1"),
            (Expr::gte("age", 18), "`age` >= $1"),
            (Expr::lt("age", 30), "`age` < $1"),
            (Expr::lte("age", 30), "`age` <= $1"),
            (Expr::like("name", "%test%"), "`name` LIKE $1"),
        ];
        for (expr, expected) in cases {
            let (sql, params) = render(|b| expr.build(b));
            assert_eq!(sql, expected);
            assert_eq!(params.len(), 1);
        }
    }

    #[test]
    fn test_comparison_null_is_bound() {
        let (sql, params) = render(|b| Gt::new("age", Value::Null).build(b));
        assert_eq!(sql, "`age` > $1");
        assert_eq!(params, vec![Value::Null]);
    }

    #[test]
    fn test_negation_inverts_operator() {
        let pairs: Vec<(Expr, Expr)> = vec![
            (Expr::gt("a", 1), Expr::lte("a", 1)),
            (Expr::gte("a", 1), Expr::lt("a", 1)),
            (Expr::lt("a", 1), Expr::gte("a", 1)),
            (Expr::lte("a", 1), Expr::gt("a", 1)),
            (Expr::eq("a", 1), Expr::neq("a", 1)),
            (Expr::neq("a", 1), Expr::eq("a", 1)),
        ];
        for (expr, inverse) in pairs {
            let negated = render(|b| expr.as_negation().unwrap().negation_build(b));
            let plain = render(|b| inverse.build(b));
            assert_eq!(negated, plain);
        }
    }

    #[test]
    fn test_in_shapes() {
        let (sql, params) = render(|b| In::new("id", [1, 2, 3]).build(b));
        assert_eq!(sql, "`id` IN ($1,$2,$3)");
        assert_eq!(params.len(), 3);

        let (sql, _) = render(|b| In::new("id", [1]).build(b));
        assert_eq!(sql, "`id` = $1");

        let (sql, params) = render(|b| In::new("id", Vec::<i32>::new()).build(b));
        assert_eq!(sql, "`id` IN (NULL)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_in_negation_shapes() {
        let (sql, _) = render(|b| In::new("id", [1, 2, 3]).negation_build(b));
        assert_eq!(sql, "`id` NOT IN ($1,$2,$3)");

        let (sql, _) = render(|b| In::new("id", [1]).negation_build(b));
        assert_eq!(sql, "`id` <> $1");

        let (sql, params) = render(|b| In::new("id", Vec::<i32>::new()).negation_build(b));
        assert_eq!(sql, "`id` IS NOT NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_in_single_scalar_matches_eq() {
        assert_eq!(
            render(|b| In::new("id", [7]).build(b)),
            render(|b| Eq::new("id", 7).build(b))
        );
        assert_eq!(
            render(|b| In::new("id", [7]).negation_build(b)),
            render(|b| Neq::new("id", 7).build(b))
        );
    }

    #[test]
    fn test_in_single_nested_list_stays_in() {
        let (sql, params) = render(|b| In::new("id", [vec![1, 2]]).build(b));
        assert_eq!(sql, "`id` IN ($1)");
        assert_eq!(params, vec![Value::list([1, 2])]);
    }

    #[test]
    fn test_like_negation_uses_not_like() {
        let (sql, params) = render(|b| Like::new("name", "J%").negation_build(b));
        assert_eq!(sql, "`name` NOT LIKE $1");
        assert_eq!(params, vec![Value::from("J%")]);
    }

    #[test]
    fn test_like_requires_text() {
        let mut b = SqlBuilder::new(Dialect::postgres());
        Like::new("age", 18).build(&mut b);
        assert!(b.params().is_empty());
        assert_eq!(
            b.error(),
            Some(&ClauseError::LikeValueNotString {
                column: "age".into(),
                found: "int",
            })
        );
    }

    #[test]
    fn test_capability_list() {
        assert!(Expr::like("a", "x").as_negation().is_some());
        assert!(Expr::in_list("a", [1]).as_negation().is_some());
        assert!(Expr::eq("a", 1).is_leaf());
    }
}
