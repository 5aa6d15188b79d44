//! Boolean combinators and the WHERE clause.
//!
//! Parenthesization rules:
//! - `AndExpr` / `OrExpr` wrap their children in `(...)` only when there is
//!   more than one child.
//! - In any sibling list the joiner before a single-child `OrExpr` is forced
//!   to `" OR "`; this is how `or_where` attaches a branch to an AND chain.
//! - `NotExpr` negates leaf children by operator inversion when it can, and
//!   falls back to a textual `NOT (...)` otherwise.

use crate::builder::{Build, Builder};
use crate::clause::expr::Expr;

pub const AND_WITH_SPACE: &str = " AND ";
pub const OR_WITH_SPACE: &str = " OR ";

/// AND group: all conditions must be true.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AndExpr {
    pub exprs: Vec<Expr>,
}

/// OR group: at least one condition must be true.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrExpr {
    pub exprs: Vec<Expr>,
}

/// NOT group: negates its children, joined with AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotExpr {
    pub exprs: Vec<Expr>,
}

/// Combine expressions with AND.
///
/// Returns `None` for an empty list and the expression itself for a single
/// non-OR child.
pub fn and(mut exprs: Vec<Expr>) -> Option<Expr> {
    match exprs.len() {
        0 => None,
        1 if !matches!(exprs[0], Expr::Or(_)) => exprs.pop(),
        _ => Some(Expr::And(AndExpr { exprs })),
    }
}

/// Combine expressions with OR. Returns `None` for an empty list.
pub fn or(exprs: Vec<Expr>) -> Option<Expr> {
    if exprs.is_empty() {
        return None;
    }
    Some(Expr::Or(OrExpr { exprs }))
}

/// Negate expressions. Returns `None` for an empty list.
///
/// A lone `AndExpr` child is unwrapped, so `not([and([a, b])])` is the same
/// node as `not([a, b])`.
pub fn not(mut exprs: Vec<Expr>) -> Option<Expr> {
    if exprs.is_empty() {
        return None;
    }
    if exprs.len() == 1 && matches!(exprs[0], Expr::And(_)) {
        if let Some(Expr::And(and)) = exprs.pop() {
            exprs = and.exprs;
        }
    }
    Some(Expr::Not(NotExpr { exprs }))
}

/// Write sibling expressions separated by `joiner`.
///
/// A single-child `OrExpr` sibling is preceded by `" OR "` instead.
pub fn build_exprs(exprs: &[Expr], builder: &mut dyn Builder, joiner: &str) {
    for (idx, expr) in exprs.iter().enumerate() {
        if idx > 0 {
            match expr {
                Expr::Or(or) if or.exprs.len() == 1 => builder.write_str(OR_WITH_SPACE),
                _ => builder.write_str(joiner),
            }
        }
        expr.build(builder);
    }
}

fn build_group(exprs: &[Expr], builder: &mut dyn Builder, joiner: &str) {
    if exprs.len() > 1 {
        builder.write_char('(');
        build_exprs(exprs, builder, joiner);
        builder.write_char(')');
    } else {
        build_exprs(exprs, builder, joiner);
    }
}

impl Build for AndExpr {
    fn build(&self, builder: &mut dyn Builder) {
        build_group(&self.exprs, builder, AND_WITH_SPACE);
    }
}

impl Build for OrExpr {
    fn build(&self, builder: &mut dyn Builder) {
        build_group(&self.exprs, builder, OR_WITH_SPACE);
    }
}

impl Build for NotExpr {
    fn build(&self, builder: &mut dyn Builder) {
        let grouped = self.exprs.len() > 1;
        let self_negating = self.exprs.iter().any(|e| e.as_negation().is_some());

        if self_negating {
            if grouped {
                builder.write_char('(');
            }
            for (idx, expr) in self.exprs.iter().enumerate() {
                if idx > 0 {
                    builder.write_str(AND_WITH_SPACE);
                }
                // Children without the capability render un-negated.
                match expr.as_negation() {
                    Some(negation) => negation.negation_build(builder),
                    None => expr.build(builder),
                }
            }
            if grouped {
                builder.write_char(')');
            }
        } else {
            builder.write_str("NOT ");
            if grouped {
                builder.write_char('(');
            }
            for (idx, expr) in self.exprs.iter().enumerate() {
                if idx > 0 {
                    match expr {
                        Expr::Or(_) => builder.write_str(OR_WITH_SPACE),
                        _ => builder.write_str(AND_WITH_SPACE),
                    }
                }
                expr.build(builder);
            }
            if grouped {
                builder.write_char(')');
            }
        }
    }
}

impl From<AndExpr> for Expr {
    fn from(e: AndExpr) -> Self {
        Expr::And(e)
    }
}

impl From<OrExpr> for Expr {
    fn from(e: OrExpr) -> Self {
        Expr::Or(e)
    }
}

impl From<NotExpr> for Expr {
    fn from(e: NotExpr) -> Self {
        Expr::Not(e)
    }
}

/// The WHERE clause: top-level expressions joined with AND.
///
/// Only [`Where::merge`] mutates it; rendering borrows immutably.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Where {
    pub exprs: Vec<Expr>,
}

impl Where {
    /// Create an empty WHERE clause.
    pub fn new() -> Self {
        Self { exprs: Vec::new() }
    }

    /// Check if the clause has no conditions.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Append `other`'s expressions after this clause's, keeping order.
    pub fn merge(&mut self, other: Where) -> &mut Self {
        self.exprs.extend(other.exprs);
        self
    }

    /// Append a single expression.
    pub fn push(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.exprs.push(expr.into());
        self
    }
}

impl From<Vec<Expr>> for Where {
    fn from(exprs: Vec<Expr>) -> Self {
        Self { exprs }
    }
}

impl FromIterator<Expr> for Where {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self {
            exprs: iter.into_iter().collect(),
        }
    }
}

impl Build for Where {
    fn build(&self, builder: &mut dyn Builder) {
        let exprs = match self.exprs.as_slice() {
            [Expr::And(and)] => and.exprs.as_slice(),
            exprs => exprs,
        };
        if exprs.is_empty() {
            return;
        }
        builder.write_str(" WHERE ");
        build_exprs(exprs, builder, AND_WITH_SPACE);
    }
}
