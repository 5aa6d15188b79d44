//! Standalone WHERE accumulator, also used for closure groups.

use crate::clause::{Expr, Where, and, not, or};
use crate::error::ClauseError;
use crate::query::condition::IntoCondition;

/// How a batch of conditions is attached to the clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Attach {
    And,
    Or,
    Not,
}

/// Accumulates conditions into a [`Where`].
///
/// Conversion errors do not abort the chain; the first one is kept and
/// surfaces from [`WhereBuilder::error`] or when a statement is rendered.
///
/// # Example
/// ```ignore
/// let w = WhereBuilder::new()
///     .and_where(("status", "active"))
///     .or_where_group(|g| g.and_where(("role", "admin")).and_where(("age", ">", 30)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereBuilder {
    where_clause: Where,
    error: Option<ClauseError>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add conditions joined with AND.
    pub fn and_where(mut self, cond: impl IntoCondition) -> Self {
        self.attach(Attach::And, cond);
        self
    }

    /// Add conditions as an OR branch.
    pub fn or_where(mut self, cond: impl IntoCondition) -> Self {
        self.attach(Attach::Or, cond);
        self
    }

    /// Add negated conditions.
    pub fn where_not(mut self, cond: impl IntoCondition) -> Self {
        self.attach(Attach::Not, cond);
        self
    }

    /// Add a nested group joined with AND.
    pub fn and_where_group<F>(mut self, group: F) -> Self
    where
        F: FnOnce(WhereBuilder) -> WhereBuilder,
    {
        self.attach_group(Attach::And, group);
        self
    }

    /// Add a nested group as an OR branch.
    pub fn or_where_group<F>(mut self, group: F) -> Self
    where
        F: FnOnce(WhereBuilder) -> WhereBuilder,
    {
        self.attach_group(Attach::Or, group);
        self
    }

    /// Add a negated nested group.
    pub fn where_not_group<F>(mut self, group: F) -> Self
    where
        F: FnOnce(WhereBuilder) -> WhereBuilder,
    {
        self.attach_group(Attach::Not, group);
        self
    }

    pub fn where_clause(&self) -> &Where {
        &self.where_clause
    }

    pub fn error(&self) -> Option<&ClauseError> {
        self.error.as_ref()
    }

    /// Take the clause, failing with the first recorded error.
    pub fn into_where(self) -> Result<Where, ClauseError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.where_clause),
        }
    }

    pub(crate) fn attach(&mut self, attach: Attach, cond: impl IntoCondition) {
        match cond.into_condition() {
            Ok(exprs) => self.attach_exprs(attach, exprs),
            Err(err) => self.record(err),
        }
    }

    pub(crate) fn attach_group<F>(&mut self, attach: Attach, group: F)
    where
        F: FnOnce(WhereBuilder) -> WhereBuilder,
    {
        let inner = group(WhereBuilder::new());
        if let Some(err) = inner.error {
            self.record(err);
            return;
        }
        // Wrapping in AND parenthesizes groups with more than one condition.
        let grouped: Vec<Expr> = and(inner.where_clause.exprs).into_iter().collect();
        self.attach_exprs(attach, grouped);
    }

    pub(crate) fn record(&mut self, err: ClauseError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn attach_exprs(&mut self, attach: Attach, exprs: Vec<Expr>) {
        let expr = match attach {
            Attach::And => {
                self.where_clause.merge(Where::from(exprs));
                return;
            }
            Attach::Or => or(exprs),
            Attach::Not => not(exprs),
        };
        if let Some(expr) = expr {
            self.where_clause.push(expr);
        }
    }
}

impl From<WhereBuilder> for Where {
    fn from(builder: WhereBuilder) -> Self {
        builder.where_clause
    }
}

impl IntoCondition for WhereBuilder {
    fn into_condition(self) -> crate::error::ClauseResult<Vec<Expr>> {
        self.into_where().map(|w| w.exprs)
    }
}
