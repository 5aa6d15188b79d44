//! The output sink every clause renders into.
//!
//! [`Builder`] is the only boundary between the expression tree and SQL text:
//! nodes write raw keywords with [`Builder::write_str`], column names with
//! [`Builder::write_quoted`] and values with [`Builder::add_var`]. The sink
//! decides what a quoted identifier and a placeholder look like, so the same
//! tree renders as `"a" = $1` for Postgres or `` `a` = ? `` for MySQL.
//!
//! [`SqlBuilder`] is the stock implementation, configured by a [`Dialect`].

use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use tokio_postgres::types::ToSql;

/// Output target for clause rendering.
pub trait Builder {
    /// Append raw SQL text.
    fn write_str(&mut self, s: &str);

    /// Append a single raw character.
    fn write_char(&mut self, c: char);

    /// Append an identifier (column/table), quoted the way the sink wants.
    fn write_quoted(&mut self, ident: &str);

    /// Register a parameter value and write its placeholder.
    fn add_var(&mut self, value: &Value);

    /// Register several values, writing their placeholders separated by `,`.
    fn add_vars(&mut self, values: &[Value]) {
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                self.write_char(',');
            }
            self.add_var(value);
        }
    }

    /// Report a rendering error. Rendering carries on after this call.
    fn add_error(&mut self, err: ClauseError);

    /// The first error reported to this sink, if any.
    fn error(&self) -> Option<&ClauseError>;
}

/// Anything that renders itself into a [`Builder`].
pub trait Build {
    /// Write this node's SQL and parameters into `builder`.
    fn build(&self, builder: &mut dyn Builder);

    /// Render standalone with a fresh [`SqlBuilder`].
    fn render(&self, dialect: Dialect) -> ClauseResult<BuiltQuery> {
        let mut builder = SqlBuilder::new(dialect);
        self.build(&mut builder);
        builder.finish()
    }
}

/// How identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// `"ident"` (ANSI, Postgres, SQLite)
    #[default]
    Double,
    /// `` `ident` `` (MySQL)
    Backtick,
    /// `[ident]` (SQL Server)
    Bracket,
    /// Identifiers are written verbatim.
    None,
}

/// How parameter placeholders are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `$1, $2, ...`
    #[default]
    Dollar,
    /// `?, ?, ...`
    Question,
    /// `?1, ?2, ...`
    NumberedQuestion,
    /// `@p1, @p2, ...`
    AtP,
}

/// Rendering configuration for [`SqlBuilder`].
///
/// # Example
/// ```ignore
/// let dialect = Dialect::postgres().quote(QuoteStyle::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub quote: QuoteStyle,
    pub placeholder: PlaceholderStyle,
}

impl Dialect {
    /// `"ident"` and `$n`.
    pub fn postgres() -> Self {
        Self {
            quote: QuoteStyle::Double,
            placeholder: PlaceholderStyle::Dollar,
        }
    }

    /// `` `ident` `` and `?`.
    pub fn mysql() -> Self {
        Self {
            quote: QuoteStyle::Backtick,
            placeholder: PlaceholderStyle::Question,
        }
    }

    /// `"ident"` and `?n`.
    pub fn sqlite() -> Self {
        Self {
            quote: QuoteStyle::Double,
            placeholder: PlaceholderStyle::NumberedQuestion,
        }
    }

    /// Override the quoting style.
    pub fn quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }

    /// Override the placeholder style.
    pub fn placeholder(mut self, placeholder: PlaceholderStyle) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Write `ident` quoted into `out`.
    ///
    /// Dotted names are quoted per segment (`a.b` -> `"a"."b"`), `*` is left
    /// bare, and an embedded closing quote is doubled.
    pub fn write_ident(&self, ident: &str, out: &mut String) {
        let (open, close) = match self.quote {
            QuoteStyle::Double => ('"', '"'),
            QuoteStyle::Backtick => ('`', '`'),
            QuoteStyle::Bracket => ('[', ']'),
            QuoteStyle::None => {
                out.push_str(ident);
                return;
            }
        };

        for (idx, part) in ident.split('.').enumerate() {
            if idx > 0 {
                out.push('.');
            }
            if part == "*" {
                out.push('*');
                continue;
            }
            out.push(open);
            for ch in part.chars() {
                if ch == close {
                    out.push(close);
                }
                out.push(ch);
            }
            out.push(close);
        }
    }

    /// Write the placeholder for the `idx`-th (1-based) parameter.
    pub fn write_placeholder(&self, idx: usize, out: &mut String) {
        match self.placeholder {
            PlaceholderStyle::Dollar => out.push_str(&format!("${idx}")),
            PlaceholderStyle::Question => out.push('?'),
            PlaceholderStyle::NumberedQuestion => out.push_str(&format!("?{idx}")),
            PlaceholderStyle::AtP => out.push_str(&format!("@p{idx}")),
        }
    }
}

/// The result of rendering a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }
}

/// A [`Builder`] that accumulates SQL text and parameters in memory.
///
/// Every reported error is kept; [`Builder::error`] returns the first one and
/// [`SqlBuilder::finish`] fails with it.
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    dialect: Dialect,
    sql: String,
    params: Vec<Value>,
    errors: Vec<ClauseError>,
}

impl SqlBuilder {
    /// Create an empty builder for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            params: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// The dialect this builder renders with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// SQL rendered so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters registered so far, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Every error reported so far, in order.
    pub fn errors(&self) -> &[ClauseError] {
        &self.errors
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    /// Consume the builder, failing with the first reported error.
    pub fn finish(self) -> ClauseResult<BuiltQuery> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(BuiltQuery::new(self.sql, self.params)),
        }
    }
}

impl Builder for SqlBuilder {
    fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.sql.push(c);
    }

    fn write_quoted(&mut self, ident: &str) {
        self.dialect.write_ident(ident, &mut self.sql);
    }

    fn add_var(&mut self, value: &Value) {
        self.params.push(value.clone());
        self.dialect.write_placeholder(self.params.len(), &mut self.sql);
    }

    fn add_error(&mut self, err: ClauseError) {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "sqlclause.render", error = %err, "clause render error");
        self.errors.push(err);
    }

    fn error(&self) -> Option<&ClauseError> {
        self.errors.first()
    }
}
