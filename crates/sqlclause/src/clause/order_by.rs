//! ORDER BY entries and the order-by string grammar.
//!
//! Accepted string forms:
//! - `"name"` (ascending)
//! - `("name", "desc")` (explicit direction, see [`order_by_with_direction`])
//! - `"age desc, created_at, name asc"` (comma-separated fragments)
//!
//! Direction keywords are case-insensitive; anything other than `desc`
//! means ascending.

use std::str::FromStr;

use crate::builder::{Build, Builder};
use crate::error::ClauseError;

/// A single sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBy {
    pub column: String,
    pub desc: bool,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, desc: bool) -> Self {
        Self {
            column: column.into(),
            desc,
        }
    }

    /// `column ASC`
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, false)
    }

    /// `column DESC`
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, true)
    }
}

/// Strict single-key parse: `"col"`, `"col asc"` or `"col desc"`.
///
/// Unlike [`parse_order_by`], an unknown direction or trailing tokens are
/// rejected with [`ClauseError::InvalidOrderBy`].
impl FromStr for OrderBy {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClauseError::InvalidOrderBy(s.to_string());
        let mut tokens = s.split_whitespace();
        let column = tokens.next().ok_or_else(invalid)?;
        let desc = match tokens.next() {
            None => false,
            Some(dir) if dir.eq_ignore_ascii_case("asc") => false,
            Some(dir) if dir.eq_ignore_ascii_case("desc") => true,
            Some(_) => return Err(invalid()),
        };
        if tokens.next().is_some() {
            return Err(invalid());
        }
        Ok(OrderBy::new(column, desc))
    }
}

impl Build for OrderBy {
    fn build(&self, builder: &mut dyn Builder) {
        builder.write_quoted(&self.column);
        builder.write_str(if self.desc { " DESC" } else { " ASC" });
    }
}

/// Ordered sort keys; the first entry is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderBys(pub Vec<OrderBy>);

impl OrderBys {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderBy> {
        self.0.iter()
    }

    /// Append a sort key after the existing ones.
    pub fn push(&mut self, order: OrderBy) {
        self.0.push(order);
    }

    pub fn into_inner(self) -> Vec<OrderBy> {
        self.0
    }
}

impl Extend<OrderBy> for OrderBys {
    fn extend<I: IntoIterator<Item = OrderBy>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<OrderBy> for OrderBys {
    fn from_iter<I: IntoIterator<Item = OrderBy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for OrderBys {
    type Item = OrderBy;
    type IntoIter = std::vec::IntoIter<OrderBy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderBys {
    type Item = &'a OrderBy;
    type IntoIter = std::slice::Iter<'a, OrderBy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<OrderBy>> for OrderBys {
    fn from(orders: Vec<OrderBy>) -> Self {
        Self(orders)
    }
}

impl Build for OrderBys {
    fn build(&self, builder: &mut dyn Builder) {
        if self.0.is_empty() {
            return;
        }
        builder.write_str(" ORDER BY ");
        for (idx, order) in self.0.iter().enumerate() {
            if idx > 0 {
                builder.write_str(", ");
            }
            order.build(builder);
        }
    }
}

fn is_desc(direction: &str) -> bool {
    direction.trim().eq_ignore_ascii_case("desc")
}

/// Build one entry from a column and an explicit direction keyword.
pub fn order_by_with_direction(column: &str, direction: &str) -> OrderBy {
    OrderBy::new(column, is_desc(direction))
}

/// Parse `"a desc, b, c asc"` into sort keys, skipping empty fragments.
pub fn parse_order_by(input: &str) -> OrderBys {
    input
        .split(',')
        .filter_map(|fragment| {
            let mut tokens = fragment.split_whitespace();
            let column = tokens.next()?;
            let desc = tokens.next().is_some_and(is_desc);
            Some(OrderBy::new(column, desc))
        })
        .collect()
}
