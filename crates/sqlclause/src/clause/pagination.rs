//! LIMIT / OFFSET.

use crate::builder::{Build, Builder};
use crate::value::Value;

/// Pagination parameters. Unset or non-positive halves render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: i64,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set LIMIT.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set OFFSET.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based; a non-positive `page` leaves the offset alone and a
    /// non-positive `page_size` leaves the limit alone. The offset saturates at
    /// `i64::MAX`.
    pub fn paginate(mut self, page: i64, page_size: i64) -> Self {
        if page > 0 {
            self.offset = (page - 1).saturating_mul(page_size);
        }
        if page_size > 0 {
            self.limit = Some(page_size);
        }
        self
    }

    /// The LIMIT that will actually be rendered.
    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.filter(|limit| *limit > 0)
    }
}

impl Build for Pagination {
    fn build(&self, builder: &mut dyn Builder) {
        if let Some(limit) = self.effective_limit() {
            builder.write_str(" LIMIT ");
            builder.add_var(&Value::Int(limit));
        }
        if self.offset > 0 {
            builder.write_str(" OFFSET ");
            builder.add_var(&Value::Int(self.offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Dialect;

    #[test]
    fn test_limit_and_offset() {
        let built = Pagination::new()
            .limit(10)
            .offset(20)
            .render(Dialect::sqlite())
            .unwrap();
        assert_eq!(built.sql, " LIMIT ?1 OFFSET ?2");
        assert_eq!(built.params, vec![Value::Int(10), Value::Int(20)]);
    }

    #[test]
    fn test_unset_renders_nothing() {
        let built = Pagination::new().render(Dialect::postgres()).unwrap();
        assert_eq!(built.sql, "");
        assert!(built.params.is_empty());
    }

    #[test]
    fn test_halves_are_independent() {
        let built = Pagination::new().offset(5).render(Dialect::postgres()).unwrap();
        assert_eq!(built.sql, " OFFSET $1");

        let built = Pagination::new().limit(0).offset(0).render(Dialect::postgres()).unwrap();
        assert_eq!(built.sql, "");
    }

    #[test]
    fn test_paginate() {
        let p = Pagination::new().paginate(3, 25);
        assert_eq!(p.limit, Some(25));
        assert_eq!(p.offset, 50);

        let p = Pagination::new().paginate(0, 0);
        assert_eq!(p, Pagination::new());
    }

    #[test]
    fn test_paginate_large_page_saturates() {
        let built = Pagination::new()
            .paginate(i64::MAX / 2, 10)
            .render(Dialect::postgres())
            .unwrap();
        assert_eq!(built.sql, " LIMIT $1 OFFSET $2");
        assert_eq!(built.params, vec![Value::Int(10), Value::Int(i64::MAX)]);
    }
}
