/// Generate the WHERE-building methods for a type that holds a
/// [`WhereBuilder`](crate::query::WhereBuilder) in field `$field`.
///
/// Usage:
/// ```ignore
/// impl SelectQuery {
///     impl_where_methods!(filter);
/// }
/// ```
macro_rules! impl_where_methods {
    ($field:ident) => {
        /// Add conditions joined to the existing ones with AND.
        pub fn and_where(mut self, cond: impl $crate::query::IntoCondition) -> Self {
            self.$field.attach($crate::query::where_builder::Attach::And, cond);
            self
        }

        /// Add conditions as an OR branch: `... OR cond`.
        pub fn or_where(mut self, cond: impl $crate::query::IntoCondition) -> Self {
            self.$field.attach($crate::query::where_builder::Attach::Or, cond);
            self
        }

        /// Add negated conditions.
        pub fn where_not(mut self, cond: impl $crate::query::IntoCondition) -> Self {
            self.$field.attach($crate::query::where_builder::Attach::Not, cond);
            self
        }

        /// Add a parenthesized group built by `group`, joined with AND.
        pub fn and_where_group<F>(mut self, group: F) -> Self
        where
            F: FnOnce($crate::query::WhereBuilder) -> $crate::query::WhereBuilder,
        {
            self.$field.attach_group($crate::query::where_builder::Attach::And, group);
            self
        }

        /// Add a group built by `group` as an OR branch.
        pub fn or_where_group<F>(mut self, group: F) -> Self
        where
            F: FnOnce($crate::query::WhereBuilder) -> $crate::query::WhereBuilder,
        {
            self.$field.attach_group($crate::query::where_builder::Attach::Or, group);
            self
        }

        /// Add a negated group built by `group`.
        pub fn where_not_group<F>(mut self, group: F) -> Self
        where
            F: FnOnce($crate::query::WhereBuilder) -> $crate::query::WhereBuilder,
        {
            self.$field.attach_group($crate::query::where_builder::Attach::Not, group);
            self
        }

        /// The accumulated WHERE clause.
        pub fn where_clause(&self) -> &$crate::clause::Where {
            self.$field.where_clause()
        }

        /// The first error recorded while adding conditions.
        pub fn error(&self) -> Option<&$crate::error::ClauseError> {
            self.$field.error()
        }
    };
}

/// Generate ORDER BY methods for a type with an
/// [`OrderBys`](crate::clause::OrderBys) field `$field`.
macro_rules! impl_order_methods {
    ($field:ident) => {
        /// Append sort keys from `"col [asc|desc], ..."`.
        pub fn order_by(mut self, orders: &str) -> Self {
            self.$field.extend($crate::clause::parse_order_by(orders));
            self
        }

        /// Append one sort key with an explicit direction keyword.
        pub fn order_by_dir(mut self, column: &str, direction: &str) -> Self {
            self.$field
                .push($crate::clause::order_by_with_direction(column, direction));
            self
        }

        /// Append a prebuilt sort key.
        pub fn order_by_entry(mut self, order: $crate::clause::OrderBy) -> Self {
            self.$field.push(order);
            self
        }

        /// Append several prebuilt sort keys.
        pub fn order_by_entries(
            mut self,
            orders: impl IntoIterator<Item = $crate::clause::OrderBy>,
        ) -> Self {
            self.$field.extend(orders);
            self
        }

        pub fn order_bys(&self) -> &$crate::clause::OrderBys {
            &self.$field
        }
    };
}

/// Generate LIMIT/OFFSET methods for a type with a
/// [`Pagination`](crate::clause::Pagination) field `$field`.
macro_rules! impl_pagination_methods {
    ($field:ident) => {
        /// Set LIMIT.
        pub fn limit(mut self, limit: i64) -> Self {
            self.$field = self.$field.limit(limit);
            self
        }

        /// Set OFFSET.
        pub fn offset(mut self, offset: i64) -> Self {
            self.$field = self.$field.offset(offset);
            self
        }

        /// 1-based page helper: `offset = (page - 1) * page_size`, `limit = page_size`.
        pub fn paginate(mut self, page: i64, page_size: i64) -> Self {
            self.$field = self.$field.paginate(page, page_size);
            self
        }

        pub fn pagination(&self) -> $crate::clause::Pagination {
            self.$field
        }
    };
}
