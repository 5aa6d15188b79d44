//! Example: turning optional list filters into a parameterized query.
//!
//! Run with:
//!   cargo run --example filters -p sqlclause
//!
//! Optional dialect override (JSON):
//!   SQLCLAUSE_DIALECT='{"quote":"backtick","placeholder":"question"}'

use sqlclause::clause::{self, Expr, Where};
use sqlclause::query::{self, Statement, WhereBuilder};
use sqlclause::{Build, ClauseResult, Dialect};
use std::env;

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    roles_any_of: Vec<String>,
    exclude_ids: Vec<i64>,
    min_age: Option<i32>,
    page: i64,
    per_page: i64,
    sort_by: Option<String>,
}

fn dialect_from_env() -> Dialect {
    env::var("SQLCLAUSE_DIALECT")
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_else(Dialect::postgres)
}

fn build_filter(filters: &Filters) -> Where {
    let mut filter = Where::new();

    if let Some(status) = &filters.status {
        filter.push(Expr::eq("status", status.as_str()));
    }
    if let Some(search) = &filters.search {
        filter.push(Expr::like("name", format!("%{search}%")));
    }
    let roles: Vec<Expr> = filters
        .roles_any_of
        .iter()
        .map(|role| Expr::eq("role", role.as_str()))
        .collect();
    if let Some(roles) = clause::or(roles) {
        filter.push(roles);
    }
    if !filters.exclude_ids.is_empty() {
        let ids = Expr::in_list("id", filters.exclude_ids.iter().copied());
        if let Some(excluded) = clause::not(vec![ids]) {
            filter.push(excluded);
        }
    }
    if let Some(min_age) = filters.min_age {
        filter.push(Expr::gte("age", min_age));
    }

    filter
}

fn list_users(filters: &Filters, dialect: Dialect) -> ClauseResult<sqlclause::BuiltQuery> {
    query::table("users")
        .and_where(build_filter(filters))
        .order_by(filters.sort_by.as_deref().unwrap_or("created_at desc"))
        .paginate(filters.page, filters.per_page)
        .select(["id", "name", "status", "role", "created_at"])
        .to_sql(dialect)
}

fn main() -> ClauseResult<()> {
    let dialect = dialect_from_env();
    println!("dialect: {dialect:?}\n");

    let filters = Filters {
        status: Some("active".into()),
        search: Some("ali".into()),
        roles_any_of: vec!["admin".into(), "owner".into()],
        exclude_ids: vec![3, 7],
        min_age: Some(18),
        page: 2,
        per_page: 20,
        sort_by: Some("name asc, id desc".into()),
    };

    let built = list_users(&filters, dialect)?;
    println!("list users:\n  {}\n  params = {:?}\n", built.sql, built.params);

    // A bare clause rendered on its own.
    let filter = WhereBuilder::new()
        .and_where(("deleted_at", Option::<i64>::None))
        .where_not_group(|g| g.and_where(("role", "guest")).and_where(("age", "<", 13)))
        .into_where()?;
    let built = filter.render(dialect)?;
    println!("bare WHERE:\n  {}\n  params = {:?}\n", built.sql, built.params);

    let built = query::table("users")
        .and_where(("id", 42))
        .update_values([("status", "inactive"), ("role", "member")])
        .to_sql(dialect)?;
    println!("update:\n  {}\n  params = {:?}\n", built.sql, built.params);

    // LIKE needs a string; the error comes back from to_sql.
    match query::table("users")
        .and_where(("name", "LIKE", 5))
        .select(["id"])
        .to_sql(dialect)
    {
        Ok(built) => println!("unexpected: {}", built.sql),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
