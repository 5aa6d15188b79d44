//! Rendering through a caller-supplied `Builder`.

use sqlclause::clause::{Expr, OrderBy, OrderBys, Pagination, Where, and, not, or};
use sqlclause::query::{self, Statement};
use sqlclause::{Build, Builder, ClauseError, Dialect, Value};

/// Oracle-style sink: bare identifiers, `:n` placeholders.
#[derive(Default)]
struct ColonBuilder {
    sql: String,
    vars: Vec<Value>,
    idents: Vec<String>,
    errors: Vec<ClauseError>,
}

impl Builder for ColonBuilder {
    fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.sql.push(c);
    }

    fn write_quoted(&mut self, ident: &str) {
        self.idents.push(ident.to_string());
        self.sql.push_str(ident);
    }

    fn add_var(&mut self, value: &Value) {
        self.vars.push(value.clone());
        self.sql.push_str(&format!(":{}", self.vars.len()));
    }

    fn add_error(&mut self, err: ClauseError) {
        self.errors.push(err);
    }

    fn error(&self) -> Option<&ClauseError> {
        self.errors.first()
    }
}

#[test]
fn where_renders_into_custom_sink() {
    let filter = Where::from(vec![
        Expr::eq("name", "test"),
        or(vec![Expr::gt("age", 18)]).unwrap(),
        not(vec![Expr::in_list("id", [1, 2, 3])]).unwrap(),
    ]);

    let mut b = ColonBuilder::default();
    filter.build(&mut b);

    assert_eq!(b.sql, " WHERE name = :1 OR age > :2 AND id NOT IN (:3,:4,:5)");
    assert_eq!(b.vars.len(), 5);
    assert_eq!(b.idents, vec!["name", "age", "id"]);
    assert!(b.error().is_none());
}

#[test]
fn default_add_vars_joins_with_comma() {
    let mut b = ColonBuilder::default();
    b.add_vars(&[Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(b.sql, ":1,:2,:3");
}

#[test]
fn statement_into_custom_sink() {
    let select = query::table("users")
        .and_where(("status", "active"))
        .order_by("id desc")
        .limit(5)
        .select(["id"]);

    let mut b = ColonBuilder::default();
    select.build(&mut b);
    assert_eq!(
        b.sql,
        "SELECT id FROM users WHERE status = :1 ORDER BY id DESC LIMIT :2"
    );
}

#[test]
fn clauses_share_numbering_in_one_sink() {
    let filter = Where::from(vec![Expr::eq("a", 1)]);
    let orders = OrderBys(vec![OrderBy::desc("a")]);
    let page = Pagination::new().paginate(2, 10);

    let mut b = ColonBuilder::default();
    filter.build(&mut b);
    orders.build(&mut b);
    page.build(&mut b);

    assert_eq!(b.sql, " WHERE a = :1 ORDER BY a DESC LIMIT :2 OFFSET :3");
    assert_eq!(b.vars, vec![Value::Int(1), Value::Int(10), Value::Int(10)]);
}

#[test]
fn errors_accumulate_first_wins() {
    let filter = Where::from(vec![
        Expr::like("a", 1),
        Expr::like("b", true),
        Expr::eq("c", 3),
    ]);

    let mut b = ColonBuilder::default();
    filter.build(&mut b);

    assert_eq!(b.errors.len(), 2);
    assert!(matches!(
        b.error(),
        Some(ClauseError::LikeValueNotString { column, found: "int" }) if column == "a"
    ));
    assert_eq!(b.sql, " WHERE a LIKE  AND b LIKE  AND c = :1");
}

#[test]
fn not_and_matches_and_of_nots_for_leaves() {
    let leaves = || {
        vec![
            Expr::eq("a", 1),
            Expr::neq("b", 2),
            Expr::gt("c", 3),
            Expr::gte("d", 4),
            Expr::lt("e", 5),
            Expr::lte("f", 6),
        ]
    };

    let negated_group = not(vec![and(leaves()).unwrap()]).unwrap();
    let group_of_negations =
        and(leaves().into_iter().map(|leaf| not(vec![leaf]).unwrap()).collect()).unwrap();

    assert_eq!(
        negated_group.render(Dialect::postgres()).unwrap(),
        group_of_negations.render(Dialect::postgres()).unwrap()
    );
}

#[test]
fn placeholders_match_params() {
    let built = query::table("t")
        .and_where(("a", vec![1, 2]))
        .and_where(("b", Option::<i32>::None))
        .and_where(("c", "LIKE", "x%"))
        .where_not(("d", "IN", vec!["p", "q", "r"]))
        .paginate(4, 25)
        .select(["a"])
        .to_sql(Dialect::postgres())
        .unwrap();

    let placeholders = built.sql.matches('$').count();
    assert_eq!(placeholders, built.params.len());
    assert_eq!(built.params.len(), 2 + 1 + 3 + 2);
    assert!(built.sql.contains(r#""b" IS NULL"#));
    assert!(built.sql.contains(r#""d" NOT IN ($4,$5,$6)"#));
}
