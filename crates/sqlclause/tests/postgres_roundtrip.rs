use sqlclause::clause::{Expr, not};
use sqlclause::query::{self, Statement};
use sqlclause::{Dialect, Value};
use tokio_postgres::NoTls;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::test]
async fn statements_roundtrip_through_tokio_postgres() -> TestResult {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping roundtrip test");
            return Ok(());
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;
    tokio::spawn(async move {
        let _ = connection.await;
    });

    client
        .batch_execute(
            "CREATE TEMP TABLE sqlclause_users (
                id INT4 PRIMARY KEY,
                name TEXT NOT NULL,
                age INT4,
                active BOOL NOT NULL DEFAULT true
            )",
        )
        .await?;

    let pg = Dialect::postgres();

    // carol has no age, so her row binds NULL for it.
    let insert = query::table("sqlclause_users")
        .insert_rows([
            vec![
                ("id", Value::from(1)),
                ("name", "alice".into()),
                ("age", Value::from(31)),
                ("active", true.into()),
            ],
            vec![
                ("id", Value::from(2)),
                ("name", "bob".into()),
                ("age", Value::from(17)),
                ("active", true.into()),
            ],
            vec![
                ("id", Value::from(3)),
                ("name", "carol".into()),
                ("active", true.into()),
            ],
            vec![
                ("id", Value::from(4)),
                ("name", "dave".into()),
                ("age", Value::from(45)),
                ("active", false.into()),
            ],
        ])
        .to_sql(pg)?;
    assert_eq!(insert.params.len(), 16);
    client.execute(&insert.sql, &insert.params_ref()).await?;

    let select = query::table("sqlclause_users")
        .and_where(("active", true))
        .and_where_group(|g| g.and_where(("age", ">=", 18)).or_where(("age", Option::<i32>::None)))
        .where_not(Expr::in_list("name", ["bob"]))
        .order_by("id desc")
        .select(["id"])
        .to_sql(pg)?;
    let ids: Vec<i32> = client
        .query(&select.sql, &select.params_ref())
        .await?
        .iter()
        .map(|row| row.get(0))
        .collect();
    assert_eq!(ids, vec![3, 1]);

    let update = query::table("sqlclause_users")
        .and_where(("name", "LIKE", "d%"))
        .update("active", true)
        .to_sql(pg)?;
    assert_eq!(client.execute(&update.sql, &update.params_ref()).await?, 1);

    let delete = query::table("sqlclause_users")
        .and_where(not(vec![Expr::gt("age", 20)]).unwrap_or_else(|| Expr::eq("id", 0)))
        .delete()
        .to_sql(pg)?;
    assert_eq!(client.execute(&delete.sql, &delete.params_ref()).await?, 1);

    let remaining = client
        .query_one("SELECT count(*) FROM sqlclause_users", &[])
        .await?;
    assert_eq!(remaining.get::<_, i64>(0), 3);

    Ok(())
}
