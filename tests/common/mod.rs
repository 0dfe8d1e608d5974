// common/mod.rs - Shared test utilities for database setup and teardown
//
// Every test gets its own schema so suites can run concurrently and be
// re-run after a failure:
// 1. create the schema on an admin pool
// 2. open a pool whose connections all use that schema as search_path
// 3. load the fixture tables and sample rows
// 4. drop the schema afterwards, even if the test failed

#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::env;
use std::time::Duration;

use local_directory::fixtures;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Pool whose connections resolve unqualified table names in `schema`
pub async fn create_schema_pool(schema: &str) -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let search_path = format!("SET search_path TO {}, public", schema);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Drop the schema and everything in it
pub async fn teardown_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    let query = format!("DROP SCHEMA IF EXISTS {} CASCADE", schema);
    sqlx::query(&query).execute(pool).await?;
    Ok(())
}

/// Recreate the schema, then load the fixture tables and sample rows into it
pub async fn setup_test_db(admin: &PgPool, scoped: &PgPool, schema: &str) -> anyhow::Result<()> {
    teardown_test_db(admin, schema).await?;
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(admin)
        .await?;

    for statement in fixtures::all_schema_sql() {
        sqlx::query(statement).execute(scoped).await?;
    }
    for statement in fixtures::all_sample_sql() {
        sqlx::query(statement).execute(scoped).await?;
    }

    Ok(())
}

/// Generate a unique schema name for a test
pub fn generate_test_schema_name(test_name: &str) -> String {
    // Sanitize test name to be a valid schema name (alphanumeric + underscore)
    let sanitized = test_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>();

    // PostgreSQL identifiers are limited to 63 bytes
    let truncated = if sanitized.len() > 50 { &sanitized[..50] } else { &sanitized };

    format!("test_{}", truncated)
}

/// Full setup and teardown wrapper for tests with isolated schema
///
/// The test function receives a pool already scoped to the test schema.
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let admin = create_test_pool().await?;
    let schema = generate_test_schema_name(test_name);

    // search_path may name a schema that does not exist yet
    let scoped = create_schema_pool(&schema).await?;
    setup_test_db(&admin, &scoped, &schema).await?;

    let result = test_fn(scoped.clone()).await;

    // Always cleanup, even if test fails
    scoped.close().await;
    teardown_test_db(&admin, &schema).await?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_name() {
        let name1 = generate_test_schema_name("test_foo");
        let name2 = generate_test_schema_name("Test::Bar");
        let name3 = generate_test_schema_name("a".repeat(100).as_str());

        assert_eq!(name1, "test_test_foo");
        assert_eq!(name2, "test_test__bar");
        assert!(name3.len() <= 55);
        assert!(name3.starts_with("test_"));
    }
}
