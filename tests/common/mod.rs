use sqlx::SqlitePool;
use trivia_api::db;

/// Fresh in-memory database with the schema and the seed data applied.
pub async fn create_test_db() -> SqlitePool {
    let pool = db::establish_in_memory()
        .await
        .expect("failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Adds a category under the next free id.
#[allow(dead_code)]
pub async fn create_category(pool: &SqlitePool, kind: &str) -> i64 {
    sqlx::query(r#"INSERT INTO categories ("type") VALUES (?1)"#)
        .bind(kind)
        .execute(pool)
        .await
        .expect("failed to insert category")
        .last_insert_rowid()
}
