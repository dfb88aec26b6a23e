use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type" FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, "type" FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts the categories whose ids are not known yet. Existing rows are left untouched so
/// questions referencing them keep their meaning. Returns the number of inserted rows.
pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<u64> {
    let existing: HashSet<i64> = get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for category in categories {
        if existing.contains(&category.id) {
            continue;
        }
        inserted += sqlx::query(
            r#"
            INSERT INTO categories (id, "type") VALUES (?1, ?2)
            "#,
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}
