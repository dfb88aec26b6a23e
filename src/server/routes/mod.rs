mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Json;
use sqlx::SqlitePool;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use super::error::ApiError;
use crate::db::queries::categories::get_all_categories;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

/// Category id -> type, serialized as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i64, String>;

async fn category_map(pool: &SqlitePool) -> sqlx::Result<CategoryMap> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}
