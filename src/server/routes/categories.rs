use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category, questions},
        Question,
    },
    pagination::{Page, PageQuery},
    server::{
        app::AppState,
        error::ApiError,
        extractors::{AppPath, AppQuery},
    },
};

use super::{category_map, ApiResponse, CategoryMap};

#[derive(Serialize)]
struct CategoriesPage {
    success: bool,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CategoryQuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesPage> {
    Ok(Json(CategoriesPage {
        success: true,
        categories: category_map(&pool).await?,
    }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<CategoryQuestionsPage> {
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;
    let page = Page::from(query);
    let questions = questions::get_questions_for_category(&pool, category.id, page).await?;
    if questions.is_empty() && !page.is_first() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsPage {
        success: true,
        questions,
        total_questions: questions::count_questions_for_category(&pool, category.id).await?,
        current_category: category.kind,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
}
