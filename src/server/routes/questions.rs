use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category, questions},
        Question,
    },
    pagination::{Page, PageQuery},
    server::{
        app::AppState,
        deserializers::{deserialize_non_blank_string, deserialize_optional_i64},
        error::ApiError,
        extractors::{AppJson, AppPath, AppQuery},
    },
    telemetry::{record_mutation, Mutation},
};

use super::{category_map, ApiResponse, CategoryMap};

const DIFFICULTIES: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Deserialize)]
struct NewQuestion {
    #[serde(default, deserialize_with = "deserialize_non_blank_string")]
    question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank_string")]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: CategoryMap,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    created: i64,
    current_questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
    deleted: i64,
    current_questions: Vec<Question>,
    total_questions: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let questions = questions::get_questions_page(&pool, Page::from(query)).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions,
        total_questions: questions::count_questions(&pool).await?,
        categories: category_map(&pool).await?,
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(new_question): AppJson<NewQuestion>,
) -> ApiResponse<QuestionCreated> {
    let NewQuestion {
        question: Some(question),
        answer: Some(answer),
        category: Some(category),
        difficulty: Some(difficulty),
    } = new_question
    else {
        return Err(ApiError::BadRequest);
    };
    if !DIFFICULTIES.contains(&difficulty) {
        tracing::debug!("Difficulty {difficulty} is out of range");
        return Err(ApiError::Unprocessable);
    }
    if get_category(&pool, category).await?.is_none() {
        tracing::debug!("Category {category} does not exist");
        return Err(ApiError::Unprocessable);
    }

    let id = questions::create_question(&pool, &question, &answer, category, difficulty).await?;
    record_mutation(Mutation::Create);
    tracing::info!("Created question {id} in category {category}");

    Ok(Json(QuestionCreated {
        success: true,
        created: id,
        current_questions: questions::get_questions_page(&pool, Page::from(query)).await?,
        total_questions: questions::count_questions(&pool).await?,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppQuery(query): AppQuery<PageQuery>,
) -> ApiResponse<QuestionDeleted> {
    if !questions::delete_question(&pool, id).await? {
        tracing::debug!("Question {id} does not exist");
        return Err(ApiError::Unprocessable);
    }
    record_mutation(Mutation::Delete);
    tracing::info!("Deleted question {id}");

    Ok(Json(QuestionDeleted {
        success: true,
        deleted: id,
        current_questions: questions::get_questions_page(&pool, Page::from(query)).await?,
        total_questions: questions::count_questions(&pool).await?,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(body): AppJson<SearchBody>,
) -> ApiResponse<QuestionsPage> {
    let term = body.search_term.ok_or(ApiError::Unprocessable)?;
    let results = questions::search_questions(&pool, &term, Page::from(query)).await?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: results.questions,
        total_questions: results.total,
        categories: category_map(&pool).await?,
        current_category: None,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
