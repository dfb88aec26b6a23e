use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::{deserialize_default_from_null, deserialize_number_from_string};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_category, questions},
        Question,
    },
    server::{app::AppState, error::ApiError, extractors::AppJson},
    telemetry::record_quiz_question,
};

use super::ApiResponse;

/// Category id that stands for every category.
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    previous_questions: Vec<i64>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

fn pick_unseen(candidates: &[i64], previous: &[i64]) -> Option<i64> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();
    unseen.choose(&mut rand::thread_rng()).copied()
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    AppJson(request): AppJson<QuizRequest>,
) -> ApiResponse<QuizQuestion> {
    let category = request.quiz_category.ok_or(ApiError::Unprocessable)?;
    let filter = match category.id {
        ALL_CATEGORIES => None,
        id => {
            get_category(&pool, id)
                .await?
                .ok_or(ApiError::Unprocessable)?;
            Some(id)
        }
    };

    let candidates = questions::get_question_ids(&pool, filter).await?;
    let question = match pick_unseen(&candidates, &request.previous_questions) {
        Some(id) => questions::get_question_by_id(&pool, id).await?,
        None => {
            tracing::debug!("Quiz exhausted after {} questions", request.previous_questions.len());
            None
        }
    };
    if question.is_some() {
        record_quiz_question(filter);
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
