use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::pagination::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// One page of search hits plus the number of hits over all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total: i64,
}

// SQLite's LIKE folds ASCII only, so matching happens here with Unicode lowercasing
fn matches_term(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_questions_page(pool: &SqlitePool, page: Page) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        ORDER BY id LIMIT ?1 OFFSET ?2
        "#,
    )
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(pool)
    .await
}

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
    page: Page,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions
        WHERE questions.category = ?1
        ORDER BY id LIMIT ?2 OFFSET ?3
        "#,
    )
    .bind(category)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(pool)
    .await
}

pub async fn count_questions_for_category(pool: &SqlitePool, category: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE questions.category = ?1")
        .bind(category)
        .fetch_one(pool)
        .await
}

/// Case-insensitive substring search over the question text, in id order.
pub async fn search_questions(
    pool: &SqlitePool,
    term: &str,
    page: Page,
) -> sqlx::Result<SearchResults> {
    let needle = term.to_lowercase();
    let hits: Vec<Question> = get_all_questions(pool)
        .await?
        .into_iter()
        .filter(|q| matches_term(&q.question, &needle))
        .collect();
    let total = hits.len() as i64;
    let questions = hits
        .into_iter()
        .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
        .take(page.limit as usize)
        .collect();

    Ok(SearchResults { questions, total })
}

/// Ids of every question, or of one category's questions when `category` is set.
pub async fn get_question_ids(pool: &SqlitePool, category: Option<i64>) -> sqlx::Result<Vec<i64>> {
    match category {
        Some(category) => {
            sqlx::query_scalar("SELECT id FROM questions WHERE questions.category = ?1 ORDER BY id")
                .bind(category)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query_scalar("SELECT id FROM questions ORDER BY id")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn create_question(
    pool: &SqlitePool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Returns `false` when there was no question with this id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(deleted > 0)
}

/// Appends the questions under fresh ids; the ids in `questions` are ignored.
pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for question in questions {
        inserted += sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}
