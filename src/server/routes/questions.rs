use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::db::{
    queries::categories::get_all_categories,
    queries::questions::{
        self, count_questions, create_question, get_question_by_id, get_questions_page,
        search_questions,
    },
    Question,
};
use crate::server::error::{ApiError, ApiResponse};
use crate::server::extractors;

const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Deserialize)]
struct PageQuery {
    page: Option<i64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionListResponse {
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: i64,
    categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchResponse {
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: Option<String>,
}

#[derive(Serialize)]
struct CreatedResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct DeletedResponse {
    id: i64,
    message: &'static str,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<Json<QuestionListResponse>> {
    let page = page.unwrap_or(1);
    if page < 1 {
        return Err(ApiError::NotFound);
    }
    // pages large enough to overflow the offset are necessarily past the end
    let offset = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .ok_or(ApiError::NotFound)?;
    let total_questions = count_questions(&pool).await?;
    let questions = get_questions_page(&pool, QUESTIONS_PER_PAGE, offset).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
        current_category: None,
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    extractors::Json(body): extractors::Json<NewQuestion>,
) -> ApiResponse<Json<CreatedResponse>> {
    create_question(
        &pool,
        &body.question,
        &body.answer,
        body.category,
        body.difficulty,
    )
    .await?;
    Ok(Json(CreatedResponse {
        message: "Question added successfully",
    }))
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<DeletedResponse>> {
    let question = get_question_by_id(&pool, id).await?;
    questions::delete_question(&pool, question.id).await?;
    Ok(Json(DeletedResponse {
        id: question.id,
        message: "Question deleted successfully",
    }))
}

async fn search(
    State(pool): State<SqlitePool>,
    extractors::Json(body): extractors::Json<SearchBody>,
) -> ApiResponse<Json<SearchResponse>> {
    let questions = search_questions(&pool, &body.search_term).await?;
    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub fn questions_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(add_question))
        .route("/questions/{id}", delete(remove_question))
        .route("/questions/titles", post(search))
        .with_state(pool)
}
