use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::db::{
    queries::categories::{get_all_categories, get_category},
    queries::questions::get_questions_for_category,
    Question,
};
use crate::server::error::ApiResponse;

#[derive(Serialize)]
struct CategoriesResponse {
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    total_questions: usize,
    #[serde(rename = "currentCategory")]
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    // RowNotFound maps to the 404 envelope
    let category = get_category(&pool, id).await?;
    let questions = get_questions_for_category(&pool, id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.name,
    }))
}

pub fn category_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(pool)
}
