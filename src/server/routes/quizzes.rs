use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{queries::questions::get_quiz_question, Question};
use crate::server::error::{ApiError, ApiResponse};
use crate::server::extractors;
use crate::telemetry::QUIZ_CNTR;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategory>,
}

// The front-end sends the category id as a JSON string
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "serde_aux::field_attributes::deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    extractors::Json(body): extractors::Json<QuizBody>,
) -> ApiResponse<Json<QuizResponse>> {
    let previous_questions = body.previous_questions.ok_or(ApiError::BadRequest)?;
    let quiz_category = body.quiz_category.ok_or(ApiError::BadRequest)?;

    // id 0 means "all categories"
    let category = (quiz_category.id != 0).then_some(quiz_category.id);
    let question = get_quiz_question(&pool, category, &previous_questions).await?;
    if question.is_some() {
        QUIZ_CNTR
            .with_label_values(&[quiz_category.id.to_string().as_str()])
            .inc();
    }
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(pool)
}
