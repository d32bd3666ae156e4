use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::{routing::get, Router};
use prometheus::{Encoder, TextEncoder};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes::{category_router, questions_router, quizzes_router};

pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .merge(category_router(pool.clone()))
        .merge(questions_router(pool.clone()))
        .merge(quizzes_router(pool))
        .fallback(|| async { ApiError::NotFound })
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool) -> anyhow::Result<()> {
    let addr = "0.0.0.0:8080";
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app(pool)).await?;
    Ok(())
}

async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder.encode(&metrics, &mut buf).unwrap();
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(Body::from(buf))
        .unwrap()
}
