use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn create_test_pool() -> SqlitePool {
    // A single connection so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    trivia_api::db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

pub async fn seed_category(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO categories (id, name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("failed to seed category");
}

pub async fn seed_question(
    pool: &SqlitePool,
    id: i64,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i64,
) {
    sqlx::query(
        "INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await
    .expect("failed to seed question");
}
