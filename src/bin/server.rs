use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenv::dotenv().ok();
    let path = dotenv::var("DB_PATH").expect("DB_PATH must be set");
    let pool = establish_connection(&path).await?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool).await?;
    Ok(())
}
