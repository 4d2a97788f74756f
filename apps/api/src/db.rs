use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool for the record warehouse.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to record warehouse...");

    // One fetch per user action; a small pool is plenty.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    info!("Record warehouse connection pool established");
    Ok(pool)
}
