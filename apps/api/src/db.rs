use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL connection pool for the listings store.
/// The store is read-only from this service's point of view.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to listings store...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("Listings store connection pool established");
    Ok(pool)
}
