//! Listings store access.
//!
//! `ListingStore` is the seam between search handlers and the document
//! collection. The production backend runs an ILIKE query against
//! PostgreSQL; tests substitute an in-memory store. Carried in `AppState`
//! as `Arc<dyn ListingStore>`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::query::{escape_like, ListingFilter};
use crate::models::listing::ListingRow;

#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Returns every listing matching the filter. No ranking, no pagination,
    /// no result-size bound.
    async fn search(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>, AppError>;
}

/// PostgreSQL-backed listings store. Read-only.
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn search(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>, AppError> {
        let title_pattern = format!("%{}%", escape_like(&filter.title_contains));
        let employment_pattern = format!("%{}%", escape_like(&filter.employment_type_contains));

        let rows: Vec<ListingRow> = sqlx::query_as(
            r#"
            SELECT id, job_title, company_name, location, employment_type,
                   required_skills, job_description, salary_range, posted_at
            FROM job_listings
            WHERE job_title ILIKE $1
              AND employment_type ILIKE $2
            ORDER BY posted_at DESC NULLS LAST
            "#,
        )
        .bind(&title_pattern)
        .bind(&employment_pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Listings search for title~'{}' type~'{}' returned {} rows",
            filter.title_contains,
            filter.employment_type_contains,
            rows.len()
        );

        Ok(rows)
    }
}

/// In-memory store for tests: applies `ListingFilter::matches` over a fixed
/// set of rows and counts how often it was queried.
#[cfg(test)]
pub struct InMemoryListingStore {
    rows: Vec<ListingRow>,
    pub queries: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl InMemoryListingStore {
    pub fn new(rows: Vec<ListingRow>) -> Self {
        Self {
            rows,
            queries: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn search(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>, AppError> {
        self.queries
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(self
            .rows
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect())
    }
}
