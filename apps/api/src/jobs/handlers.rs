use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::catalog::{EmploymentType, JOB_TITLES};
use crate::jobs::query::ListingFilter;
use crate::models::listing::ListingDisplay;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub job_title: Option<String>,
    pub employment_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub listings: Vec<ListingDisplay>,
    /// Advisory text for an empty result set. Zero matches is not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub job_titles: Vec<&'static str>,
    pub employment_types: Vec<&'static str>,
}

/// GET /api/v1/jobs/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        job_titles: JOB_TITLES.to_vec(),
        employment_types: EmploymentType::ALL.iter().map(|t| t.as_str()).collect(),
    })
}

/// GET /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let filter = ListingFilter::build(
        params.job_title.as_deref(),
        params.employment_type.as_deref(),
    )?;

    let rows = state.listings.search(&filter).await?;

    let message = if rows.is_empty() {
        Some("No matching jobs found. Try different keywords or employment type.".to_string())
    } else {
        None
    };

    Ok(Json(SearchResponse {
        count: rows.len(),
        listings: rows.into_iter().map(ListingDisplay::from).collect(),
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::store::InMemoryListingStore;
    use crate::models::listing::ListingRow;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn state_with_rows(rows: Vec<ListingRow>) -> (AppState, Arc<InMemoryListingStore>) {
        let store = Arc::new(InMemoryListingStore::new(rows));
        (AppState::for_tests(store.clone()), store)
    }

    fn params(job_title: Option<&str>, employment_type: Option<&str>) -> SearchParams {
        SearchParams {
            job_title: job_title.map(String::from),
            employment_type: employment_type.map(String::from),
        }
    }

    #[tokio::test]
    async fn search_returns_matches_as_display_rows() {
        let (state, _) = state_with_rows(vec![
            ListingRow::sample("Senior Data Scientist", "Full-time contractor"),
            ListingRow::sample("Data Analyst", "Full-time"),
        ]);

        let Json(resp) = handle_search(
            State(state),
            Query(params(Some("Data Scientist"), Some("Full-time"))),
        )
        .await
        .unwrap();

        assert_eq!(resp.count, 1);
        assert_eq!(resp.listings[0].job_title, "Senior Data Scientist");
        assert!(resp.message.is_none());
    }

    #[tokio::test]
    async fn search_with_no_matches_is_success_with_advisory() {
        let (state, _) = state_with_rows(vec![ListingRow::sample("Teacher", "Part-time")]);

        let Json(resp) = handle_search(
            State(state),
            Query(params(Some("Data Scientist"), Some("Full-time"))),
        )
        .await
        .unwrap();

        assert_eq!(resp.count, 0);
        assert!(resp.message.unwrap().contains("No matching jobs"));
    }

    #[tokio::test]
    async fn unselected_title_short_circuits_before_the_store() {
        let (state, store) = state_with_rows(vec![]);

        let err = handle_search(
            State(state),
            Query(params(Some("Select"), Some("Full-time"))),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unselected_employment_type_short_circuits_before_the_store() {
        let (state, store) = state_with_rows(vec![]);

        let err = handle_search(
            State(state),
            Query(params(Some("Data Scientist"), None)),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn catalog_lists_both_selection_sets() {
        let Json(resp) = handle_catalog().await;
        assert_eq!(resp.job_titles.len(), 11);
        assert_eq!(
            resp.employment_types,
            vec!["Intern", "Full-time", "Part-time"]
        );
    }
}
