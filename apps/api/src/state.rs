use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::feedback::FeedbackService;
use crate::jobs::store::ListingStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Listings store seam. Production: `PgListingStore`; tests: in-memory.
    pub listings: Arc<dyn ListingStore>,
    /// Feedback service seam. Production: `LlmFeedback`; tests: stub.
    pub feedback: Arc<dyn FeedbackService>,
    pub sessions: SessionStore,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(listings: Arc<dyn ListingStore>) -> Self {
        Self::for_tests_with(
            listings,
            Arc::new(crate::feedback::StubFeedbackService::replying("stub")),
        )
    }

    pub fn for_tests_with(
        listings: Arc<dyn ListingStore>,
        feedback: Arc<dyn FeedbackService>,
    ) -> Self {
        AppState {
            listings,
            feedback,
            sessions: SessionStore::new(),
            config: Config {
                database_url: "postgres://unused".to_string(),
                anthropic_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }
}
