//! Query builder for the listings search.
//!
//! Turns the two form selections into a substring-match filter. Validation
//! happens here, before any store access: both selections are required, and
//! each must come from its catalog set.

use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::catalog::{self, EmploymentType, UNSELECTED};
use crate::models::listing::ListingRow;

/// A validated listings filter: case-insensitive substring match on the
/// title field and on the employment-type field.
#[derive(Debug, Clone, Serialize)]
pub struct ListingFilter {
    pub title_contains: String,
    pub employment_type_contains: String,
}

impl ListingFilter {
    /// Builds a filter from raw form selections.
    ///
    /// A missing, blank, or sentinel selection is a validation error, as is a
    /// value outside the catalog. No store query may run for a rejected pair.
    pub fn build(
        job_title: Option<&str>,
        employment_type: Option<&str>,
    ) -> Result<Self, AppError> {
        let title = concrete_selection(job_title).ok_or_else(|| {
            AppError::Validation("Please select a valid job title.".to_string())
        })?;
        if !catalog::is_known_title(title) {
            return Err(AppError::Validation(
                "Please select a valid job title.".to_string(),
            ));
        }

        let employment = concrete_selection(employment_type)
            .and_then(EmploymentType::parse)
            .ok_or_else(|| {
                AppError::Validation("Please select a valid employment type.".to_string())
            })?;

        Ok(ListingFilter {
            title_contains: title.to_string(),
            employment_type_contains: employment.as_str().to_string(),
        })
    }

    /// The in-memory counterpart of the store's ILIKE query. A listing with an
    /// absent field never matches.
    pub fn matches(&self, listing: &ListingRow) -> bool {
        field_contains(listing.job_title.as_deref(), &self.title_contains)
            && field_contains(
                listing.employment_type.as_deref(),
                &self.employment_type_contains,
            )
    }
}

fn concrete_selection(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != UNSELECTED)
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(&needle.to_lowercase()))
}

/// Escapes LIKE metacharacters so a filter needle matches literally.
pub fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
