use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting as stored in the listings collection.
///
/// Every display field may be absent in the store; rendering substitutes a
/// default value rather than failing the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ListingRow {
    pub id: Uuid,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub job_description: Option<String>,
    pub salary_range: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Listing shaped for the search response: absent fields become "N/A",
/// absent skills become an empty list.
#[derive(Debug, Clone, Serialize)]
pub struct ListingDisplay {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub employment_type: String,
    pub required_skills: Vec<String>,
    pub job_description: String,
    pub salary_range: String,
}

const MISSING: &str = "N/A";

impl From<ListingRow> for ListingDisplay {
    fn from(row: ListingRow) -> Self {
        ListingDisplay {
            job_title: row.job_title.unwrap_or_else(|| MISSING.to_string()),
            company_name: row.company_name.unwrap_or_else(|| MISSING.to_string()),
            location: row.location.unwrap_or_else(|| MISSING.to_string()),
            employment_type: row.employment_type.unwrap_or_else(|| MISSING.to_string()),
            required_skills: row.required_skills.unwrap_or_default(),
            job_description: row.job_description.unwrap_or_else(|| MISSING.to_string()),
            salary_range: row.salary_range.unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

#[cfg(test)]
impl ListingRow {
    /// Test fixture with every display field present.
    pub fn sample(title: &str, employment_type: &str) -> Self {
        ListingRow {
            id: Uuid::new_v4(),
            job_title: Some(title.to_string()),
            company_name: Some("Acme Corp".to_string()),
            location: Some("Remote".to_string()),
            employment_type: Some(employment_type.to_string()),
            required_skills: Some(vec!["Python".to_string(), "SQL".to_string()]),
            job_description: Some("Build things.".to_string()),
            salary_range: Some("$100k-$140k".to_string()),
            posted_at: None,
        }
    }
}
