use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A transient signed-in session. Lives only in process memory: there is no
/// credential verification behind it and it does not survive a restart.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub username: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: &str) -> Self {
        Session {
            token: Uuid::new_v4(),
            username: username.to_string(),
            signed_in_at: Utc::now(),
        }
    }
}
