//! Cosmetic authentication.
//!
//! There are no accounts: sign-in only checks that both fields are present,
//! sign-up and change-password acknowledge without persisting anything, and
//! a session is a token in an in-memory map that dies with the process.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::Session;

/// Transient session registry. Injected via `AppState`, never global.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, username: &str) -> Session {
        let session = Session::new(username);
        self.inner
            .write()
            .await
            .insert(session.token, session.clone());
        session
    }

    /// Removes the session. Idempotent: signing out an unknown token is fine.
    pub async fn sign_out(&self, token: Uuid) -> bool {
        self.inner.write().await.remove(&token).is_some()
    }

    #[cfg(test)]
    pub async fn contains(&self, token: Uuid) -> bool {
        self.inner.read().await.contains_key(&token)
    }
}
