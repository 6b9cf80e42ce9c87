//! In-memory bearer-token store for login sessions.
//!
//! Tokens are random UUIDs handed out at login. A session lives until its
//! holder logs out or an admin edits or deletes the account.

use std::collections::HashMap;

use inventory_core::access::Session;
use inventory_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its bearer token.
    pub async fn open(&self, session: Session) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Remove a session, returning it if the token was live.
    pub async fn close(&self, token: &str) -> Option<Session> {
        self.sessions.write().await.remove(token)
    }

    /// Drop every session held by `user_id`. Returns how many were dropped.
    pub async fn revoke_user(&self, user_id: DbId) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != user_id);
        before - sessions.len()
    }

    pub async fn open_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
