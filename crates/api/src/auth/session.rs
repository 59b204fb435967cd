//! The admin session gate.
//!
//! Authentication is a literal equality check against two configured
//! secret strings. A successful login creates an entry in an in-memory
//! store keyed by an opaque random token; the store is created at startup
//! and dies with the process, so a restart logs every admin out. There is
//! no lockout, rate limiting, or persistence.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use atelier_core::types::Timestamp;

use crate::config::AdminCredentials;

/// A logged-in admin.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Display name, echoed back to the UI.
    pub name: String,
    pub logged_in_at: Timestamp,
}

/// Process-local session store. Tokens are opaque UUIDs.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, AdminSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `name`, returning its token.
    pub async fn create(&self, name: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let session = AdminSession {
            name: name.to_string(),
            logged_in_at: Utc::now(),
        };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Look up a session by token.
    pub async fn get(&self, token: &str) -> Option<AdminSession> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Discard a session. Returns true if the token was known.
    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

/// Literal equality check against the configured secrets. Unconfigured
/// credentials fail every attempt.
pub fn verify_credentials(
    credentials: Option<&AdminCredentials>,
    name: &str,
    passcode: &str,
) -> bool {
    match credentials {
        Some(c) => c.name == name && c.passcode == passcode,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AdminCredentials {
        AdminCredentials {
            name: "divya".to_string(),
            passcode: "henna-and-ink".to_string(),
        }
    }

    #[test]
    fn verify_requires_both_strings_to_match() {
        let c = creds();
        assert!(verify_credentials(Some(&c), "divya", "henna-and-ink"));
        assert!(!verify_credentials(Some(&c), "divya", "wrong"));
        assert!(!verify_credentials(Some(&c), "wrong", "henna-and-ink"));
        assert!(!verify_credentials(Some(&c), "", ""));
    }

    #[test]
    fn verify_fails_when_unconfigured() {
        assert!(!verify_credentials(None, "divya", "henna-and-ink"));
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let store = SessionStore::new();

        let token = store.create("divya").await;
        let session = store.get(&token).await.expect("session exists");
        assert_eq!(session.name, "divya");

        assert!(store.remove(&token).await);
        assert!(store.get(&token).await.is_none());
        assert!(!store.remove(&token).await);
    }

    #[tokio::test]
    async fn tokens_are_unique_per_login() {
        let store = SessionStore::new();
        let a = store.create("divya").await;
        let b = store.create("divya").await;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let store = SessionStore::new();
        assert!(store.get("not-a-token").await.is_none());
    }
}
