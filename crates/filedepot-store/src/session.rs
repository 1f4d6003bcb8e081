//! In-memory session gate.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use filedepot_core::result::AppResult;
use filedepot_core::traits::session::SessionGate;
use filedepot_core::types::id::UserId;

/// Session gate backed by an in-memory token map.
///
/// Token issuance and expiry are out of scope; this gate only answers
/// "which user does this token belong to". The `grant`/`revoke` helpers
/// exist for wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionGate {
    tokens: Arc<RwLock<HashMap<String, UserId>>>,
}

impl MemorySessionGate {
    /// Create an empty session gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a token with a user.
    pub async fn grant(&self, token: impl Into<String>, user_id: UserId) {
        self.tokens.write().await.insert(token.into(), user_id);
    }

    /// Remove a token.
    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}

#[async_trait]
impl SessionGate for MemorySessionGate {
    async fn resolve(&self, token: &str) -> AppResult<Option<UserId>> {
        Ok(self.tokens.read().await.get(token).copied())
    }
}
