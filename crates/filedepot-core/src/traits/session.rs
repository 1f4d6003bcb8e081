//! Session gate trait for resolving opaque tokens to user identities.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// Resolves an opaque session token to a user identifier.
///
/// Credential issuance and expiry live outside this system; FileDepot
/// only consumes the mapping. `Ok(None)` means "no session" and is
/// distinct from a transport failure.
#[async_trait]
pub trait SessionGate: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve a token to the user it belongs to, if any.
    async fn resolve(&self, token: &str) -> AppResult<Option<UserId>>;
}
