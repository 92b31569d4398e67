//! Credential verification interface used by the `/key` gate.
use async_trait::async_trait;
use thiserror::Error;

/// Authenticator-side failures.
///
/// Note:
/// - The handler treats every variant as a rejection (fail-closed).
/// - Variants only show up in logs, never in a response.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// Verifies a username/password pair.
///
/// Returns:
/// - `Ok(true)`  => credentials accepted
/// - `Ok(false)` => credentials rejected
/// - `Err(_)`    => verification could not be performed
///
/// A single instance is shared by every in-flight request, so
/// implementations must be safe to call concurrently.
#[async_trait]
pub trait Authenticator: Send + Sync + 'static {
    // Name of the credential source (for logging).
    fn backend_name(&self) -> &'static str;

    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}
