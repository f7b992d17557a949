use crate::error::AppError;
use crate::session::state::{AccessToken, Session};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the credential operations
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in and stores both returned tokens, replacing any previous ones
    ///
    /// # Arguments
    /// * `email` - Registered email address
    /// * `password` - Account password
    ///
    /// # Returns
    /// * The new session; on failure the held tokens are left unchanged
    async fn login(&self, email: &str, password: &str) -> Result<Session, AppError>;

    /// Registers an account; never establishes a session
    async fn register(&self, email: &str, username: &str, password: &str)
    -> Result<Value, AppError>;

    /// Exchanges the held refresh token for a new access token
    ///
    /// Only the access token rotates; the refresh token is kept as is.
    async fn refresh(&self) -> Result<AccessToken, AppError>;

    /// Forgets both tokens without contacting the API
    async fn logout(&self) -> Result<(), AppError>;

    /// Asks the API to revoke this device's refresh token, then forgets both tokens
    async fn revoke(&self) -> Result<(), AppError>;

    /// Asks the API to end every session of the account, then forgets both tokens
    ///
    /// Tokens are cleared locally whatever the API answers; a remote failure is
    /// still reported.
    async fn logout_all(&self) -> Result<(), AppError>;
}
