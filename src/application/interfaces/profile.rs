use crate::error::AppError;
use crate::model::requests::UserUpdate;
use crate::model::responses::UserProfile;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the profile of the logged in user
///
/// Every method fails with [`AppError::Unauthenticated`] before touching the
/// network when no access token is held.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Gets the current user's profile
    async fn get_profile(&self) -> Result<UserProfile, AppError>;

    /// Applies a partial update to the current user's profile
    async fn update_profile(&self, fields: &UserUpdate) -> Result<Value, AppError>;

    /// Deactivates the current account and ends the session
    async fn deactivate_account(&self) -> Result<Value, AppError>;
}
