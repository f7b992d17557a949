/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::profile::ProfileService;
use crate::constants::PROFILE_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::UserUpdate;
use crate::model::responses::{RateLimitStatus, UserProfile};
use crate::session::flight::Operation;
use crate::session::state::{AccessToken, Session};
use crate::session::store::{FileTokenStore, MemoryTokenStore, TokenStore};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the authentication API
///
/// Cheap to clone; clones share the same session. This is what UI event
/// handlers call: each method is one request/response round trip.
#[derive(Debug, Clone)]
pub struct SessionClient {
    auth: Arc<Auth>,
}

impl SessionClient {
    /// Creates a client over `store`
    pub fn new(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http = Arc::new(HttpClient::new(Arc::new(config))?);
        let auth = Arc::new(Auth::new(http, store)?);
        Ok(Self { auth })
    }

    /// Creates a client whose token store is chosen by the configuration:
    /// a JSON file when `storage.token_file` is set, memory otherwise
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store: Arc<dyn TokenStore> = match &config.storage.token_file {
            Some(path) => {
                debug!("Persisting tokens to {}", path.display());
                Arc::new(FileTokenStore::new(path.clone()))
            }
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::new(config, store)
    }

    /// Snapshot of the held tokens
    pub async fn session(&self) -> Session {
        self.auth.session().await
    }

    /// Whether an access token is held
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    /// Whether a refresh token is held
    pub async fn has_refresh_token(&self) -> bool {
        self.auth.session().await.has_refresh_token()
    }

    /// Rate limit headers of the most recent response
    pub async fn last_rate_limit(&self) -> Option<RateLimitStatus> {
        self.auth.last_rate_limit().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait]
impl AuthService for SessionClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        self.auth.login(email, password).await
    }

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Value, AppError> {
        self.auth.register(email, username, password).await
    }

    async fn refresh(&self) -> Result<AccessToken, AppError> {
        self.auth.refresh_token().await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    async fn revoke(&self) -> Result<(), AppError> {
        self.auth.revoke().await
    }

    async fn logout_all(&self) -> Result<(), AppError> {
        self.auth.logout_all().await
    }
}

#[async_trait]
impl ProfileService for SessionClient {
    async fn get_profile(&self) -> Result<UserProfile, AppError> {
        let _guard = self.auth.begin(Operation::GetProfile)?;
        let value = self
            .auth
            .authorized_request(Method::GET, PROFILE_PATH, None::<&()>)
            .await?;
        let profile: UserProfile = serde_json::from_value(value)?;
        debug!("Profile obtained for {:?}", profile.username);
        Ok(profile)
    }

    async fn update_profile(&self, fields: &UserUpdate) -> Result<Value, AppError> {
        let _guard = self.auth.begin(Operation::UpdateProfile)?;
        let confirmation = self
            .auth
            .authorized_request(Method::PATCH, PROFILE_PATH, Some(fields))
            .await?;
        info!("✓ Profile updated");
        Ok(confirmation)
    }

    async fn deactivate_account(&self) -> Result<Value, AppError> {
        let _guard = self.auth.begin(Operation::Deactivate)?;
        let confirmation = self
            .auth
            .authorized_request(Method::DELETE, PROFILE_PATH, None::<&()>)
            .await?;
        self.auth.clear_local().await?;
        info!("✓ Account deactivated, session cleared");
        Ok(confirmation)
    }
}
