/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication module
//!
//! [`Auth`] owns the access/refresh token pair and handles:
//! - Login, which replaces both tokens
//! - Refresh, which replaces the access token only
//! - Local logout, server side revocation and logout from all devices
//! - The "unauthenticated" precondition of bearer requests
//! - Dropping a dead access token when the API answers 401

use crate::constants::{LOGIN_PATH, LOGOUT_ALL_PATH, LOGOUT_PATH, REFRESH_PATH, REGISTER_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::model::responses::{AccessTokenResponse, RateLimitStatus, TokenResponse};
use crate::session::flight::{FlightGuard, Operation, SingleFlight};
use crate::session::state::{AccessToken, Session};
use crate::session::store::TokenStore;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Authentication manager
///
/// Every token change is written through to the [`TokenStore`] before it
/// becomes visible in memory, so a restarted client resumes the same session.
#[derive(Debug)]
pub struct Auth {
    http: Arc<HttpClient>,
    session: RwLock<Session>,
    store: Arc<dyn TokenStore>,
    flight: SingleFlight,
}

impl Auth {
    /// Creates a new Auth instance, resuming whatever session the store holds
    ///
    /// # Arguments
    /// * `http` - Transport to the authentication API
    /// * `store` - Where tokens are persisted
    pub fn new(http: Arc<HttpClient>, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let session = store.load()?;
        if session.is_authenticated() {
            info!("Resumed stored session");
        }
        Ok(Self {
            http,
            session: RwLock::new(session),
            store,
            flight: SingleFlight::new(),
        })
    }

    /// Snapshot of the held tokens
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Whether an access token is held
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Rate limit headers of the most recent response
    pub async fn last_rate_limit(&self) -> Option<RateLimitStatus> {
        self.http.last_rate_limit().await
    }

    /// Marks `op` as running, rejecting a concurrent duplicate
    pub fn begin(&self, op: Operation) -> Result<FlightGuard, AppError> {
        self.flight.try_begin(op)
    }

    /// The held access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - Token to put in the bearer header
    /// * `Err(AppError::Unauthenticated)` - No session; nothing must be sent
    pub async fn access_token(&self) -> Result<AccessToken, AppError> {
        self.session
            .read()
            .await
            .access_token
            .clone()
            .ok_or(AppError::Unauthenticated)
    }

    /// Performs login
    ///
    /// # Returns
    /// * `Ok(Session)` - The new session, holding exactly the returned tokens
    /// * `Err(AppError)` - The held tokens are unchanged
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let _guard = self.begin(Operation::Login)?;
        debug!("Logging in as {}", email);

        let body = LoginRequest { email, password };
        let value = self.http.post(LOGIN_PATH, Some(&body), None).await?;
        let tokens: TokenResponse = serde_json::from_value(value)?;

        let session = Session::from_login(tokens);
        self.install(session.clone()).await?;

        info!("✓ Login successful for {}", email);
        Ok(session)
    }

    /// Registers a new account; the held tokens are not touched
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Value, AppError> {
        let _guard = self.begin(Operation::Register)?;
        debug!("Registering {} ({})", username, email);

        let body = RegisterRequest {
            email,
            username,
            password,
        };
        let confirmation = self.http.post(REGISTER_PATH, Some(&body), None).await?;

        info!("✓ Registered {}", username);
        Ok(confirmation)
    }

    /// Exchanges the held refresh token for a new access token
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The new access token, now held
    /// * `Err(AppError::Unauthenticated)` - No refresh token is held, or the
    ///   session was ended while the request was in flight
    /// * `Err(AppError)` - The API refused; nothing rotated
    pub async fn refresh_token(&self) -> Result<AccessToken, AppError> {
        let _guard = self.begin(Operation::Refresh)?;

        let refresh_token = self
            .session
            .read()
            .await
            .refresh_token
            .clone()
            .ok_or(AppError::Unauthenticated)?;

        debug!("Refreshing access token");
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.as_str(),
        };
        let value = match self.http.post(REFRESH_PATH, Some(&body), None).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                return Err(e);
            }
        };
        let response: AccessTokenResponse = serde_json::from_value(value)?;

        let mut session = self.session.write().await;
        if session.refresh_token.as_ref() != Some(&refresh_token) {
            warn!("Session changed during refresh, discarding the new access token");
            return Err(AppError::Unauthenticated);
        }
        let mut next = session.clone();
        next.apply_refresh(response);
        self.store.save(&next)?;
        *session = next;

        info!("✓ Access token refreshed");
        session
            .access_token
            .clone()
            .ok_or(AppError::Unauthenticated)
    }

    /// Forgets both tokens locally; calling it again is a no-op
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.clear_local().await?;
        info!("✓ Logged out successfully");
        Ok(())
    }

    /// Revokes this device's refresh token on the server, then logs out locally
    ///
    /// The local logout happens whether or not the API call succeeds; the
    /// remote error, if any, is returned afterwards.
    pub async fn revoke(&self) -> Result<(), AppError> {
        let _guard = self.begin(Operation::Revoke)?;

        let session = self.session().await;
        let remote = match (&session.access_token, &session.refresh_token) {
            (Some(access), Some(refresh)) => {
                let body = RefreshTokenRequest {
                    refresh_token: refresh.as_str(),
                };
                self.http
                    .post(LOGOUT_PATH, Some(&body), Some(access))
                    .await
                    .map(|_| ())
            }
            _ => Err(AppError::Unauthenticated),
        };

        self.finish_remote_logout(remote).await
    }

    /// Ends every session of the account on the server, then logs out locally
    ///
    /// The local logout happens whether or not the API call succeeds; the
    /// remote error, if any, is returned afterwards.
    pub async fn logout_all(&self) -> Result<(), AppError> {
        let _guard = self.begin(Operation::LogoutAll)?;

        let remote = match self.access_token().await {
            Ok(access) => self
                .http
                .post(LOGOUT_ALL_PATH, None::<&()>, Some(&access))
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        };

        self.finish_remote_logout(remote).await
    }

    /// Sends a bearer request on behalf of the held session
    ///
    /// Fails with [`AppError::Unauthenticated`] without sending anything when
    /// no access token is held. A 401 answer drops the access token that was
    /// sent (the refresh token is kept) before the error is returned.
    pub async fn authorized_request<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        let token = self.access_token().await?;

        match self.http.request(method, path, body, Some(&token)).await {
            Err(e) if e.is_unauthorized() => {
                self.drop_access_token(&token).await?;
                Err(e)
            }
            other => other,
        }
    }

    /// Forgets both tokens, in memory first so a store failure cannot keep the session alive
    pub async fn clear_local(&self) -> Result<(), AppError> {
        self.session.write().await.clear();
        self.store.clear()
    }

    async fn finish_remote_logout(&self, remote: Result<(), AppError>) -> Result<(), AppError> {
        if let Err(e) = &remote {
            warn!("Remote logout failed, clearing local session anyway: {}", e);
        }
        self.clear_local().await?;
        info!("✓ Session cleared");
        remote
    }

    async fn install(&self, session: Session) -> Result<(), AppError> {
        let mut current = self.session.write().await;
        self.store.save(&session)?;
        *current = session;
        Ok(())
    }

    async fn drop_access_token(&self, rejected: &AccessToken) -> Result<(), AppError> {
        let mut session = self.session.write().await;
        if session.access_token.as_ref() != Some(rejected) {
            return Ok(());
        }
        warn!("Access token rejected by the API, dropping it");
        let mut next = session.clone();
        next.drop_access_token();
        self.store.save(&next)?;
        *session = next;
        Ok(())
    }
}
