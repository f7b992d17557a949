/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session state: the access/refresh token pair and what is known about them

use crate::constants::DEFAULT_TOKEN_TYPE;
use crate::model::responses::{AccessTokenResponse, TokenResponse};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw token value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Raw token value
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(***)", stringify!($name))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

opaque_token!(
    /// Short lived bearer credential attached to authenticated requests
    AccessToken
);

impl AccessToken {
    /// Value of the `Authorization` header for this token
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

opaque_token!(
    /// Long lived credential used only to mint new access tokens
    RefreshToken
);

/// Tokens held by the client
///
/// "Has session" means an access token is present. At most one token of each
/// kind is held; login replaces both, refresh replaces the access token only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Current access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,
    /// Current refresh token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<RefreshToken>,
    /// Token type reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// When the access token expires, if the API said so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Builds the session established by a successful login
    #[must_use]
    pub fn from_login(response: TokenResponse) -> Self {
        Self {
            access_token: Some(AccessToken::new(response.access_token)),
            refresh_token: Some(RefreshToken::new(response.refresh_token)),
            expires_at: expiry_from(response.expires_in),
            token_type: response.token_type,
        }
    }

    /// Installs a refreshed access token, leaving the refresh token untouched
    pub fn apply_refresh(&mut self, response: AccessTokenResponse) {
        self.access_token = Some(AccessToken::new(response.access_token));
        self.expires_at = expiry_from(response.expires_in);
        if response.token_type.is_some() {
            self.token_type = response.token_type;
        }
    }

    /// Forgets the access token but keeps the refresh token
    pub fn drop_access_token(&mut self) {
        self.access_token = None;
        self.expires_at = None;
    }

    /// Forgets everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an access token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether a refresh token is held
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Token type, "bearer" unless the API said otherwise
    #[must_use]
    pub fn token_type(&self) -> &str {
        self.token_type.as_deref().unwrap_or(DEFAULT_TOKEN_TYPE)
    }

    /// Whether no token at all is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }

    /// Checks if the access token is expired or will expire within the margin
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60)
    ///
    /// # Returns
    /// * `true` if a refresh is advisable: no access token, or one expiring within the margin
    /// * `false` if the token is still fresh, or the API never reported an expiry
    #[must_use]
    pub fn needs_refresh(&self, margin_seconds: Option<i64>) -> bool {
        if self.access_token.is_none() {
            return self.has_refresh_token();
        }
        match self.expires_at {
            Some(expires_at) => {
                let margin = Duration::seconds(margin_seconds.unwrap_or(60));
                expires_at - margin <= Utc::now()
            }
            None => false,
        }
    }

    /// Seconds until the access token expires; negative once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at
            .map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }
}

/// Expiry instant `expires_in` seconds from now; out of range values mean no expiry
fn expiry_from(expires_in: Option<u64>) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(expires_in?).ok()?;
    Utc::now().checked_add_signed(Duration::try_seconds(secs)?)
}
