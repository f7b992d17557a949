/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tokens returned by `POST /auth/login`
#[derive(Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    /// Short lived access token
    pub access_token: String,
    /// Long lived refresh token
    pub refresh_token: String,
    /// Token type, usually "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Token returned by `POST /auth/refresh`
#[derive(Serialize, Deserialize, Clone)]
pub struct AccessTokenResponse {
    /// New access token
    pub access_token: String,
    /// Token type, usually "bearer"
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Profile of the authenticated user as returned by `/users/me`
///
/// Only the fields the client understands are typed; anything else the API
/// sends is kept in `extra` so the profile can be displayed verbatim.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UserProfile {
    /// User identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// User name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Whether the account is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Creation timestamp as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Every other field
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rate limit headers reported by the API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// `X-RateLimit-Limit`
    pub limit: Option<u32>,
    /// `X-RateLimit-Remaining`
    pub remaining: Option<u32>,
    /// `X-RateLimit-Reset`, unix seconds
    pub reset: Option<i64>,
}

impl RateLimitStatus {
    /// Reads the `X-RateLimit-*` headers; `None` when the API sent none of them
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let status = Self {
            limit: header_value(headers, "X-RateLimit-Limit"),
            remaining: header_value(headers, "X-RateLimit-Remaining"),
            reset: header_value(headers, "X-RateLimit-Reset"),
        };
        if status == Self::default() {
            None
        } else {
            Some(status)
        }
    }
}

/// Parses a numeric header, ignoring missing or malformed values
pub(crate) fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<T>().ok())
}
