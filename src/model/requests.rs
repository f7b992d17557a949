/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Serialize, Clone, Copy)]
pub struct LoginRequest<'a> {
    /// Registered email address
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body of `POST /auth/register`
#[derive(Serialize, Clone, Copy)]
pub struct RegisterRequest<'a> {
    /// Email address, unique per account
    pub email: &'a str,
    /// Public user name, unique per account
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body of `POST /auth/refresh` and `POST /auth/logout`
#[derive(Serialize, Clone, Copy)]
pub struct RefreshTokenRequest<'a> {
    /// Refresh token obtained at login
    pub refresh_token: &'a str,
}

/// Partial profile update sent with `PATCH /users/me`
///
/// Fields left as `None` are not sent and stay unchanged on the server.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UserUpdate {
    /// New user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl UserUpdate {
    /// Update that only changes the user name
    pub fn username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}
