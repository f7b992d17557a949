/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Auth Portal Client
//!
//! A session client for a token-based authentication API. It performs the
//! credential operations (login, register, refresh, logout, logout from all
//! devices), the profile operations (read, update, deactivate) and owns the
//! access/refresh token pair that authenticated requests carry.
//!
//! ## Example
//!
//! ```ignore
//! use auth_portal_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = SessionClient::from_config(Config::new())?;
//!
//!     client.login("a@b.com", "pw").await?;
//!     let profile = client.get_profile().await?;
//!     info!("{}", profile);
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```

/// Session client, configuration and rate limiting
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and HTTP transport
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Page view state
pub mod presentation;
/// Session state, token storage and request guards
pub mod session;
/// Environment, logging and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
