/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Auth Portal Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use auth_portal_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000");
//! let client = SessionClient::from_config(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the session client
pub use crate::application::config::{Config, RateLimiterConfig, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Token lifecycle manager
pub use crate::application::auth::Auth;

/// Session client
pub use crate::application::client::SessionClient;

/// Service traits
pub use crate::application::interfaces::{AuthService, ProfileService};

// ============================================================================
// SESSION
// ============================================================================

/// Session state, token storage and request guards
pub use crate::session::{
    AccessToken, FileTokenStore, MemoryTokenStore, Operation, RefreshToken, Session, TokenStore,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request and response models
pub use crate::model::requests::UserUpdate;
pub use crate::model::responses::{RateLimitStatus, UserProfile};

// ============================================================================
// PRESENTATION
// ============================================================================

/// Page view state
pub use crate::presentation::{View, ViewEvent, next_view};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
