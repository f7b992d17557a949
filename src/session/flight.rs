/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Single-flight guard
//!
//! Each session operation takes a [`FlightGuard`] before touching the network.
//! A second attempt to start the same operation while the first one is pending
//! is rejected with [`AppError::RequestInFlight`] instead of racing it.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Operations guarded against concurrent duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Credential login
    Login,
    /// Account registration
    Register,
    /// Access token refresh
    Refresh,
    /// Profile read
    GetProfile,
    /// Profile update
    UpdateProfile,
    /// Single device logout with server side revocation
    Revoke,
    /// Logout from every device
    LogoutAll,
    /// Account deactivation
    Deactivate,
}

impl Operation {
    /// Stable name of the operation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::Register => "register",
            Operation::Refresh => "refresh",
            Operation::GetProfile => "get_profile",
            Operation::UpdateProfile => "update_profile",
            Operation::Revoke => "revoke",
            Operation::LogoutAll => "logout_all",
            Operation::Deactivate => "deactivate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which operations are currently running
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    pending: Arc<Mutex<HashSet<Operation>>>,
}

impl SingleFlight {
    /// Creates an empty guard set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `op` as running
    ///
    /// # Returns
    /// * `Ok(FlightGuard)` - The operation may proceed; dropping the guard ends it
    /// * `Err(AppError::RequestInFlight)` - The same operation is already running
    pub fn try_begin(&self, op: Operation) -> Result<FlightGuard, AppError> {
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| AppError::Storage("single-flight state poisoned".to_string()))?;
        if !pending.insert(op) {
            warn!("Rejected {}: already in flight", op);
            return Err(AppError::RequestInFlight(op));
        }
        Ok(FlightGuard {
            op,
            pending: Arc::clone(&self.pending),
        })
    }

    /// Whether `op` is currently running
    #[must_use]
    pub fn is_pending(&self, op: Operation) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.contains(&op))
            .unwrap_or(false)
    }
}

/// Releases its operation when dropped
#[derive(Debug)]
pub struct FlightGuard {
    op: Operation,
    pending: Arc<Mutex<HashSet<Operation>>>,
}

impl FlightGuard {
    /// The operation this guard holds
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.op
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.remove(&self.op);
        }
    }
}
