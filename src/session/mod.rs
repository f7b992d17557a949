/// Single-flight guard for session operations
pub mod flight;
/// Session state and token types
pub mod state;
/// Token storage backends
pub mod store;

pub use flight::{FlightGuard, Operation, SingleFlight};
pub use state::{AccessToken, RefreshToken, Session};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
