/// Credential and session lifecycle interface
pub mod auth;
/// Profile interface
pub mod profile;

pub use auth::AuthService;
pub use profile::ProfileService;
