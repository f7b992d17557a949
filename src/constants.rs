/// Default base URL of the authentication API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
/// Default number of requests allowed per rate limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECS: u64 = 60;
/// Default burst size for the client side rate limiter
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 10;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("auth-portal-client/", env!("CARGO_PKG_VERSION"));

/// Storage key of the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Token type assumed when the API does not report one
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Login endpoint
pub const LOGIN_PATH: &str = "auth/login";
/// Registration endpoint
pub const REGISTER_PATH: &str = "auth/register";
/// Access token refresh endpoint
pub const REFRESH_PATH: &str = "auth/refresh";
/// Single device logout endpoint (revokes one refresh token)
pub const LOGOUT_PATH: &str = "auth/logout";
/// Logout from every device
pub const LOGOUT_ALL_PATH: &str = "auth/logout-all";
/// Current user profile
pub const PROFILE_PATH: &str = "users/me";

/// Header carrying a per request identifier
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
