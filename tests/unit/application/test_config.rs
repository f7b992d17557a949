use auth_portal_client::application::config::{Config, RateLimiterConfig, RestApiConfig};
use auth_portal_client::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECS,
};

#[test]
fn test_with_base_url_uses_defaults() {
    let config = Config::with_base_url("http://auth.test:8000");

    assert_eq!(config.rest_api.base_url, "http://auth.test:8000");
    assert_eq!(config.rest_api.timeout, 0);
    assert_eq!(config.rate_limiter.max_requests, DEFAULT_RATE_LIMIT_MAX_REQUESTS);
    assert_eq!(config.rate_limiter.period_seconds, DEFAULT_RATE_LIMIT_PERIOD_SECS);
    assert_eq!(config.rate_limiter.burst_size, DEFAULT_RATE_LIMIT_BURST);
    assert!(config.storage.token_file.is_none());
}

#[test]
fn test_base_url_trims_trailing_slashes() {
    let config = Config::with_base_url("http://auth.test/api//");
    assert_eq!(config.base_url(), "http://auth.test/api");
}

#[test]
fn test_rest_api_default() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_base_url("http://auth.test");
    let rendered = config.to_string();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "http://auth.test");
}

#[test]
fn test_rate_limiter_config_deserialize() {
    let config: RateLimiterConfig =
        serde_json::from_str(r#"{"max_requests":5,"period_seconds":60,"burst_size":2}"#).unwrap();
    assert_eq!(config.max_requests, 5);
    assert_eq!(config.burst_size, 2);
}
