use std::env;

/// Environment variable holding the points service base URL.
pub const BASE_URL_ENV: &str = "POINTS_API_URL";
/// Environment variable holding the map-provider API key.
pub const MAPS_API_KEY_ENV: &str = "MAPS_API_KEY";

/// Process-wide configuration, captured once and passed explicitly.
///
/// Both values are optional at this level: a missing base URL is a runtime
/// `FetchError::Configuration`, not a construction failure, so the UI can
/// surface it the same way as any other fetch failure. The map key is only
/// handed through to the external map surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub maps_api_key: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: non_empty(env::var(BASE_URL_ENV).ok()),
            maps_api_key: non_empty(env::var(MAPS_API_KEY_ENV).ok()),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            maps_api_key: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
