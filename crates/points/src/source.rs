//! Bounded-region point queries.
//!
//! `PointsSource` is the seam between the fetch controller and the outside
//! world: the production implementation is HTTP (`HttpPointsSource`), while
//! tests substitute scripted sources. Methods return boxed futures for
//! dyn-compatibility, and implementations must be `Send + Sync` so fetches
//! can run on worker tasks.

use std::future::Future;
use std::pin::Pin;

use foundation::LatLngBounds;

use crate::config::{BASE_URL_ENV, ServiceConfig};
use crate::model::GeoPoint;

/// Why a points query failed.
///
/// Consumers only ever see the rendered message, but the variants keep the
/// categories distinguishable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service base URL is not configured.
    Configuration,
    /// Transport-level failure (DNS, connect, read).
    Network(String),
    /// The service answered with a non-2xx status.
    Http { status: u16, reason: String },
    /// The response body was not a well-formed point array.
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Configuration => {
                write!(f, "points service URL is not configured (set {BASE_URL_ENV})")
            }
            FetchError::Network(msg) if msg.is_empty() => write!(f, "an unknown error occurred"),
            FetchError::Network(msg) => write!(f, "fetch failed: {msg}"),
            FetchError::Http { status, reason } => {
                write!(f, "failed to fetch data: {status} {reason}")
            }
            FetchError::Parse(msg) => write!(f, "malformed points response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A queryable source of geo points for a bounding box.
pub trait PointsSource: Send + Sync {
    fn fetch_points(&self, bounds: LatLngBounds) -> BoxFuture<'_, Result<Vec<GeoPoint>, FetchError>>;
}

/// Production source: HTTP GET against the points service.
pub struct HttpPointsSource {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl HttpPointsSource {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Builds the bounding-box query URL, or fails if no endpoint is
    /// configured. Parameter naming: south/west as point 1, north/east as
    /// point 2, matching the service contract.
    pub fn query_url(&self, bounds: LatLngBounds) -> Result<String, FetchError> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or(FetchError::Configuration)?;
        Ok(format!(
            "{}/api/v1/points?lat1={}&lng1={}&lat2={}&lng2={}",
            base.trim_end_matches('/'),
            bounds.south,
            bounds.west,
            bounds.north,
            bounds.east,
        ))
    }
}

impl PointsSource for HttpPointsSource {
    fn fetch_points(&self, bounds: LatLngBounds) -> BoxFuture<'_, Result<Vec<GeoPoint>, FetchError>> {
        Box::pin(async move {
            // Configuration is checked before any network attempt.
            let url = self.query_url(bounds)?;

            let resp = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Http {
                    status: status.as_u16(),
                    reason: reason_phrase(status),
                });
            }

            let bytes = resp
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            parse_points(&bytes)
        })
    }
}

/// Decodes a service response body into points, preserving order.
pub fn parse_points(bytes: &[u8]) -> Result<Vec<GeoPoint>, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Reason phrase for an error status; non-standard codes get a stable
/// placeholder instead of an empty string.
fn reason_phrase(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}
