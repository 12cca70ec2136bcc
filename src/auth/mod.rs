//! Service-key credentials.
//!
//! ## Resolution Model
//!
//! The upstream authenticates every request with a `serviceKey` query parameter.
//! The key is resolved at call time, not at construction, so a process can set
//! its environment after building the client.
//!
//! - [`Credentials::Env`] reads `NEXT_PUBLIC_TOUR_API_KEY` first and falls back to
//!   `TOUR_API_KEY`. Empty values count as unset.
//! - [`Credentials::ServiceKey`] carries an explicit key.
//!
//! A missing key is a configuration error. It is raised before any request is
//! sent and is never retried. The key is never logged and never shown by `Debug`.

use crate::error::TourApiError;

/// Publicly exposed key, preferred when both are set.
pub const PUBLIC_KEY_ENV: &str = "NEXT_PUBLIC_TOUR_API_KEY";

/// Server-only fallback key.
pub const SERVER_KEY_ENV: &str = "TOUR_API_KEY";

/// Where the service key comes from.
#[derive(Clone, Default)]
pub enum Credentials {
    /// Resolve from the process environment on every call.
    #[default]
    Env,
    /// Use this key as-is.
    ServiceKey(String),
}

impl Credentials {
    pub fn service_key(key: impl Into<String>) -> Self {
        Credentials::ServiceKey(key.into())
    }

    /// Resolve the service key for one call.
    pub fn resolve(&self) -> Result<String, TourApiError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using a custom variable lookup.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String, TourApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Credentials::ServiceKey(key) if !key.trim().is_empty() => Ok(key.clone()),
            Credentials::ServiceKey(_) => Err(TourApiError::Configuration(
                "service key is empty".to_string(),
            )),
            Credentials::Env => [PUBLIC_KEY_ENV, SERVER_KEY_ENV]
                .into_iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    TourApiError::Configuration(format!(
                        "tourism API key is not configured; set {} or {}",
                        PUBLIC_KEY_ENV, SERVER_KEY_ENV
                    ))
                }),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Env => write!(f, "Credentials::Env"),
            Credentials::ServiceKey(_) => write!(f, "Credentials::ServiceKey(<redacted>)"),
        }
    }
}
