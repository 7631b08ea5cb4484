//! OpenRouteService connection settings.

use serde::{Deserialize, Serialize};

/// Default public API host.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Connection settings for the OpenRouteService API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrsConfig {
    /// API token, sent verbatim in the `Authorization` header (the ORS key
    /// is a JWT-style token, not a Bearer credential). May be empty, in
    /// which case every call fails with `CredentialsMissing` before any
    /// network I/O.
    pub api_key: String,
    /// API host; the public `api.openrouteservice.org` unless overridden.
    pub base_url: String,
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `ORS_API_KEY` and `ORS_BASE_URL` from the environment, loading
    /// a `.env` file first when one is present. A missing key yields an
    /// empty string rather than an error; the provider reports
    /// `CredentialsMissing` at call time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_key: std::env::var("ORS_API_KEY").unwrap_or_default(),
            base_url: std::env::var("ORS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
