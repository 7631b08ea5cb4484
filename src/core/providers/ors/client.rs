//! OpenRouteService client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::core::providers::RoutingProvider;
use crate::core::types::errors::{ProviderError, Result};
use crate::core::types::geo::Coordinate;
use crate::core::types::profile::VehicleProfile;
use crate::core::types::responses::{GeocodeResponse, RouteResponse};

use super::config::OrsConfig;
use super::error::map_http_error;

/// Country restriction applied to every geocode search.
const GEOCODE_COUNTRY: &str = "FRA";
/// Best-match-only result cap.
const GEOCODE_RESULT_SIZE: &str = "1";

/// OpenRouteService gateway: Pelias geocoding plus HGV directions.
#[derive(Debug, Clone)]
pub struct OrsProvider {
    client: reqwest::Client,
    config: OrsConfig,
}

/// Body of the HGV directions request.
#[derive(Debug, Serialize)]
struct RouteRequest {
    coordinates: [[f64; 2]; 2],
    instructions: bool,
    preference: &'static str,
    options: RouteOptions,
}

#[derive(Debug, Serialize)]
struct RouteOptions {
    avoid_borders: &'static str,
    vehicle_type: &'static str,
    profile_params: ProfileParams,
}

#[derive(Debug, Serialize)]
struct ProfileParams {
    restrictions: Restrictions,
}

/// Vehicle restriction block; reproduces the profile verbatim. Note the
/// provider spells `axleload` without an underscore.
#[derive(Debug, Serialize)]
struct Restrictions {
    weight: f64,
    height: f64,
    width: f64,
    length: f64,
    axleload: f64,
    hazmat: bool,
}

impl From<&VehicleProfile> for Restrictions {
    fn from(profile: &VehicleProfile) -> Self {
        Self {
            weight: profile.weight,
            height: profile.height,
            width: profile.width,
            length: profile.length,
            axleload: profile.axle_load,
            hazmat: profile.hazmat,
        }
    }
}

impl OrsProvider {
    /// Create a provider with its own connection pool.
    pub fn new(config: OrsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProviderError::network(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Headers for an API request. Fails with `CredentialsMissing` when no
    /// key is configured, before any network I/O.
    fn request_headers(&self) -> Result<HeaderMap> {
        let key = self.config.api_key.trim();
        if key.is_empty() {
            return Err(ProviderError::CredentialsMissing);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(key)
                .map_err(|e| ProviderError::authentication(format!("invalid API key: {e}")))?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/json, application/geo+json, application/gpx+xml, img/png; charset=utf-8",
            ),
        );
        Ok(headers)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| ProviderError::network(format!("invalid base URL: {e}")))?;
        base.join(path)
            .map_err(|e| ProviderError::network(format!("invalid endpoint: {e}")))
    }

    /// Send a request and decode the body, classifying any non-2xx status
    /// through the error taxonomy.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status.as_u16(), &body, retry_after));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::parsing(e.to_string()))
    }
}

#[async_trait]
impl RoutingProvider for OrsProvider {
    async fn geocode(&self, text: &str, focus: Coordinate) -> Result<GeocodeResponse> {
        let headers = self.request_headers()?;
        let mut url = self.endpoint("/geocode/search")?;
        url.query_pairs_mut()
            .append_pair("text", text)
            .append_pair("boundary.country", GEOCODE_COUNTRY)
            .append_pair("focus.point.lat", &focus.lat.to_string())
            .append_pair("focus.point.lon", &focus.lon.to_string())
            .append_pair("size", GEOCODE_RESULT_SIZE);

        debug!(%text, "geocode request");
        self.execute(self.client.get(url).headers(headers)).await
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: &VehicleProfile,
    ) -> Result<RouteResponse> {
        let headers = self.request_headers()?;
        let url = self.endpoint("/v2/directions/driving-hgv/geojson")?;
        let body = RouteRequest {
            coordinates: [origin.to_lon_lat(), destination.to_lon_lat()],
            instructions: false,
            preference: "fastest",
            options: RouteOptions {
                avoid_borders: "all",
                vehicle_type: "hgv",
                profile_params: ProfileParams {
                    restrictions: Restrictions::from(profile),
                },
            },
        };

        debug!(?origin, ?destination, "route request");
        self.execute(self.client.post(url).headers(headers).json(&body))
            .await
    }
}
