//! N2YO REST API client
//!
//! Every call follows the same steps: validate the scalar arguments in
//! parameter order, resolve the observer location (per-call override, then
//! the configured default), build the endpoint path, send the GET with the
//! `apiKey` query parameter and record the transaction count reported in
//! the response.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{N2yoError, Result};
use crate::location::{Location, LocationResolution, resolve_location};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};

const API_KEY_PARAM: &str = "apiKey";

/// Body of a successful N2YO response plus the transaction count it carried
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Raw JSON body, passed through untouched
    pub body: Value,
    /// `info.transactionscount`, if the body had one
    pub transactions_count: Option<u64>,
}

impl ApiResponse {
    pub fn from_body(body: Value) -> Self {
        let transactions_count = extract_transactions_count(&body);
        Self {
            body,
            transactions_count,
        }
    }

    /// Decode the body into one of the typed response models.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.body)?)
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Read `info.transactionscount` from a response body
pub fn extract_transactions_count(body: &Value) -> Option<u64> {
    body.get("info")?.get("transactionscount")?.as_u64()
}

/// Client for the N2YO satellite API.
///
/// Holds the API key and an optional default observer location. Methods
/// take `&self`, so one client can serve concurrent calls.
///
/// Bodies are passed through untouched, with one exception: a 2xx body
/// carrying an `error` string (N2YO's answer to e.g. a bad API key) is
/// returned as [`N2yoError::Api`]. The transaction count is still recorded
/// before that check.
pub struct N2yoClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    /// Last count seen in any response (last write wins)
    transactions_count: AtomicU64,
}

impl std::fmt::Debug for N2yoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("N2yoClient")
            .field("base_url", &self.config.base_url)
            .field("default_location", &self.config.default_location)
            .field("transactions_count", &self.transactions_count())
            .finish_non_exhaustive()
    }
}

impl N2yoClient {
    /// Create a client backed by reqwest
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        tracing::debug!("N2YO client created for {}", config.base_url);
        Self {
            config,
            transport,
            transactions_count: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn default_location(&self) -> Option<Location> {
        self.config.default_location
    }

    /// Transaction count from the most recently processed response.
    ///
    /// With concurrent calls this is whichever response finished last; use
    /// [`ApiResponse::transactions_count`] for the value tied to one call.
    pub fn transactions_count(&self) -> u64 {
        self.transactions_count.load(Ordering::Relaxed)
    }

    /// Retrieve the Two Line Elements of a satellite.
    ///
    /// # Arguments
    /// * `norad_id` - NORAD catalog number, e.g. 25544 for the ISS
    pub async fn get_tle(&self, norad_id: u32) -> Result<ApiResponse> {
        require_nonzero(norad_id, "a valid NORAD ID")?;
        self.execute(Endpoint::Tle { norad_id }).await
    }

    /// Retrieve the satellite's future positions, one per second starting
    /// at the current UTC time, with azimuth/elevation seen from the
    /// observer.
    ///
    /// # Arguments
    /// * `norad_id` - NORAD catalog number
    /// * `seconds` - Number of positions to return (N2YO allows up to 300)
    /// * `location` - Observer; falls back to the configured default
    pub async fn get_future_positions(
        &self,
        norad_id: u32,
        seconds: u32,
        location: Option<Location>,
    ) -> Result<ApiResponse> {
        require_nonzero(norad_id, "a valid NORAD ID")?;
        require_nonzero(seconds, "a number of future positions to calculate")?;
        let location = self.require_location(location)?;

        self.execute(Endpoint::Positions {
            norad_id,
            location,
            seconds,
        })
        .await
    }

    /// Predicted passes where the satellite is optically visible to the
    /// observer.
    ///
    /// # Arguments
    /// * `norad_id` - NORAD catalog number
    /// * `days` - Prediction window in days (N2YO allows up to 10)
    /// * `min_visibility_seconds` - Minimum visible duration for a pass to count
    /// * `location` - Observer; falls back to the configured default
    pub async fn get_visual_passes(
        &self,
        norad_id: u32,
        days: u32,
        min_visibility_seconds: u32,
        location: Option<Location>,
    ) -> Result<ApiResponse> {
        require_nonzero(norad_id, "a valid NORAD ID")?;
        require_nonzero(days, "a number of days of prediction")?;
        require_nonzero(min_visibility_seconds, "a minimum visibility in seconds")?;
        let location = self.require_location(location)?;

        self.execute(Endpoint::VisualPasses {
            norad_id,
            location,
            days,
            min_visibility_seconds,
        })
        .await
    }

    /// Predicted passes above a minimum elevation, regardless of optical
    /// visibility.
    ///
    /// # Arguments
    /// * `norad_id` - NORAD catalog number
    /// * `days` - Prediction window in days (N2YO allows up to 10)
    /// * `min_elevation_degrees` - Minimum peak elevation for a pass to count
    /// * `location` - Observer; falls back to the configured default
    pub async fn get_radio_passes(
        &self,
        norad_id: u32,
        days: u32,
        min_elevation_degrees: u32,
        location: Option<Location>,
    ) -> Result<ApiResponse> {
        require_nonzero(norad_id, "a valid NORAD ID")?;
        require_nonzero(days, "a number of days of prediction")?;
        require_nonzero(min_elevation_degrees, "a minimum elevation in degrees")?;
        let location = self.require_location(location)?;

        self.execute(Endpoint::RadioPasses {
            norad_id,
            location,
            days,
            min_elevation_degrees,
        })
        .await
    }

    /// All objects of a category within `search_radius_degrees` of the
    /// observer's zenith.
    ///
    /// # Arguments
    /// * `search_radius_degrees` - Search radius, 0-90 on the N2YO side
    /// * `category_id` - N2YO category id, see [`Category`](crate::Category)
    /// * `location` - Observer; falls back to the configured default
    pub async fn get_objects_above(
        &self,
        search_radius_degrees: u32,
        category_id: u32,
        location: Option<Location>,
    ) -> Result<ApiResponse> {
        require_nonzero(search_radius_degrees, "a search radius")?;
        require_nonzero(category_id, "a category")?;
        let location = self.require_location(location)?;

        self.execute(Endpoint::Above {
            location,
            search_radius_degrees,
            category_id,
        })
        .await
    }

    fn require_location(&self, location: Option<Location>) -> Result<Location> {
        match resolve_location(location, self.config.default_location) {
            LocationResolution::Resolved(location) => Ok(location),
            LocationResolution::Missing => Err(N2yoError::invalid(
                "Need an observer location (latitude, longitude and altitude)",
            )),
        }
    }

    fn build_request(&self, endpoint: &Endpoint) -> ApiRequest {
        ApiRequest {
            base_url: self.config.base_url.clone(),
            path: endpoint.path(),
            query: vec![(API_KEY_PARAM.to_string(), self.config.api_key.clone())],
        }
    }

    async fn execute(&self, endpoint: Endpoint) -> Result<ApiResponse> {
        let request = self.build_request(&endpoint);
        tracing::debug!("GET {} ({})", request.path, endpoint.name());

        let body = self
            .transport
            .get_json(&request)
            .await
            .inspect_err(|e| tracing::warn!("N2YO {} request failed: {}", endpoint.name(), e))?;

        let response = ApiResponse::from_body(body);
        if let Some(count) = response.transactions_count {
            self.transactions_count.store(count, Ordering::Relaxed);
        }
        tracing::debug!(
            "N2YO {} response received (transactions: {:?})",
            endpoint.name(),
            response.transactions_count
        );

        if let Some(message) = response.body.get("error").and_then(Value::as_str) {
            tracing::warn!("N2YO {} returned an error: {}", endpoint.name(), message);
            return Err(N2yoError::Api(message.to_string()));
        }

        Ok(response)
    }
}

fn require_nonzero(value: u32, what: &str) -> Result<()> {
    if value == 0 {
        return Err(N2yoError::invalid(format!("Need {}", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_transactions_count() {
        let body = json!({"info": {"satid": 25544, "transactionscount": 5}, "tle": ""});
        assert_eq!(extract_transactions_count(&body), Some(5));
        assert_eq!(extract_transactions_count(&json!({"tle": ""})), None);
        assert_eq!(
            extract_transactions_count(&json!({"info": {"transactionscount": "x"}})),
            None
        );
    }

    #[test]
    fn test_require_nonzero() {
        assert!(require_nonzero(1, "x").is_ok());
        let err = require_nonzero(0, "a valid NORAD ID").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: Need a valid NORAD ID");
    }

    #[test]
    fn test_new_client_starts_at_zero() {
        let client = N2yoClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), crate::DEFAULT_BASE_URL);
        assert_eq!(client.transactions_count(), 0);
    }

    #[test]
    fn test_request_carries_api_key() {
        let client = N2yoClient::new(ClientConfig::new("SECRET")).unwrap();
        let request = client.build_request(&Endpoint::Tle { norad_id: 25544 });
        assert_eq!(request.path, "/tle/25544");
        assert_eq!(request.query_value("apiKey"), Some("SECRET"));
    }
}
