//! Remote Store Client
//!
//! Count queries against the hosted `wind_data` table over its REST
//! interface. The client is constructed once at startup and handed to
//! components through context.

use gloo_net::http::{Method, RequestBuilder, Response};

use crate::config::Config;

/// Table holding wind observations.
pub const WIND_TABLE: &str = "wind_data";

/// Message shown when a failure carries no recognizable shape.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error al cargar datos";

/// Failures at the remote store boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure, or a store-reported failure with a message.
    #[error("{0}")]
    Network(String),
    /// The store rejected the access key (401/403).
    #[error("{0}")]
    Auth(String),
    /// The response could not be interpreted.
    #[error("unrecognized response from the data store")]
    Malformed,
}

impl ApiError {
    /// Message rendered in the dashboard error panel.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(msg) | ApiError::Auth(msg) => msg.clone(),
            ApiError::Malformed => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Error body the store attaches to failed requests.
#[derive(Debug, serde::Deserialize)]
struct StoreErrorBody {
    message: String,
}

/// Handle to the remote store. Cheap to clone; shared via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreClient {
    base_url: String,
    anon_key: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.store_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}?select=*", self.base_url, table)
    }

    /// Exact row count of the `wind_data` table.
    ///
    /// Issues a HEAD request with `Prefer: count=exact`; no row bodies cross
    /// the wire and the figure rides in the `Content-Range` response header.
    /// `Ok(None)` means the store reported an unknown count (`*`).
    pub async fn count_observations(&self) -> Result<Option<u64>, ApiError> {
        let response = RequestBuilder::new(&self.table_url(WIND_TABLE))
            .method(Method::HEAD)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(self.status_error(response).await);
        }

        match response.headers().get("content-range") {
            Some(value) => parse_exact_count(&value),
            None => Err(ApiError::Malformed),
        }
    }

    /// Map a non-success response to the error taxonomy.
    async fn status_error(&self, response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<StoreErrorBody>()
            .await
            .ok()
            .map(|body| body.message);

        match (status, message) {
            (401 | 403, Some(msg)) => ApiError::Auth(msg),
            (401 | 403, None) => ApiError::Auth(format!(
                "acceso no autorizado al almacén de datos ({})",
                status
            )),
            (_, Some(msg)) => ApiError::Network(msg),
            (_, None) => ApiError::Malformed,
        }
    }
}

/// Parse the count figure out of a `Content-Range` header (`<range>/<count>`).
/// A `*` figure means the store could not produce an exact count.
fn parse_exact_count(value: &str) -> Result<Option<u64>, ApiError> {
    let (_, total) = value.rsplit_once('/').ok_or(ApiError::Malformed)?;

    match total.trim() {
        "*" => Ok(None),
        n => n.parse().map(Some).map_err(|_| ApiError::Malformed),
    }
}
