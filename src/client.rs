//! Blocking HTTP client for the provincial-connections API.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::path::LocalizedText;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The service answered 404; carries its message.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsBody {
    pub success: bool,
    pub connections: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceConnectionsBody {
    pub success: bool,
    pub province: String,
    pub connections: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRouteBody {
    pub success: bool,
    pub connected: bool,
    pub route: LocalizedText,
    pub route_details: Vec<LocalizedText>,
    pub hops: usize,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedRoutesBody {
    pub en: Vec<String>,
    pub prs: Vec<String>,
    pub pbt: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRoutesBody {
    pub success: bool,
    pub routes: LocalizedRoutesBody,
    pub route_details: Vec<Vec<LocalizedText>>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestRouteBody {
    pub success: bool,
    pub route: LocalizedText,
    pub route_details: Vec<LocalizedText>,
    pub hops: usize,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct RouteServiceClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl RouteServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, err)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn connections(&self) -> Result<ConnectionsBody, ClientError> {
        self.get(&[], None)
    }

    pub fn province_connections(
        &self,
        province: &str,
    ) -> Result<ProvinceConnectionsBody, ClientError> {
        self.get(&[province], None)
    }

    pub fn check_route(&self, from: &str, to: &str) -> Result<CheckRouteBody, ClientError> {
        self.get(&["check-route", from, to], None)
    }

    pub fn find_routes(
        &self,
        from: &str,
        to: &str,
        max_hops: Option<usize>,
    ) -> Result<FindRoutesBody, ClientError> {
        let query = max_hops.map(|hops| hops.to_string());
        self.get(&["find-routes", from, to], query.as_deref())
    }

    pub fn shortest_route(&self, from: &str, to: &str) -> Result<ShortestRouteBody, ClientError> {
        self.get(&["shortest-route", from, to], None)
    }

    /// Builds `<base>/api/provincial-connections/<segments...>`; each
    /// segment is percent-encoded.
    fn url(&self, segments: &[&str], max_hops: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty()
                .extend(["api", "provincial-connections"])
                .extend(segments);
        }
        if let Some(hops) = max_hops {
            url.query_pairs_mut().append_pair("maxHops", hops);
        }
        Ok(url)
    }

    fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        max_hops: Option<&str>,
    ) -> Result<T, ClientError> {
        let url = self.url(segments, max_hops)?;
        let response = self.client.get(url).send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>()?);
        }

        let message = response
            .json::<ErrorBody>()
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());
        if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
