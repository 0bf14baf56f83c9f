use reqwest::StatusCode;
use reqwest::blocking::{Client, Request};
use std::time::Duration;
use thiserror::Error;

use crate::domain::Location;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const USER_AGENT: &str = "geofinder/1.0";
pub const DEFAULT_LIMIT: i64 = 5;

/// Failures while talking to Nominatim.
///
/// The `Display` output is the diagnostic shown to the user.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("http error: server returned {0}")]
    Status(StatusCode),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parameters for a single `/search` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    /// Passed through as given; Nominatim clamps out-of-range values itself.
    pub limit: i64,
    /// ISO 3166-1 alpha-2 code(s), comma separated. `None` searches worldwide.
    pub country: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            country: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// An empty code is the same as no filter.
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|c| !c.is_empty());
        self
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("format", "json".to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(ref country) = self.country {
            pairs.push(("countrycodes", country.clone()));
        }
        pairs
    }
}

/// Join positional words into one query, separated by single spaces.
///
/// Words are taken as given: `["New York", "City"]` becomes `"New York City"`.
pub fn join_query<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the GET request for a search. Query values are percent-encoded.
pub fn build_search_request(
    client: &Client,
    endpoint: &str,
    params: &SearchParams,
) -> Result<Request, SearchError> {
    client
        .get(endpoint)
        .query(&params.query_pairs())
        .build()
        .map_err(SearchError::Request)
}

/// Decode a Nominatim JSON array. `[]` decodes to an empty list.
pub fn decode_locations(body: &str) -> Result<Vec<Location>, SearchError> {
    Ok(serde_json::from_str(body)?)
}

/// Blocking Nominatim client bound to one endpoint
pub struct NominatimClient {
    client: Client,
    endpoint: String,
}

impl NominatimClient {
    /// # Arguments
    /// * `endpoint` - Full URL of the `/search` resource
    /// * `user_agent` - Sent on every request (Nominatim rejects anonymous clients)
    /// * `timeout` - `None` keeps reqwest's default
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SearchError::Request)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn request(&self, params: &SearchParams) -> Result<Request, SearchError> {
        build_search_request(&self.client, &self.endpoint, params)
    }

    /// Run one search. Non-2xx responses are reported as `Status` without
    /// looking at the body.
    pub fn search(&self, params: &SearchParams) -> Result<Vec<Location>, SearchError> {
        let request = self.request(params)?;
        let response = self.client.execute(request).map_err(SearchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().map_err(SearchError::Http)?;
        decode_locations(&body)
    }
}
