// Query builders for every outbound call. A request is plain data, a URL
// plus query parameters, so it can be asserted on without a network and
// handed to whatever `HttpGet` implementation is in use.

use crate::config::Endpoints;
use crate::error::DemoError;
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub url: String,
    /// Query parameters, unencoded. The executor encodes them.
    pub params: Vec<(String, String)>,
}

impl QueryRequest {
    pub fn new(url: impl Into<String>) -> Self {
        QueryRequest {
            url: url.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// Look up a parameter value by name.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The URL with its parameters percent-encoded, as it goes on the wire.
    pub fn full_url(&self) -> Result<Url, DemoError> {
        Url::parse_with_params(&self.url, &self.params)
            .map_err(|e| DemoError::InvalidUrl(format!("{}: {e}", self.url)))
    }
}

/// Append `segments` to `base`, each one percent-encoded as a single path
/// segment, so an identifier like `a/b` cannot escape its slot.
fn with_path(base: &str, segments: &[&str]) -> Result<String, DemoError> {
    let mut url = Url::parse(base).map_err(|e| DemoError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| DemoError::InvalidUrl(format!("{base} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.to_string())
}

/// `GET {jsonplaceholder}/users/{id}`
pub fn user(endpoints: &Endpoints, id: &str) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.jsonplaceholder, &["users", id])?))
}

/// `GET {jsonplaceholder}/posts?userId={id}`
pub fn posts_by_user(endpoints: &Endpoints, id: &str) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.jsonplaceholder, &["posts"])?).param("userId", id))
}

/// `GET {coinpaprika}/tickers/{coin}`
pub fn ticker(endpoints: &Endpoints, coin: &str) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.coinpaprika, &["tickers", coin])?))
}

pub fn geocode(endpoints: &Endpoints, city: &str) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.geocoding, &["search"])?)
        .param("name", city)
        .param("count", "1")
        .param("language", "en")
        .param("format", "json"))
}

/// Coordinates are passed through as the geocoder returned them.
pub fn forecast(
    endpoints: &Endpoints,
    latitude: &str,
    longitude: &str,
) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.forecast, &["forecast"])?)
        .param("latitude", latitude)
        .param("longitude", longitude)
        .param("current_weather", "true"))
}

pub fn todos(endpoints: &Endpoints, completed: bool) -> Result<QueryRequest, DemoError> {
    Ok(QueryRequest::new(with_path(&endpoints.jsonplaceholder, &["todos"])?)
        .param("completed", if completed { "true" } else { "false" }))
}
