// HTTP executor: a small blocking client that performs exactly one GET per
// call. It is synchronous on purpose, matching the one-request-at-a-time
// flow of the menu.

use crate::config::Config;
use crate::error::DemoError;
use crate::query::QueryRequest;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Status code and decoded body of one GET.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub status: u16,
    /// `None` when the payload was empty or not JSON.
    pub body: Option<Value>,
}

impl QueryResult {
    pub fn new(status: u16, body: Value) -> Self {
        QueryResult {
            status,
            body: Some(body),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// The decoded body, or a decode error when the payload was not JSON.
    pub fn json(&self) -> Result<&Value, DemoError> {
        self.body
            .as_ref()
            .ok_or_else(|| DemoError::Decode(format!("HTTP {} response is not JSON", self.status)))
    }
}

/// Anything that can execute a `QueryRequest`. The routines only see this
/// trait, so tests can substitute a canned transport.
pub trait HttpGet {
    fn get(&self, request: &QueryRequest) -> Result<QueryResult, DemoError>;
}

/// Blocking reqwest client with a bounded per-request timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    show_progress: bool,
}

impl ApiClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("api-query-demo/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            show_progress: config.show_progress,
        })
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }

    fn fetch(&self, request: &QueryRequest) -> reqwest::Result<(u16, String)> {
        let res = self.client.get(&request.url).query(&request.params).send()?;
        let status = res.status().as_u16();
        let text = res.text()?;
        Ok((status, text))
    }
}

impl HttpGet for ApiClient {
    fn get(&self, request: &QueryRequest) -> Result<QueryResult, DemoError> {
        match request.full_url() {
            Ok(url) => debug!("GET {url}"),
            Err(_) => debug!("GET {} params={:?}", request.url, request.params),
        }

        let spinner = self.spinner();
        let outcome = self.fetch(request);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let (status, text) = outcome.map_err(|e| {
            if e.is_timeout() {
                debug!("request to {} timed out", request.url);
            }
            DemoError::Transport {
                url: request.url.clone(),
                source: Box::new(e.without_url()),
            }
        })?;
        info!("GET {} -> {}", request.url, status);

        let body = serde_json::from_str(&text).ok();
        if body.is_none() && !text.is_empty() {
            debug!("{} returned a non-JSON body ({} bytes)", request.url, text.len());
        }
        Ok(QueryResult { status, body })
    }
}
