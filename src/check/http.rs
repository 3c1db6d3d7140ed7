use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::check::types::{Check, CheckFailure, encode_params};

fn default_timeout_secs() -> u64 {
    10
}

/// Checks that a URL answers an HTTP GET with an acceptable status.
///
/// Without `expected_status`, any 2xx response passes. The request is made
/// with the blocking client: the runner is strictly sequential and a check
/// blocks until its probe completes or times out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpReachableCheck {
    pub name: String,

    pub url: String,

    /// Exact status required; any 2xx is accepted when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<u16>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpReachableCheck {
    pub const KIND: &'static str = "http_reachable";

    pub fn example() -> Self {
        Self {
            name: "health endpoint responds".to_string(),
            url: "http://localhost:8080/health".to_string(),
            expected_status: Some(200),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Check for HttpReachableCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn execute(&self) -> Result<(), CheckFailure> {
        let url = Url::parse(&self.url)
            .map_err(|e| CheckFailure::error_with(format!("invalid URL '{}'", self.url), e))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| CheckFailure::error_with("cannot build HTTP client", e))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| CheckFailure::error_with(format!("request to {} failed", self.url), e))?;

        let status = response.status();
        match self.expected_status {
            Some(expected) if status.as_u16() != expected => Err(CheckFailure::failed(format!(
                "{} answered {}, expected {}",
                self.url,
                status.as_u16(),
                expected
            ))),
            None if !status.is_success() => Err(CheckFailure::failed(format!(
                "{} answered non-success status {}",
                self.url,
                status.as_u16()
            ))),
            _ => Ok(()),
        }
    }

    fn params(&self) -> crate::Result<Value> {
        encode_params(self)
    }
}
