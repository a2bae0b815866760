//! Blocking GitHub REST client for the profile panel.
//!
//! One request per lookup, no retries and no caching. Any non-success status
//! or unparseable body is reported as `Error::Failure`.

use crate::profile::ProfileSummary;
use crate::storage::normalize_username;
use crate::{EditorConfig, Error, Result};
use reqwest::blocking::Client;
use url::Url;

pub struct GitHubClient {
    client: Client,
    base: Url,
}

impl GitHubClient {
    pub fn new(config: &EditorConfig) -> Result<Self> {
        let base = Url::parse(&config.api_base_url)
            .map_err(|e| Error::ConfigError(format!("bad API base URL {:?}: {}", config.api_base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "API base URL {:?} cannot have paths",
                config.api_base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// `{base}/users/{username}` with the username escaped as one path segment.
    pub fn user_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::ConfigError(format!("API base URL {} cannot have paths", self.base)))?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }

    /// Fetch and normalize the profile of `username`.
    pub fn fetch(&self, username: &str) -> Result<ProfileSummary> {
        let username = normalize_username(username)?;
        let url = self.user_url(&username)?;
        log::debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| Error::Failure(format!("HTTP GET failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::Failure(format!("GitHub returned {} for {}", status, username)));
        }

        let body = res
            .text()
            .map_err(|e| Error::Failure(format!("Failed to read response body: {}", e)))?;

        ProfileSummary::from_json(&body)
            .map_err(|e| Error::Failure(format!("Malformed user payload: {}", e)))
    }
}
