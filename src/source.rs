use crate::config::FinderConfig;
use crate::error::{FinderError, SearchError};
use crate::model::RECIPE_FIELDS;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Fixed bound on the lifetime of one lookup request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of matches requested, starting from the first
pub const RESULT_COUNT: u32 = 12;

/// An external service that answers ingredient queries
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "edamam")
    fn source_name(&self) -> &str;

    /// Issue one lookup and return the decoded response body
    ///
    /// Implementations make a single attempt and never retry.
    async fn fetch(&self, query: &str) -> Result<Value, SearchError>;
}

/// Client for the Edamam recipe search API
pub struct EdamamClient {
    client: Client,
    endpoint: String,
    credentials: Option<(String, String)>,
}

impl EdamamClient {
    /// Create a new client from configuration
    ///
    /// Missing credentials are not an error here; they are reported by
    /// [`RecipeSource::fetch`] before any request is sent.
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(EdamamClient {
            client,
            endpoint: config.endpoint.clone(),
            credentials: config
                .credentials()
                .map(|(id, key)| (id.to_string(), key.to_string())),
        })
    }
}

#[async_trait]
impl RecipeSource for EdamamClient {
    fn source_name(&self) -> &str {
        "edamam"
    }

    async fn fetch(&self, query: &str) -> Result<Value, SearchError> {
        let (app_id, app_key) = self
            .credentials
            .as_ref()
            .ok_or(SearchError::MissingCredentials)?;

        let fields = RECIPE_FIELDS.join(",");
        let to = RESULT_COUNT.to_string();
        debug!("GET {} q={:?} from=0 to={}", self.endpoint, query, to);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("type", "public"),
                ("app_id", app_id.as_str()),
                ("app_key", app_key.as_str()),
                ("q", query),
                ("fields", fields.as_str()),
                ("from", "0"),
                ("to", to.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Recipe service answered {}", status);
            return Err(SearchError::from_status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Recipe service returned {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            debug!("Response body is not JSON: {}", e);
            SearchError::MalformedResponse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name() {
        let client = EdamamClient::new(&FinderConfig::default()).unwrap();
        assert_eq!(client.source_name(), "edamam");
    }

    #[tokio::test]
    async fn test_fetch_requires_both_credentials() {
        // No request can succeed against this endpoint, so reaching the
        // network would surface as a different error
        let config = FinderConfig {
            app_id: Some("id".to_string()),
            app_key: None,
            endpoint: "http://127.0.0.1:1/unreachable".to_string(),
            ..Default::default()
        };
        let client = EdamamClient::new(&config).unwrap();
        let result = client.fetch("chicken").await;
        assert_eq!(result.unwrap_err(), SearchError::MissingCredentials);
    }
}
