//! Client Configuration
//!
//! Where the collection lives and how the controller behaves.

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_COLLECTION_PATH: &str = "/api/blogs";
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3000;

/// What a like does besides bumping the local counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikePolicy {
    /// Write the incremented record back with `update`
    #[default]
    Persist,
    /// Likes stay in the local mirror and are lost on reload
    LocalOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub collection_path: String,
    pub notification_ttl_ms: u64,
    pub like_policy: LikePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            like_policy: LikePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_collection_path(mut self, path: impl Into<String>) -> Self {
        self.collection_path = path.into();
        self
    }

    pub fn with_like_policy(mut self, like_policy: LikePolicy) -> Self {
        self.like_policy = like_policy;
        self
    }

    /// Full collection URL, joined with exactly one slash
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.collection_path.trim_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = ClientConfig::default()
            .with_base_url("http://example.test/")
            .with_collection_path("/persons/");
        assert_eq!(config.endpoint(), "http://example.test/persons");
    }

    #[test]
    fn test_from_json_partial() {
        let config = ClientConfig::from_json(r#"{"like_policy":"local_only"}"#).unwrap();
        assert_eq!(config.like_policy, LikePolicy::LocalOnly);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.notification_ttl(), Duration::from_secs(3));
    }
}
