use std::time::Duration;

use url::Url;

use senti_core::Result;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_MODEL: &str = "lexicon";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the endpoint paths are resolved against
    pub server_url: String,
    /// Per-request timeout, unset means wait for the transport
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.server_url)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
