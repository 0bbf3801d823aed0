use std::net::SocketAddr;

use reqwest::Client;

use senti_core::Result;
use senti_feeds::DEFAULT_ARTICLE_LIMIT;
use senti_inference::{InferenceConfig, ModelRegistry};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_articles: usize,
    pub inference: InferenceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_articles: DEFAULT_ARTICLE_LIMIT,
            inference: InferenceConfig::default(),
        }
    }
}

pub struct AppState {
    pub models: ModelRegistry,
    pub http: Client,
    pub max_articles: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            models: ModelRegistry::with_defaults(&config.inference)?,
            http: Client::builder().build()?,
            max_articles: config.max_articles,
        })
    }
}
