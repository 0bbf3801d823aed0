pub mod articles;
pub mod models;

pub use articles::{analyze_articles, chart_data, ArticleSentiment};
pub use models::{create_model, ModelRegistry, AVAILABLE_MODELS};

/// Polarity magnitude below which text counts as neutral.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub neutral_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
        }
    }
}

pub mod prelude {
    pub use super::{analyze_articles, chart_data, create_model, InferenceConfig, ModelRegistry};
    pub use senti_core::{Error, FeedArticle, Result, Sentiment, SentimentModel};
}
