pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::{Sentiment, SentimentModel};
pub use types::{
    Category, CategoryResult, FeedArticle, PredictionRequest, PredictionResult,
    RssPredictionRequest, RssPredictionResult, SentimentLabel,
};

/// Path of the single-text prediction endpoint.
pub const PREDICT_SENTIMENT_PATH: &str = "/predict-sentiment";

/// Path of the RSS feed prediction endpoint.
pub const PREDICT_RSS_PATH: &str = "/predict-sentiments-from-rss";

pub mod prelude {
    pub use crate::{Error, Result};
    pub use crate::types::*;
    pub use crate::models::{Sentiment, SentimentModel};
}
