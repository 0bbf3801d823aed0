use std::fmt;

use async_trait::async_trait;

use crate::types::SentimentLabel;
use crate::Result;

/// Output of a sentiment model for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self { label, score }
    }
}

#[async_trait]
pub trait SentimentModel: Send + Sync + fmt::Debug {
    /// Name the model is selected by in requests
    fn name(&self) -> &str;

    /// Classify a piece of text
    async fn analyze(&self, text: &str) -> Result<Sentiment>;
}
