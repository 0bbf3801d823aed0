use std::fmt;

use senti_core::{Result, Sentiment, SentimentLabel};

use super::SentimentModel;

/// Calls everything neutral. Handy for wiring tests.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SentimentModel for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn analyze(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment::new(SentimentLabel::Neutral, 0.0))
    }
}
