use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use senti_core::{
    PredictionRequest, PredictionResult, Result, RssPredictionRequest, RssPredictionResult,
    PREDICT_RSS_PATH, PREDICT_SENTIMENT_PATH,
};

use crate::config::ClientConfig;

/// The two prediction endpoints as seen from the client.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn predict_sentiment(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    async fn predict_sentiments_from_rss(
        &self,
        request: &RssPredictionRequest,
    ) -> Result<RssPredictionResult>;
}

/// JSON-over-HTTP dispatcher. Paths are root-relative to the configured
/// server, like a page issuing `fetch("/predict-sentiment")`.
pub struct HttpApi {
    client: Arc<Client>,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: Arc::new(builder.build()?),
            base_url: config.base_url()?,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        // Read as text first so a malformed body surfaces as a parse error
        // rather than a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl fmt::Debug for HttpApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpApi")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

#[async_trait]
impl PredictionApi for HttpApi {
    async fn predict_sentiment(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.post(PREDICT_SENTIMENT_PATH, request).await
    }

    async fn predict_sentiments_from_rss(
        &self,
        request: &RssPredictionRequest,
    ) -> Result<RssPredictionResult> {
        let result: RssPredictionResult = self.post(PREDICT_RSS_PATH, request).await?;
        result.validate()?;
        Ok(result)
    }
}
