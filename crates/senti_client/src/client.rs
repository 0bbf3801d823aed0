use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use senti_core::{Category, PredictionResult, Result, RssPredictionResult};

use crate::api::PredictionApi;
use crate::canvas::ChartCanvas;
use crate::chart::ChartRegistry;
use crate::form;
use crate::logging::Logger;
use crate::page::Page;
use crate::render;

/// Ties a page, the prediction endpoints and the chart registry together.
///
/// The registry is owned here and only reached through its mutex, so flows
/// may run on any runtime thread. Nothing cancels or orders overlapping
/// calls; whichever response resolves last is what the page shows.
pub struct SentimentClient<P, A, C> {
    page: P,
    api: A,
    charts: Mutex<ChartRegistry<C>>,
    logger: Logger,
}

impl<P, A, C> SentimentClient<P, A, C>
where
    P: Page,
    A: PredictionApi,
    C: ChartCanvas,
{
    pub fn new(page: P, api: A, canvas: C) -> Self {
        Self {
            page,
            api,
            charts: Mutex::new(ChartRegistry::new(canvas)),
            logger: Logger::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn charts(&self) -> &Mutex<ChartRegistry<C>> {
        &self.charts
    }

    /// Reads `text` and `model`, asks for a prediction and shows it.
    pub async fn try_predict_sentiment(&self) -> Result<PredictionResult> {
        let request = form::read_prediction_request(&self.page)?;
        let result = self.api.predict_sentiment(&request).await?;
        render::show_prediction(&self.page, &result)?;
        Ok(result)
    }

    /// Reads `rss-url` and `model`, asks for feed tallies and renders one
    /// chart per category. Nothing is drawn unless every category is valid.
    pub async fn try_predict_sentiments_from_rss(&self) -> Result<RssPredictionResult> {
        let request = form::read_rss_request(&self.page)?;
        let result = self.api.predict_sentiments_from_rss(&request).await?;
        result.validate()?;

        let mut charts = self.charts.lock().await;
        for category in Category::ALL {
            let series = result.category(category);
            charts.render(category.as_str(), series.labels.clone(), series.data.clone())?;
        }
        Ok(result)
    }

    /// Fire-and-forget form of [`Self::try_predict_sentiment`]: failures are
    /// logged and swallowed.
    pub async fn predict_sentiment(&self) {
        let logger = self.logger.clone().with_prefix("[predict-sentiment]");
        match self.try_predict_sentiment().await {
            Ok(result) => logger.debug(&format!("{} ({:.2})", result.label, result.prediction)),
            Err(e) => logger.error(&format!("Error: {}", e)),
        }
    }

    /// Fire-and-forget form of [`Self::try_predict_sentiments_from_rss`].
    pub async fn predict_sentiments_from_rss(&self) {
        let logger = self.logger.clone().with_prefix("[predict-sentiments-from-rss]");
        match self.try_predict_sentiments_from_rss().await {
            Ok(_) => logger.debug("charts rendered"),
            Err(e) => logger.error(&format!("Error: {}", e)),
        }
    }
}

impl<P, A, C> SentimentClient<P, A, C>
where
    P: Page + 'static,
    A: PredictionApi + 'static,
    C: ChartCanvas + 'static,
{
    /// Starts the single-text flow and returns without waiting for it.
    pub fn spawn_predict_sentiment(self: &Arc<Self>) -> JoinHandle<()> {
        let client = Arc::clone(self);
        tokio::spawn(async move { client.predict_sentiment().await })
    }

    /// Starts the feed flow and returns without waiting for it.
    pub fn spawn_predict_sentiments_from_rss(self: &Arc<Self>) -> JoinHandle<()> {
        let client = Arc::clone(self);
        tokio::spawn(async move { client.predict_sentiments_from_rss().await })
    }
}
