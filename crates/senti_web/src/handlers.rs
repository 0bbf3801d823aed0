use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::info;

use senti_core::{
    PredictionRequest, PredictionResult, RssPredictionRequest, RssPredictionResult,
};
use senti_inference::{analyze_articles, chart_data};

use crate::error::ApiError;
use crate::AppState;

pub async fn predict_sentiment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let model = state.models.get(&request.model)?;
    let sentiment = model.analyze(&request.text).await?;
    info!("🧠 {} -> {} ({:.2})", model.name(), sentiment.label, sentiment.score);

    Ok(Json(PredictionResult {
        prediction: sentiment.score,
        label: sentiment.label.to_string(),
    }))
}

pub async fn predict_sentiments_from_rss(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RssPredictionRequest>,
) -> Result<Json<RssPredictionResult>, ApiError> {
    let model = state.models.get(&request.model)?;
    let articles =
        senti_feeds::fetch_articles(&state.http, &request.feed_url, state.max_articles).await?;
    let sentiments = analyze_articles(model.as_ref(), &articles).await?;
    info!("🧠 {} analyzed {} articles from {}", model.name(), sentiments.len(), request.feed_url);

    Ok(Json(chart_data(&sentiments)))
}

pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.models.available())
}
