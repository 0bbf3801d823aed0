mod common;

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use common::serve;
use senti_client::{ClientConfig, HttpApi, PredictionApi};
use senti_core::{Error, PredictionRequest, RssPredictionRequest};

fn sentiment_request() -> PredictionRequest {
    PredictionRequest {
        text: "I love this".into(),
        model: "basic".into(),
    }
}

fn rss_request() -> RssPredictionRequest {
    RssPredictionRequest {
        feed_url: "http://example.com/feed".into(),
        model: "basic".into(),
    }
}

#[tokio::test]
async fn test_posts_json_and_parses_prediction() {
    let router = Router::new().route(
        "/predict-sentiment",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"text": "I love this", "model": "basic"}));
            Json(json!({"prediction": 0.92, "label": "Positive"}))
        }),
    );
    let api = HttpApi::new(&ClientConfig::new(serve(router).await)).unwrap();

    let result = api.predict_sentiment(&sentiment_request()).await.unwrap();
    assert_eq!(result.prediction, 0.92);
    assert_eq!(result.label, "Positive");
}

#[tokio::test]
async fn test_posts_feed_request() {
    let router = Router::new().route(
        "/predict-sentiments-from-rss",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["feed_url"], "http://example.com/feed");
            let counts = json!({"labels": ["positive", "neutral", "negative"], "data": [3, 1, 0]});
            Json(json!({"titles": counts, "descriptions": counts, "both": counts}))
        }),
    );
    let api = HttpApi::new(&ClientConfig::new(serve(router).await)).unwrap();

    let result = api.predict_sentiments_from_rss(&rss_request()).await.unwrap();
    assert_eq!(result.titles.labels, vec!["positive", "neutral", "negative"]);
    assert_eq!(result.titles.data, vec![3.0, 1.0, 0.0]);
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let router = Router::new().route(
        "/predict-sentiment",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let api = HttpApi::new(&ClientConfig::new(serve(router).await)).unwrap();

    let err = api.predict_sentiment(&sentiment_request()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "{:?}", err);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let router = Router::new().route("/predict-sentiment", post(|| async { "{not json" }));
    let api = HttpApi::new(&ClientConfig::new(serve(router).await)).unwrap();

    let err = api.predict_sentiment(&sentiment_request()).await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)), "{:?}", err);
}

#[tokio::test]
async fn test_missing_category_is_parse_error() {
    let router = Router::new().route(
        "/predict-sentiments-from-rss",
        post(|| async {
            let counts = json!({"labels": ["Positive"], "data": [1]});
            Json(json!({"titles": counts, "descriptions": counts}))
        }),
    );
    let api = HttpApi::new(&ClientConfig::new(serve(router).await)).unwrap();

    let err = api.predict_sentiments_from_rss(&rss_request()).await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)), "{:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = ClientConfig::new(origin).with_timeout(Duration::from_secs(5));
    let api = HttpApi::new(&config).unwrap();
    let err = api.predict_sentiment(&sentiment_request()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "{:?}", err);
}
