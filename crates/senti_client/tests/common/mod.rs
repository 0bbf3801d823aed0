#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use senti_client::PredictionApi;
use senti_core::{
    CategoryResult, Error, PredictionRequest, PredictionResult, Result, RssPredictionRequest,
    RssPredictionResult,
};

pub struct Reply<T> {
    result: std::result::Result<T, String>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> Reply<T> {
    pub fn ok(value: T) -> Self {
        Self { result: Ok(value), gate: None }
    }

    /// A transport failure, as when the connection is refused.
    pub fn refused() -> Self {
        Self {
            result: Err("connection refused".to_string()),
            gate: None,
        }
    }

    /// Resolves only once the returned sender fires.
    pub fn gated(value: T) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { result: Ok(value), gate: Some(rx) }, tx)
    }

    async fn resolve(self) -> Result<T> {
        if let Some(gate) = self.gate {
            let _ = gate.await;
        }
        self.result
            .map_err(|msg| Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, msg)))
    }
}

/// Scripted prediction endpoints: replies are handed out in call order.
#[derive(Default)]
pub struct FakeApi {
    sentiment: Mutex<VecDeque<Reply<PredictionResult>>>,
    rss: Mutex<VecDeque<Reply<RssPredictionResult>>>,
    sentiment_requests: Mutex<Vec<PredictionRequest>>,
    rss_requests: Mutex<Vec<RssPredictionRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sentiment(&self, reply: Reply<PredictionResult>) {
        self.sentiment.lock().unwrap().push_back(reply);
    }

    pub fn push_rss(&self, reply: Reply<RssPredictionResult>) {
        self.rss.lock().unwrap().push_back(reply);
    }

    pub fn sentiment_requests(&self) -> Vec<PredictionRequest> {
        self.sentiment_requests.lock().unwrap().clone()
    }

    pub fn rss_requests(&self) -> Vec<RssPredictionRequest> {
        self.rss_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionApi for FakeApi {
    async fn predict_sentiment(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.sentiment_requests.lock().unwrap().push(request.clone());
        let reply = self
            .sentiment
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted sentiment reply");
        reply.resolve().await
    }

    async fn predict_sentiments_from_rss(
        &self,
        request: &RssPredictionRequest,
    ) -> Result<RssPredictionResult> {
        self.rss_requests.lock().unwrap().push(request.clone());
        let reply = self.rss.lock().unwrap().pop_front().expect("no scripted rss reply");
        reply.resolve().await
    }
}

pub fn prediction(prediction: f64, label: &str) -> PredictionResult {
    PredictionResult {
        prediction,
        label: label.to_string(),
    }
}

pub fn series(labels: &[&str], data: &[f64]) -> CategoryResult {
    CategoryResult::new(labels.iter().map(|l| l.to_string()).collect(), data.to_vec())
}

pub fn rss_result(titles: &[f64], descriptions: &[f64], both: &[f64]) -> RssPredictionResult {
    let labels = ["positive", "neutral", "negative"];
    RssPredictionResult {
        titles: series(&labels, titles),
        descriptions: series(&labels, descriptions),
        both: series(&labels, both),
    }
}

/// Counts ERROR events seen while the guard is alive on this thread.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub fn capture_errors() -> (ErrorCounter, tracing::subscriber::DefaultGuard) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}

/// Serves `router` on an ephemeral local port and returns its origin.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
