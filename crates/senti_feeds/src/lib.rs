use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use senti_core::{Error, FeedArticle, Result};

pub mod parser;

pub use parser::{parse_feed, plain_text};

/// Entries read from a feed unless told otherwise.
pub const DEFAULT_ARTICLE_LIMIT: usize = 50;

/// Downloads `url` and returns its first `limit` entries.
pub async fn fetch_articles(client: &Client, url: &str, limit: usize) -> Result<Vec<FeedArticle>> {
    let url = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("unsupported scheme: {}", url.scheme())));
    }

    info!("📡 Fetching feed {}", url);
    let body = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!("Feed {} returned {} bytes", url, body.len());

    let articles = parse_feed(&body, limit)?;
    info!("📰 Read {} articles from {}", articles.len(), url);
    Ok(articles)
}

pub mod prelude {
    pub use super::{fetch_articles, parse_feed, DEFAULT_ARTICLE_LIMIT};
    pub use senti_core::{FeedArticle, Result, Error};
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_articles() {
        let router = Router::new().route(
            "/feed.xml",
            get(|| async {
                "<rss><channel><item><title>Good news</title><description>Great day</description></item></channel></rss>"
            }),
        );
        let origin = serve(router).await;

        let articles = fetch_articles(&Client::new(), &format!("{}/feed.xml", origin), DEFAULT_ARTICLE_LIMIT)
            .await
            .unwrap();
        assert_eq!(articles, vec![FeedArticle::new("Good news", "Great day")]);
    }

    #[tokio::test]
    async fn test_fetch_missing_feed() {
        let origin = serve(Router::new()).await;
        let result = fetch_articles(&Client::new(), &format!("{}/missing.xml", origin), 10).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_rejects_non_http_urls() {
        let result = fetch_articles(&Client::new(), "file:///etc/passwd", 10).await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
        let result = fetch_articles(&Client::new(), "not a url", 10).await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
