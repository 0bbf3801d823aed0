use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tracing::{info, Level};

use senti_client::config::{DEFAULT_MODEL, DEFAULT_SERVER_URL};
use senti_client::{
    ids, init_logging, ClientConfig, HttpApi, MemoryCanvas, MemoryPage, Page, SentimentClient,
    TextCanvas,
};
use senti_core::Result;
use senti_inference::{InferenceConfig, DEFAULT_NEUTRAL_THRESHOLD};
use senti_web::ServerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sentiment predictions for text and RSS feeds", long_about = None)]
struct Cli {
    /// Origin of the prediction service
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    server_url: String,
    /// Request timeout (e.g. 30s, 1m 30s). Unset waits indefinitely.
    #[arg(long, global = true, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the prediction service
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: SocketAddr,
        /// Polarity below which text counts as neutral
        #[arg(long, default_value_t = DEFAULT_NEUTRAL_THRESHOLD)]
        neutral_threshold: f64,
        /// Entries read from each feed
        #[arg(long, default_value_t = default_max_articles())]
        max_articles: usize,
    },
    /// Predict the sentiment of a piece of text
    Predict {
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        text: String,
    },
    /// Chart the sentiment of an RSS feed's articles
    Rss {
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        feed_url: String,
    },
    /// List the models the service offers
    Models,
}

fn default_max_articles() -> usize {
    ServerConfig::default().max_articles
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.server_url.clone());
        match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}

async fn predict(config: &ClientConfig, model: &str, text: &str) -> Result<()> {
    let page = MemoryPage::sentiment_page();
    page.set_value(ids::TEXT, text)?;
    page.set_value(ids::MODEL, model)?;

    let client = SentimentClient::new(page, HttpApi::new(config)?, MemoryCanvas::sentiment_canvases());
    client.try_predict_sentiment().await?;

    let page = client.page();
    println!(
        "{} {} [{}]",
        page.text(ids::SCORE)?,
        page.text(ids::LABEL)?,
        page.classes(ids::LABEL)?.join(" ")
    );
    Ok(())
}

async fn rss(config: &ClientConfig, model: &str, feed_url: &str) -> Result<()> {
    let page = MemoryPage::sentiment_page();
    page.set_value(ids::RSS_URL, feed_url)?;
    page.set_value(ids::MODEL, model)?;

    let client = SentimentClient::new(page, HttpApi::new(config)?, TextCanvas::new(std::io::stdout()));
    client.try_predict_sentiments_from_rss().await?;
    Ok(())
}

async fn list_models(config: &ClientConfig) -> Result<()> {
    let url = config.base_url()?.join("/models")?;
    let models: Vec<String> = reqwest::get(url).await?.error_for_status()?.json().await?;
    for model in models {
        println!("{}", model);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });
    let config = cli.client_config();

    match &cli.command {
        Commands::Serve {
            bind,
            neutral_threshold,
            max_articles,
        } => {
            let server_config = ServerConfig {
                bind: *bind,
                max_articles: *max_articles,
                inference: InferenceConfig {
                    neutral_threshold: *neutral_threshold,
                },
            };
            info!("✨ Starting prediction service on {}", bind);
            senti_web::serve(server_config).await
        }
        Commands::Predict { model, text } => predict(&config, model, text).await,
        Commands::Rss { model, feed_url } => rss(&config, model, feed_url).await,
        Commands::Models => list_models(&config).await,
    }
}
