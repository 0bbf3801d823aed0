pub mod api;
pub mod canvas;
pub mod chart;
pub mod client;
pub mod config;
pub mod form;
pub mod logging;
pub mod page;
pub mod render;

pub use api::{HttpApi, PredictionApi};
pub use canvas::{ChartCanvas, MemoryCanvas, TextCanvas};
pub use chart::{BarChart, ChartRegistry};
pub use client::SentimentClient;
pub use config::ClientConfig;
pub use logging::{init_logging, Logger};
pub use page::{ids, MemoryPage, Page};

pub mod prelude {
    pub use super::{
        ChartCanvas, ClientConfig, HttpApi, MemoryCanvas, MemoryPage, Page, PredictionApi,
        SentimentClient,
    };
    pub use senti_core::{Error, Result};
}
