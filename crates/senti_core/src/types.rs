use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Body of `POST /predict-sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub text: String,
    pub model: String,
}

/// Response of `POST /predict-sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: f64,
    pub label: String,
}

/// Body of `POST /predict-sentiments-from-rss`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RssPredictionRequest {
    pub feed_url: String,
    pub model: String,
}

/// Bar series for one category, `labels[i]` pairs with `data[i]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryResult {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl CategoryResult {
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self { labels, data }
    }

    pub fn validate(&self) -> Result<()> {
        if self.labels.len() != self.data.len() {
            return Err(Error::InvalidResponse(format!(
                "{} labels but {} data points",
                self.labels.len(),
                self.data.len()
            )));
        }
        Ok(())
    }
}

/// Response of `POST /predict-sentiments-from-rss`. Every category is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RssPredictionResult {
    pub titles: CategoryResult,
    pub descriptions: CategoryResult,
    pub both: CategoryResult,
}

impl RssPredictionResult {
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Titles => &self.titles,
            Category::Descriptions => &self.descriptions,
            Category::Both => &self.both,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryResult {
        match category {
            Category::Titles => &mut self.titles,
            Category::Descriptions => &mut self.descriptions,
            Category::Both => &mut self.both,
        }
    }

    /// Checks every category, naming the first misaligned one.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            self.category(category).validate().map_err(|e| {
                Error::InvalidResponse(format!("category '{}': {}", category, e))
            })?;
        }
        Ok(())
    }
}

/// Which article field(s) a feed tally was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Titles,
    Descriptions,
    Both,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Titles, Category::Descriptions, Category::Both];

    /// Chart identifier, also the canvas element id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Titles => "titles",
            Category::Descriptions => "descriptions",
            Category::Both => "both",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed order used for bar charts.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Buckets a polarity score, scores within `threshold` of zero are neutral.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            SentimentLabel::Positive
        } else if score <= -threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(Error::InvalidResponse(format!("unknown sentiment label: {}", other))),
        }
    }
}

impl Serialize for SentimentLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SentimentLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An entry read from an RSS or Atom feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedArticle {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl FeedArticle {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Title and description joined by a space.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
