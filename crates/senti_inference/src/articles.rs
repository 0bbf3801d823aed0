use std::collections::HashMap;

use futures::future::{join_all, try_join3};
use serde::Serialize;
use tracing::debug;

use senti_core::{
    Category, CategoryResult, Error, FeedArticle, Result, RssPredictionResult, SentimentLabel,
    SentimentModel,
};

/// Labels of one feed entry, per analyzed field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArticleSentiment {
    pub title: SentimentLabel,
    pub description: SentimentLabel,
    pub both: SentimentLabel,
}

impl ArticleSentiment {
    pub fn label(&self, category: Category) -> SentimentLabel {
        match category {
            Category::Titles => self.title,
            Category::Descriptions => self.description,
            Category::Both => self.both,
        }
    }
}

/// Classifies the title, the description and both joined, for every article.
pub async fn analyze_articles(
    model: &dyn SentimentModel,
    articles: &[FeedArticle],
) -> Result<Vec<ArticleSentiment>> {
    let futures = articles.iter().map(|article| async move {
        let combined = article.combined_text();
        let (title, description, both) = try_join3(
            model.analyze(&article.title),
            model.analyze(&article.description),
            model.analyze(&combined),
        )
        .await?;
        debug!(
            "{} -- title: {} description: {} both: {}",
            article.title, title.label, description.label, both.label
        );
        Ok::<_, Error>(ArticleSentiment {
            title: title.label,
            description: description.label,
            both: both.label,
        })
    });

    join_all(futures).await.into_iter().collect()
}

/// Tallies labels per category, bars always in `Positive`, `Negative`,
/// `Neutral` order.
pub fn chart_data(sentiments: &[ArticleSentiment]) -> RssPredictionResult {
    let mut result = RssPredictionResult::default();
    for category in Category::ALL {
        let mut counts: HashMap<SentimentLabel, usize> = HashMap::new();
        for sentiment in sentiments {
            *counts.entry(sentiment.label(category)).or_insert(0) += 1;
        }
        *result.category_mut(category) = CategoryResult::new(
            SentimentLabel::ALL.iter().map(|l| l.to_string()).collect(),
            SentimentLabel::ALL
                .iter()
                .map(|l| counts.get(l).copied().unwrap_or(0) as f64)
                .collect(),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DummyModel, LexiconModel};
    use crate::InferenceConfig;

    #[tokio::test]
    async fn test_analyze_articles() {
        let model = LexiconModel::new(&InferenceConfig::default());
        let articles = vec![
            FeedArticle::new("Great win for the team", "The meeting is on Tuesday"),
            FeedArticle::new("Crisis deepens", "Markets crash after terrible week"),
        ];

        let sentiments = analyze_articles(&model, &articles).await.unwrap();
        assert_eq!(sentiments.len(), 2);
        assert_eq!(sentiments[0].title, SentimentLabel::Positive);
        assert_eq!(sentiments[0].description, SentimentLabel::Neutral);
        assert_eq!(sentiments[0].both, SentimentLabel::Positive);
        assert_eq!(sentiments[1].both, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn test_analyze_no_articles() {
        let sentiments = analyze_articles(&DummyModel::new(), &[]).await.unwrap();
        assert!(sentiments.is_empty());
    }

    #[test]
    fn test_chart_data_counts_in_fixed_order() {
        use SentimentLabel::*;
        let sentiments = vec![
            ArticleSentiment { title: Positive, description: Neutral, both: Positive },
            ArticleSentiment { title: Positive, description: Negative, both: Negative },
            ArticleSentiment { title: Neutral, description: Negative, both: Negative },
        ];

        let data = chart_data(&sentiments);
        assert_eq!(data.titles.labels, vec!["Positive", "Negative", "Neutral"]);
        assert_eq!(data.titles.data, vec![2.0, 0.0, 1.0]);
        assert_eq!(data.descriptions.data, vec![0.0, 2.0, 1.0]);
        assert_eq!(data.both.data, vec![1.0, 2.0, 0.0]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_chart_data_empty_feed() {
        let data = chart_data(&[]);
        assert_eq!(data.both.labels.len(), 3);
        assert_eq!(data.both.data, vec![0.0, 0.0, 0.0]);
    }
}
