use std::collections::HashMap;
use std::fmt;

use senti_core::{Result, Sentiment, SentimentLabel};

use super::SentimentModel;
use crate::InferenceConfig;

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
/// Weight applied to a word that follows a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Boost given by a preceding intensifier.
const BOOST: f64 = 0.293;
/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 3;

const LEXICON: &[(&str, f64)] = &[
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("great", 3.1),
    ("good", 1.9),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("happy", 2.7),
    ("best", 3.2),
    ("nice", 1.8),
    ("win", 2.8),
    ("wins", 2.7),
    ("success", 2.7),
    ("gain", 2.4),
    ("gains", 1.8),
    ("growth", 1.6),
    ("rally", 1.6),
    ("recover", 1.4),
    ("surge", 1.5),
    ("surged", 1.5),
    ("hope", 1.9),
    ("safe", 1.9),
    ("strong", 2.3),
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("hate", -2.7),
    ("worst", -3.1),
    ("poor", -2.1),
    ("sad", -2.1),
    ("crisis", -3.1),
    ("crash", -1.7),
    ("loss", -1.3),
    ("losses", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("war", -2.9),
    ("death", -2.9),
    ("killed", -3.5),
    ("fear", -2.2),
    ("storm", -0.6),
    ("warning", -1.4),
    ("decline", -1.1),
    ("weak", -1.9),
    ("angry", -2.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "without", "isn't",
    "wasn't", "don't", "doesn't", "didn't", "can't", "won't", "aren't", "cannot",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "incredibly", "absolutely", "highly", "totally",
];

/// Word-list scorer in the style of rule-based polarity analyzers: sums word
/// valences with negation and intensifier handling and squashes the sum into
/// a compound score in `[-1, 1]`.
pub struct LexiconModel {
    valences: HashMap<&'static str, f64>,
    neutral_threshold: f64,
}

impl LexiconModel {
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            valences: LEXICON.iter().cloned().collect(),
            neutral_threshold: config.neutral_threshold,
        }
    }

    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };
            let mut score = valence;
            if i > 0 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
                score += BOOST * valence.signum();
            }
            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|t| NEGATIONS.contains(&t.as_str())) {
                score *= NEGATION_SCALAR;
            }
            sum += score;
        }
        normalize(sum)
    }
}

impl fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconModel")
            .field("words", &self.valences.len())
            .field("neutral_threshold", &self.neutral_threshold)
            .finish()
    }
}

#[async_trait::async_trait]
impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn analyze(&self, text: &str) -> Result<Sentiment> {
        let score = self.compound(text);
        Ok(Sentiment::new(
            SentimentLabel::from_score(score, self.neutral_threshold),
            score,
        ))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
