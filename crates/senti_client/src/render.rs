use senti_core::{Error, PredictionResult, Result, SentimentLabel};

use crate::page::{ids, Page};

/// Score as shown on the page, always two decimals.
///
/// Values exactly halfway between two hundredths round away from zero. Those
/// are precisely the odd multiples of 1/8, which are exact in binary, so the
/// check is exact too.
pub fn format_score(prediction: f64) -> String {
    let sign = if prediction < 0.0 { "-" } else { "" };
    let mut magnitude = prediction.abs();
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        magnitude = (magnitude * 100.0).ceil() / 100.0;
    }
    format!("{}{:.2}", sign, magnitude)
}

/// Writes a prediction into the `score` and `label` elements and leaves
/// exactly one sentiment class on the label.
///
/// Everything that can fail is checked up front, so an error never leaves the
/// page half updated.
pub fn show_prediction(page: &dyn Page, result: &PredictionResult) -> Result<()> {
    if !result.prediction.is_finite() {
        return Err(Error::InvalidResponse(format!(
            "prediction is not a finite number: {}",
            result.prediction
        )));
    }
    for id in [ids::SCORE, ids::LABEL] {
        if !page.has_element(id) {
            return Err(Error::MissingElement(id.to_string()));
        }
    }

    page.set_text(ids::SCORE, &format_score(result.prediction))?;
    page.set_text(ids::LABEL, &result.label)?;

    for label in SentimentLabel::ALL {
        page.remove_class(ids::LABEL, label.css_class())?;
    }
    let class = result.label.to_lowercase();
    if !class.is_empty() {
        page.add_class(ids::LABEL, &class)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.5), "0.50");
        assert_eq!(format_score(1.0), "1.00");
        assert_eq!(format_score(-0.3333), "-0.33");
        assert_eq!(format_score(0.92), "0.92");
        assert_eq!(format_score(12.0), "12.00");
        assert_eq!(format_score(-0.0), "0.00");
    }

    #[test]
    fn test_format_score_halfway_rounds_away_from_zero() {
        assert_eq!(format_score(0.125), "0.13");
        assert_eq!(format_score(0.375), "0.38");
        assert_eq!(format_score(0.625), "0.63");
        assert_eq!(format_score(0.875), "0.88");
        assert_eq!(format_score(-0.125), "-0.13");
        assert_eq!(format_score(-0.625), "-0.63");
        // Not exactly representable, so these are not real ties.
        assert_eq!(format_score(0.615), "0.61");
        assert_eq!(format_score(1.005), "1.00");
    }

    #[test]
    fn test_empty_label_adds_no_class() {
        let page = MemoryPage::sentiment_page();
        page.add_class(ids::LABEL, "positive").unwrap();

        let result = PredictionResult { prediction: 0.0, label: String::new() };
        show_prediction(&page, &result).unwrap();

        assert_eq!(page.text(ids::SCORE).unwrap(), "0.00");
        assert_eq!(page.text(ids::LABEL).unwrap(), "");
        assert!(page.classes(ids::LABEL).unwrap().is_empty());
    }

    #[test]
    fn test_exactly_one_sentiment_class() {
        let page = MemoryPage::sentiment_page();
        page.add_class(ids::LABEL, "result").unwrap();

        for label in ["Positive", "Negative", "Neutral", "positive", "NEUTRAL"] {
            let result = PredictionResult { prediction: 0.1, label: label.to_string() };
            show_prediction(&page, &result).unwrap();

            let classes = page.classes(ids::LABEL).unwrap();
            let active: Vec<_> = classes
                .iter()
                .filter(|c| SentimentLabel::ALL.iter().any(|l| l.css_class() == c.as_str()))
                .collect();
            assert_eq!(active, vec![&label.to_lowercase()]);
            assert!(classes.contains(&"result".to_string()));
            assert_eq!(page.text(ids::LABEL).unwrap(), label);
        }
    }

    #[test]
    fn test_missing_label_element_leaves_score_untouched() {
        let page = MemoryPage::new();
        page.insert(ids::SCORE);
        page.set_text(ids::SCORE, "0.10").unwrap();

        let result = PredictionResult { prediction: 0.9, label: "Positive".into() };
        assert!(show_prediction(&page, &result).is_err());
        assert_eq!(page.text(ids::SCORE).unwrap(), "0.10");
    }

    #[test]
    fn test_non_finite_prediction_rejected() {
        let page = MemoryPage::sentiment_page();
        let result = PredictionResult { prediction: f64::NAN, label: "Neutral".into() };
        assert!(show_prediction(&page, &result).is_err());
        assert_eq!(page.text(ids::SCORE).unwrap(), "");
    }
}
