use senti_core::{PredictionRequest, Result, RssPredictionRequest};

use crate::page::{ids, Page};

pub fn read_prediction_request(page: &dyn Page) -> Result<PredictionRequest> {
    Ok(PredictionRequest {
        text: page.value(ids::TEXT)?,
        model: page.value(ids::MODEL)?,
    })
}

pub fn read_rss_request(page: &dyn Page) -> Result<RssPredictionRequest> {
    Ok(RssPredictionRequest {
        feed_url: page.value(ids::RSS_URL)?,
        model: page.value(ids::MODEL)?,
    })
}
