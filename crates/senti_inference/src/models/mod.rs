use std::collections::BTreeMap;
use std::sync::Arc;

use senti_core::{Error, Result};

pub use senti_core::SentimentModel;

use crate::InferenceConfig;

pub mod dummy;
pub mod lexicon;

pub use dummy::DummyModel;
pub use lexicon::LexiconModel;

/// Names accepted by [`create_model`].
pub const AVAILABLE_MODELS: &[&str] = &["lexicon", "dummy"];

pub fn create_model(name: &str, config: &InferenceConfig) -> Result<Arc<dyn SentimentModel>> {
    match name.to_lowercase().as_str() {
        "lexicon" => Ok(Arc::new(LexiconModel::new(config))),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        _ => Err(Error::UnknownModel(name.to_string())),
    }
}

/// The models a service offers, looked up by the name sent in requests.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<dyn SentimentModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in model.
    pub fn with_defaults(config: &InferenceConfig) -> Result<Self> {
        let mut registry = Self::new();
        for name in AVAILABLE_MODELS {
            registry.register(create_model(name, config)?);
        }
        Ok(registry)
    }

    pub fn register(&mut self, model: Arc<dyn SentimentModel>) {
        self.models.insert(model.name().to_lowercase(), model);
    }

    /// Lookup is case-insensitive.
    pub fn get(&self, name: &str) -> Result<Arc<dyn SentimentModel>> {
        self.models
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }

    pub fn available(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }
}
