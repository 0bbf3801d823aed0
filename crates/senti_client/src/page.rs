use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use senti_core::{Category, Error, Result};

/// Element ids the flows read from and write to.
pub mod ids {
    pub const TEXT: &str = "text";
    pub const MODEL: &str = "model";
    pub const RSS_URL: &str = "rss-url";
    pub const SCORE: &str = "score";
    pub const LABEL: &str = "label";
}

/// The slice of a document the client touches. Methods take `&self` because
/// the underlying document is shared and mutated in place.
pub trait Page: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input-like element
    fn value(&self, id: &str) -> Result<String>;

    fn set_text(&self, id: &str, text: &str) -> Result<()>;

    fn text(&self, id: &str) -> Result<String>;

    fn add_class(&self, id: &str, class: &str) -> Result<()>;

    /// Removing a class that is not present is a no-op
    fn remove_class(&self, id: &str, class: &str) -> Result<()>;

    fn classes(&self, id: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub value: String,
    pub text: String,
    pub classes: Vec<String>,
}

/// In-memory document.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, Element>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying every element the sentiment flows expect, including
    /// the three chart canvases.
    pub fn sentiment_page() -> Self {
        let page = Self::new();
        for id in [ids::TEXT, ids::MODEL, ids::RSS_URL, ids::SCORE, ids::LABEL] {
            page.insert(id);
        }
        for category in Category::ALL {
            page.insert(category.as_str());
        }
        page
    }

    pub fn insert(&self, id: &str) {
        self.lock().entry(id.to_string()).or_default();
    }

    pub fn set_value(&self, id: &str, value: &str) -> Result<()> {
        self.with_element(id, |el| el.value = value.to_string())
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.lock().get(id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Element>> {
        self.elements.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn with_element<T>(&self, id: &str, f: impl FnOnce(&mut Element) -> T) -> Result<T> {
        let mut elements = self.lock();
        let element = elements
            .get_mut(id)
            .ok_or_else(|| Error::MissingElement(id.to_string()))?;
        Ok(f(element))
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    fn value(&self, id: &str) -> Result<String> {
        self.with_element(id, |el| el.value.clone())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<()> {
        self.with_element(id, |el| el.text = text.to_string())
    }

    fn text(&self, id: &str) -> Result<String> {
        self.with_element(id, |el| el.text.clone())
    }

    fn add_class(&self, id: &str, class: &str) -> Result<()> {
        self.with_element(id, |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<()> {
        self.with_element(id, |el| el.classes.retain(|c| c != class))
    }

    fn classes(&self, id: &str) -> Result<Vec<String>> {
        self.with_element(id, |el| el.classes.clone())
    }
}
