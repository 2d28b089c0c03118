//! Article domain models
//!
//! An article is identified by its `url`; every other field is display data
//! owned by the feed that produced it.

use serde::{Deserialize, Serialize};

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Source {
    pub id: String,
    pub name: String,
}

/// A news article as shown on the home and details screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub author: Option<String>,
    pub content: String,
    pub description: String,
    pub published_at: String,
    pub source: Source,
    pub title: String,
    /// Primary key of the saved-articles collection.
    pub url: String,
    pub url_to_image: Option<String>,
}

impl Article {
    /// Minimal article carrying only the identity and a title.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: None,
            content: String::new(),
            description: String::new(),
            published_at: String::new(),
            source: Source::default(),
            title: title.into(),
            url: url.into(),
            url_to_image: None,
        }
    }

    pub fn with_source(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.source = Source {
            id: id.into(),
            name: name.into(),
        };
        self
    }
}
