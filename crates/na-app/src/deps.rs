//! # Application Dependencies
//!
//! Parameter grouping for use-case construction. Not a builder: no build
//! steps, no defaults, every port is required.

use std::sync::Arc;
use std::time::Duration;

use na_core::ports::*;

/// Ports and resolved settings handed to the use cases.
pub struct AppDeps {
    // Preferences
    pub onboarding_flag: Arc<dyn OnboardingFlagPort>,

    // Storage
    pub articles: Arc<dyn ArticleRepositoryPort>,

    // Settings
    pub news_sources: Vec<String>,
    pub page_size: u32,
    pub toggle_timeout: Duration,
}
