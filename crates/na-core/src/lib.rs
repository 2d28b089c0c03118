//! # na-core
//!
//! Core domain models and port contracts for NewsApp.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod article;
pub mod config;
pub mod details;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use article::{Article, Source};
pub use config::AppConfig;
pub use details::{DetailsEffect, DetailsEvent, DetailsState, TogglePhase};
pub use onboarding::{OnboardingFlag, StartDestination};
