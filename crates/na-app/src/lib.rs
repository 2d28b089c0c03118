//! NewsApp Application Orchestration Layer
//!
//! This crate contains business logic use cases and the details screen
//! controller. It depends only on `na-core` ports; adapters are injected by
//! the bootstrap layer.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use deps::AppDeps;

pub use usecases::{
    DetailsController, DetailsError, DetailsEventSink, DetailsScreen, GetNews, GetSavedArticles,
    MarkOnboardingCompleted, OnboardingGate, ReadOnboardingCompleted, ResolveStartDestination,
};
