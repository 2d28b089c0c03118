//! Business logic use cases
//!
//! App start
//!         ↓
//! ResolveStartDestination (ReadOnboardingCompleted) → Onboarding | Home
//!         ↓
//! MarkOnboardingCompleted                           → preference write
//! ---------------------------------
//! GetNews                → home feed pages
//! GetSavedArticles       → bookmarks
//! DetailsController      → save / unsave toggle

pub mod details;
pub mod news;
pub mod onboarding;

pub use details::{
    DetailsController, DetailsError, DetailsEventSink, DetailsScreen, DEFAULT_TOGGLE_TIMEOUT,
};
pub use news::{GetNews, GetSavedArticles, DEFAULT_NEWS_SOURCES, DEFAULT_PAGE_SIZE};
pub use onboarding::{
    MarkOnboardingCompleted, OnboardingGate, ReadOnboardingCompleted, ResolveStartDestination,
};
