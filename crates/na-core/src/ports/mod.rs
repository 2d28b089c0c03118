//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `na-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `na-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod app_dirs;
pub mod article_repository;
pub mod errors;
pub mod news_feed;
pub mod onboarding;
pub mod preferences;

pub use app_dirs::AppDirsPort;
pub use article_repository::ArticleRepositoryPort;
pub use errors::{AppDirsError, ArticleRepositoryError, NewsFeedError, PreferenceError};
pub use news_feed::{NewsFeedPort, NewsPage};
pub use onboarding::OnboardingFlagPort;
pub use preferences::{PreferenceStorePort, PreferenceStream};
