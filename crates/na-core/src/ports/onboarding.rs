//! Onboarding flag port
//!
//! Narrow capability over the preference store: the application can watch
//! the flag and set it, nothing else. Implementations are provided by the
//! infrastructure layer.

use async_trait::async_trait;

use crate::ports::errors::PreferenceError;
use crate::ports::preferences::PreferenceStream;

#[async_trait]
pub trait OnboardingFlagPort: Send + Sync {
    /// Live view of the "onboarding completed" flag.
    async fn read_completed(&self) -> Result<PreferenceStream, PreferenceError>;

    /// Set the flag to `true`. There is deliberately no way to unset it.
    async fn mark_completed(&self) -> Result<(), PreferenceError>;
}
