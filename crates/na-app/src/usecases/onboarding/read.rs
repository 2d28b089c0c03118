use std::sync::Arc;

use na_core::ports::{OnboardingFlagPort, PreferenceStream};

/// Use case for observing whether onboarding has been completed.
///
/// The returned stream yields the current value first and then every change.
pub struct ReadOnboardingCompleted {
    onboarding_flag: Arc<dyn OnboardingFlagPort>,
}

impl ReadOnboardingCompleted {
    pub fn new(onboarding_flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { onboarding_flag }
    }

    /// Create a new ReadOnboardingCompleted use case from cloned Arc<dyn Port> references.
    pub fn from_ports(onboarding_flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self::new(onboarding_flag)
    }

    pub async fn execute(&self) -> anyhow::Result<PreferenceStream> {
        Ok(self.onboarding_flag.read_completed().await?)
    }
}
