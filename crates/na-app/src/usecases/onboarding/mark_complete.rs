use std::sync::Arc;

use na_core::ports::OnboardingFlagPort;
use tracing::info;

/// Use case for completing onboarding.
///
/// Sets the persistent flag to `true`. Returns once the store has
/// acknowledged the durable write; a failed write is returned unchanged and
/// not retried.
pub struct MarkOnboardingCompleted {
    onboarding_flag: Arc<dyn OnboardingFlagPort>,
}

impl MarkOnboardingCompleted {
    pub fn new(onboarding_flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self { onboarding_flag }
    }

    /// Create a new MarkOnboardingCompleted use case from cloned Arc<dyn Port> references.
    pub fn from_ports(onboarding_flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self::new(onboarding_flag)
    }

    #[tracing::instrument(name = "usecase.mark_onboarding_completed.execute", skip(self))]
    pub async fn execute(&self) -> anyhow::Result<()> {
        self.onboarding_flag.mark_completed().await?;
        info!("Onboarding marked as completed");
        Ok(())
    }
}
