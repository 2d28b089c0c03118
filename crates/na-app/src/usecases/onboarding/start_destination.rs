use futures::StreamExt;
use na_core::{OnboardingFlag, StartDestination};
use tracing::debug;

use super::ReadOnboardingCompleted;

/// Use case deciding which screen the app opens on.
pub struct ResolveStartDestination {
    read_onboarding_completed: ReadOnboardingCompleted,
}

impl ResolveStartDestination {
    pub fn new(read_onboarding_completed: ReadOnboardingCompleted) -> Self {
        Self {
            read_onboarding_completed,
        }
    }

    /// Takes the current flag value and maps it to a destination.
    pub async fn execute(&self) -> anyhow::Result<StartDestination> {
        let mut completed = self.read_onboarding_completed.execute().await?;
        let completed = completed
            .next()
            .await
            .ok_or_else(|| anyhow::anyhow!("onboarding flag stream ended before first value"))?;

        let destination = StartDestination::from(OnboardingFlag::from(completed));
        debug!(?destination, "resolved start destination");
        Ok(destination)
    }
}
