//! Onboarding use cases.

mod mark_complete;
mod read;
mod start_destination;

use std::sync::Arc;

use na_core::ports::OnboardingFlagPort;

pub use mark_complete::MarkOnboardingCompleted;
pub use read::ReadOnboardingCompleted;
pub use start_destination::ResolveStartDestination;

/// The two onboarding use cases, built from one port.
pub struct OnboardingGate {
    pub read_onboarding_completed: ReadOnboardingCompleted,
    pub mark_onboarding_completed: MarkOnboardingCompleted,
}

impl OnboardingGate {
    pub fn from_port(onboarding_flag: Arc<dyn OnboardingFlagPort>) -> Self {
        Self {
            read_onboarding_completed: ReadOnboardingCompleted::from_ports(onboarding_flag.clone()),
            mark_onboarding_completed: MarkOnboardingCompleted::from_ports(onboarding_flag),
        }
    }
}
