//! Onboarding domain models
//!
//! The onboarding flag is a single durable boolean recording whether the
//! user has finished the onboarding pages. It only ever moves from `false`
//! to `true`.

/// Name of the persistent preference store holding user settings.
pub const USER_SETTINGS: &str = "user_settings";

/// Preference key of the onboarding flag.
pub const APP_ENTRY: &str = "app_entry";

/// Snapshot of the onboarding flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct OnboardingFlag {
    /// Whether onboarding has been completed. Absent in storage means `false`.
    pub completed: bool,
}

impl From<bool> for OnboardingFlag {
    fn from(completed: bool) -> Self {
        Self { completed }
    }
}

/// First screen shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StartDestination {
    /// Onboarding pages, shown until the flag is set.
    Onboarding,
    /// News navigator (home, search, bookmarks).
    Home,
}

impl From<OnboardingFlag> for StartDestination {
    fn from(flag: OnboardingFlag) -> Self {
        if flag.completed {
            StartDestination::Home
        } else {
            StartDestination::Onboarding
        }
    }
}
