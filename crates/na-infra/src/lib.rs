pub mod db;
pub mod fs;
pub mod onboarding_flag;
pub mod preferences;

pub use onboarding_flag::PreferenceOnboardingFlag;
pub use preferences::FilePreferenceStore;
