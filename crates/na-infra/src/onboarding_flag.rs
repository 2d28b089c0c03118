//! Preference-backed onboarding flag
//!
//! Implements [`OnboardingFlagPort`] on top of any preference store, using the
//! fixed `app_entry` key.

use std::sync::Arc;

use async_trait::async_trait;
use na_core::onboarding::APP_ENTRY;
use na_core::ports::{OnboardingFlagPort, PreferenceError, PreferenceStorePort, PreferenceStream};

pub struct PreferenceOnboardingFlag {
    store: Arc<dyn PreferenceStorePort>,
}

impl PreferenceOnboardingFlag {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OnboardingFlagPort for PreferenceOnboardingFlag {
    async fn read_completed(&self) -> Result<PreferenceStream, PreferenceError> {
        self.store.observe(APP_ENTRY).await
    }

    async fn mark_completed(&self) -> Result<(), PreferenceError> {
        self.store.write(APP_ENTRY, true).await
    }
}
