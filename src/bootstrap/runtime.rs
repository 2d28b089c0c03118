//! # Use Cases Accessor
//!
//! [`AppRuntime`] owns the wired [`AppDeps`]; [`UseCases`] builds use cases
//! from them on demand.
//!
//! ```rust,no_run
//! # use newsapp_lib::bootstrap::AppRuntime;
//! # async fn example(runtime: &AppRuntime) -> anyhow::Result<()> {
//! let saved = runtime.usecases().get_saved_articles().execute().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use na_app::app_paths::AppPaths;
use na_app::usecases::{
    DetailsController, GetNews, GetSavedArticles, OnboardingGate, ResolveStartDestination,
};
use na_app::AppDeps;
use na_core::ports::NewsFeedPort;

pub struct AppRuntime {
    pub deps: AppDeps,
    pub paths: AppPaths,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, paths: AppPaths) -> Self {
        Self { deps, paths }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn onboarding_gate(&self) -> OnboardingGate {
        OnboardingGate::from_port(self.runtime.deps.onboarding_flag.clone())
    }

    pub fn resolve_start_destination(&self) -> ResolveStartDestination {
        ResolveStartDestination::new(self.onboarding_gate().read_onboarding_completed)
    }

    /// A fresh controller for one details screen.
    pub fn details_controller(&self) -> DetailsController {
        DetailsController::with_timeout(
            self.runtime.deps.articles.clone(),
            self.runtime.deps.toggle_timeout,
        )
    }

    pub fn get_saved_articles(&self) -> GetSavedArticles {
        GetSavedArticles::from_ports(self.runtime.deps.articles.clone())
    }

    /// The feed client is supplied by the caller.
    pub fn get_news(&self, news_feed: Arc<dyn NewsFeedPort>) -> GetNews {
        GetNews::with_page_size(news_feed, self.runtime.deps.page_size)
    }

    pub fn news_sources(&self) -> Vec<String> {
        self.runtime.deps.news_sources.clone()
    }
}
