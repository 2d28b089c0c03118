//! CLI command handlers.
//!
//! Each handler takes the wired [`AppRuntime`], runs one use case and
//! returns a value the binary prints.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use futures::StreamExt;
use na_core::{Article, DetailsEffect, DetailsEvent, StartDestination};
use serde::Serialize;

use crate::bootstrap::AppRuntime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub start_destination: StartDestination,
    pub onboarding_completed: bool,
    pub saved_articles: usize,
    pub data_dir: PathBuf,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start destination: {:?}", self.start_destination)?;
        writeln!(f, "onboarding completed: {}", self.onboarding_completed)?;
        writeln!(f, "saved articles: {}", self.saved_articles)?;
        write!(f, "data dir: {}", self.data_dir.display())
    }
}

#[tracing::instrument(name = "command.status", skip(runtime))]
pub async fn status(runtime: &AppRuntime) -> anyhow::Result<StatusReport> {
    let usecases = runtime.usecases();

    let start_destination = usecases.resolve_start_destination().execute().await?;
    let mut completed = usecases
        .onboarding_gate()
        .read_onboarding_completed
        .execute()
        .await?;
    let onboarding_completed = completed.next().await.unwrap_or(false);
    let saved_articles = usecases.get_saved_articles().execute().await?.len();

    Ok(StatusReport {
        start_destination,
        onboarding_completed,
        saved_articles,
        data_dir: runtime.paths.data_dir.clone(),
    })
}

#[tracing::instrument(name = "command.complete_onboarding", skip(runtime))]
pub async fn complete_onboarding(runtime: &AppRuntime) -> anyhow::Result<()> {
    runtime
        .usecases()
        .onboarding_gate()
        .mark_onboarding_completed
        .execute()
        .await
        .context("failed to complete onboarding")
}

/// Toggle the saved state of one article and return the resulting effect.
#[tracing::instrument(name = "command.toggle_save", skip(runtime))]
pub async fn toggle_save(
    runtime: &AppRuntime,
    url: String,
    title: String,
) -> anyhow::Result<DetailsEffect> {
    let controller = runtime.usecases().details_controller();

    controller
        .dispatch(DetailsEvent::ToggleSaveArticle(Article::new(url, title)))
        .await?;

    let effect = controller
        .state()
        .effect
        .context("toggle finished without an effect")?;
    controller
        .dispatch(DetailsEvent::ClearTransientEffect)
        .await?;
    Ok(effect)
}

#[tracing::instrument(name = "command.saved", skip(runtime))]
pub async fn saved(runtime: &AppRuntime) -> anyhow::Result<Vec<Article>> {
    runtime.usecases().get_saved_articles().execute().await
}
