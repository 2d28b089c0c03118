//! Details screen state.
//!
//! Pure state transitions for the save/unsave toggle. Side effects (lookups,
//! inserts, deletes) live in the application layer; this module only records
//! which toggles are in flight and which one-shot effect the UI has yet to
//! acknowledge.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::article::Article;

/// Intents sent by the details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsEvent {
    /// Save the article if it is not saved yet, otherwise delete it.
    ToggleSaveArticle(Article),
    /// The UI has shown the current effect; drop it.
    ClearTransientEffect,
}

/// One-shot acknowledgement of a completed toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailsEffect {
    Saved,
    Removed,
}

impl DetailsEffect {
    /// Short message suitable for a toast.
    pub fn message(&self) -> &'static str {
        match self {
            DetailsEffect::Saved => "Article Saved",
            DetailsEffect::Removed => "Article Deleted",
        }
    }
}

/// Progress of a single toggle. A url with no entry is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TogglePhase {
    /// Existence lookup in flight.
    Checking,
    /// Insert or delete in flight.
    Mutating,
}

/// Observable state of the details screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailsState {
    /// Effect waiting to be consumed by the UI.
    pub effect: Option<DetailsEffect>,
    /// Message of the last failed toggle, kept until the next toggle starts.
    pub error: Option<String>,
    /// Toggles currently running, keyed by article url.
    pub in_flight: BTreeMap<String, TogglePhase>,
}

impl DetailsState {
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn phase_of(&self, url: &str) -> Option<TogglePhase> {
        self.in_flight.get(url).copied()
    }

    pub fn begin_toggle(&mut self, url: &str) {
        self.error = None;
        self.in_flight.insert(url.to_string(), TogglePhase::Checking);
    }

    pub fn mark_mutating(&mut self, url: &str) {
        if let Some(phase) = self.in_flight.get_mut(url) {
            *phase = TogglePhase::Mutating;
        }
    }

    pub fn complete_toggle(&mut self, url: &str, effect: DetailsEffect) {
        #[cfg(feature = "tracing")]
        tracing::trace!(url, ?effect, "details effect published");
        self.in_flight.remove(url);
        self.effect = Some(effect);
    }

    /// Returns the url to idle and records the failure. The effect slot is
    /// left as it was.
    pub fn fail_toggle(&mut self, url: &str, message: impl Into<String>) {
        self.in_flight.remove(url);
        self.error = Some(message.into());
    }

    /// Returns the url to idle without publishing anything.
    pub fn abandon_toggle(&mut self, url: &str) {
        self.in_flight.remove(url);
    }

    /// Empties the effect slot. Returns `false` when it was already empty.
    pub fn clear_effect(&mut self) -> bool {
        self.effect.take().is_some()
    }
}
