//! Details screen controller.
//!
//! Turns [`DetailsEvent`]s into repository calls and publishes the resulting
//! [`DetailsState`] through a `watch` channel the UI subscribes to.
//!
//! ## Toggle protocol
//!
//! 1. Look up the article url.
//! 2. Absent: insert. Present: delete.
//! 3. Publish `Saved` / `Removed` exactly once.
//!
//! Toggles on the same url are serialized by a per-url lock so the lookup
//! and the mutation cannot interleave with another toggle of that url.
//! The lock is held by the task doing the repository work, not by the
//! caller, so a toggle that timed out keeps the url locked until its write
//! has actually finished. Toggles on different urls run concurrently.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use na_core::ports::{ArticleRepositoryError, ArticleRepositoryPort};
use na_core::{Article, DetailsEffect, DetailsEvent, DetailsState};
use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

pub const DEFAULT_TOGGLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors produced by the details controller.
#[derive(Debug, thiserror::Error)]
pub enum DetailsError {
    #[error("persistence failed: {0}")]
    Persistence(#[from] ArticleRepositoryError),
    #[error("toggle did not finish within {0:?}")]
    Timeout(Duration),
    #[error("details screen is closed")]
    Closed,
    #[error("toggle task aborted: {0}")]
    Aborted(String),
}

/// Receiver of UI intents. The screen holds one of these instead of a
/// reference to the controller itself.
pub trait DetailsEventSink: Send + Sync {
    fn on_event(&self, event: DetailsEvent);
}

struct Inner {
    articles: Arc<dyn ArticleRepositoryPort>,
    state: watch::Sender<DetailsState>,
    url_locks: Mutex<HashMap<String, Weak<Mutex<()>>>>,
    closed: AtomicBool,
    toggle_timeout: Duration,
    // Runtime captured at construction, so events can be spawned from
    // threads outside it.
    runtime: Option<Handle>,
}

/// One controller per details screen. Cloning shares the same state.
#[derive(Clone)]
pub struct DetailsController {
    inner: Arc<Inner>,
}

impl DetailsController {
    pub fn new(articles: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self::with_timeout(articles, DEFAULT_TOGGLE_TIMEOUT)
    }

    pub fn with_timeout(articles: Arc<dyn ArticleRepositoryPort>, toggle_timeout: Duration) -> Self {
        let (state, _) = watch::channel(DetailsState::default());
        Self {
            inner: Arc::new(Inner {
                articles,
                state,
                url_locks: Mutex::new(HashMap::new()),
                closed: AtomicBool::new(false),
                toggle_timeout,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DetailsState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.inner.state.subscribe()
    }

    /// Detach the screen. Toggles already running still finish their write,
    /// but their effect is dropped.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Run `event` on a separate task.
    ///
    /// Uses the runtime the controller was created on. A controller created
    /// outside any runtime can only spawn from inside one.
    pub fn spawn_event(&self, event: DetailsEvent) -> JoinHandle<Result<(), DetailsError>> {
        let controller = self.clone();
        let task = async move {
            let result = controller.dispatch(event).await;
            if let Err(err) = &result {
                warn!(error = %err, "details event failed");
            }
            result
        };
        match &self.inner.runtime {
            Some(runtime) => runtime.spawn(task),
            None => tokio::spawn(task),
        }
    }

    /// Handle `event` to completion on the current task.
    pub async fn dispatch(&self, event: DetailsEvent) -> Result<(), DetailsError> {
        match event {
            DetailsEvent::ToggleSaveArticle(article) => self.toggle(article).await,
            DetailsEvent::ClearTransientEffect => {
                self.inner.state.send_if_modified(DetailsState::clear_effect);
                Ok(())
            }
        }
    }

    async fn toggle(&self, article: Article) -> Result<(), DetailsError> {
        if self.is_closed() {
            return Err(DetailsError::Closed);
        }

        let span = info_span!("usecase.details.toggle_save_article", url = %article.url);
        async {
            let guard = self.url_lock(&article.url).await.lock_owned().await;

            self.update(|state| state.begin_toggle(&article.url));

            // The guard moves into the task: if the timeout fires, the url
            // stays locked until the repository call returns.
            let controller = self.clone();
            let target = article.clone();
            let work = tokio::spawn(
                async move {
                    let _guard = guard;
                    controller.check_then_act(&target).await
                }
                .in_current_span(),
            );

            let timeout = self.inner.toggle_timeout;
            let result = match tokio::time::timeout(timeout, work).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_err)) => Err(DetailsError::Aborted(join_err.to_string())),
                Err(_) => Err(DetailsError::Timeout(timeout)),
            };

            match result {
                Ok(effect) if self.is_closed() => {
                    debug!(?effect, "screen closed, dropping effect");
                    self.update(|state| state.abandon_toggle(&article.url));
                    Ok(())
                }
                Ok(effect) => {
                    info!(?effect, "toggle completed");
                    self.update(|state| state.complete_toggle(&article.url, effect));
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "toggle failed, saved state unchanged");
                    let message = err.to_string();
                    self.update(|state| state.fail_toggle(&article.url, message));
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn check_then_act(&self, article: &Article) -> Result<DetailsEffect, DetailsError> {
        let exists = self.inner.articles.exists_by_url(&article.url).await?;
        self.update(|state| state.mark_mutating(&article.url));

        if exists {
            self.inner.articles.delete_by_url(&article.url).await?;
            Ok(DetailsEffect::Removed)
        } else {
            self.inner.articles.insert(article).await?;
            Ok(DetailsEffect::Saved)
        }
    }

    fn update(&self, f: impl FnOnce(&mut DetailsState)) {
        self.inner.state.send_modify(f);
    }

    async fn url_lock(&self, url: &str) -> Arc<Mutex<()>> {
        let mut locks = self.inner.url_locks.lock().await;
        if let Some(lock) = locks.get(url).and_then(Weak::upgrade) {
            return lock;
        }

        locks.retain(|_, lock| lock.strong_count() > 0);
        let lock = Arc::new(Mutex::new(()));
        locks.insert(url.to_string(), Arc::downgrade(&lock));
        lock
    }
}

impl DetailsEventSink for DetailsController {
    fn on_event(&self, event: DetailsEvent) {
        drop(self.spawn_event(event));
    }
}

/// Owning handle of one details screen. Dropping it closes the controller.
pub struct DetailsScreen {
    controller: DetailsController,
}

impl DetailsScreen {
    pub fn new(controller: DetailsController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &DetailsController {
        &self.controller
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.controller.subscribe()
    }
}

impl DetailsEventSink for DetailsScreen {
    fn on_event(&self, event: DetailsEvent) {
        self.controller.on_event(event);
    }
}

impl Drop for DetailsScreen {
    fn drop(&mut self) {
        self.controller.close();
    }
}
