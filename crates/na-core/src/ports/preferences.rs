//! Durable boolean preference store port
//!
//! Values are observed as live streams: a subscriber receives the current
//! value first and then every change, in write order. Keys that were never
//! written read as `false`.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::ports::errors::PreferenceError;

/// Unbounded stream of a single preference value. Dropping it unsubscribes.
pub type PreferenceStream = BoxStream<'static, bool>;

#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Persist `value` under `key`.
    ///
    /// Returns only after the value is durable. Active observers of `key`
    /// see the new value if it differs from the previous one. Not retried.
    async fn write(&self, key: &str, value: bool) -> Result<(), PreferenceError>;

    /// Subscribe to `key`.
    ///
    /// Fails only when the backing storage cannot be loaded.
    async fn observe(&self, key: &str) -> Result<PreferenceStream, PreferenceError>;
}
