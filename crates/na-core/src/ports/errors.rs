use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("platform data directory is unavailable")]
    DataLocalDirUnavailable,
}

/// Failures of the durable preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The backing file exists but could not be read.
    #[error("preference read failed: {0}")]
    Read(String),

    /// The backing file is not a valid preference map.
    #[error("preference data is corrupt: {0}")]
    Corrupt(String),

    /// The durable write did not complete. Nothing was published to observers.
    #[error("preference write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ArticleRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum NewsFeedError {
    #[error("news feed unavailable: {0}")]
    Unavailable(String),

    #[error("news feed rejected request: {0}")]
    Rejected(String),
}
