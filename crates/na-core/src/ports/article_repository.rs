use async_trait::async_trait;

use crate::article::Article;
use crate::ports::errors::ArticleRepositoryError;

/// Saved (bookmarked) articles, keyed by url.
#[async_trait]
pub trait ArticleRepositoryPort: Send + Sync {
    async fn exists_by_url(&self, url: &str) -> Result<bool, ArticleRepositoryError>;

    async fn select_by_url(&self, url: &str) -> Result<Option<Article>, ArticleRepositoryError>;

    /// Insert or replace the article stored under `article.url`.
    async fn insert(&self, article: &Article) -> Result<(), ArticleRepositoryError>;

    /// Delete the article stored under `url`. Deleting a missing url is not an error.
    async fn delete_by_url(&self, url: &str) -> Result<(), ArticleRepositoryError>;

    /// All saved articles, most recently saved first.
    async fn list_saved(&self) -> Result<Vec<Article>, ArticleRepositoryError>;
}
