use std::sync::Arc;

use anyhow::Context;
use na_core::ports::ArticleRepositoryPort;
use na_core::Article;

/// Use case for listing bookmarked articles, most recently saved first.
pub struct GetSavedArticles {
    articles: Arc<dyn ArticleRepositoryPort>,
}

impl GetSavedArticles {
    pub fn new(articles: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self { articles }
    }

    /// Create a new GetSavedArticles use case from cloned Arc<dyn Port> references.
    pub fn from_ports(articles: Arc<dyn ArticleRepositoryPort>) -> Self {
        Self::new(articles)
    }

    #[tracing::instrument(name = "usecase.get_saved_articles.execute", skip(self))]
    pub async fn execute(&self) -> anyhow::Result<Vec<Article>> {
        let saved = self
            .articles
            .list_saved()
            .await
            .context("failed to list saved articles")?;
        tracing::debug!(count = saved.len(), "saved articles loaded");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use na_core::ports::ArticleRepositoryError;

    struct FixedArticles(Result<Vec<Article>, String>);

    #[async_trait]
    impl ArticleRepositoryPort for FixedArticles {
        async fn exists_by_url(&self, _url: &str) -> Result<bool, ArticleRepositoryError> {
            unimplemented!()
        }

        async fn select_by_url(&self, _url: &str) -> Result<Option<Article>, ArticleRepositoryError> {
            unimplemented!()
        }

        async fn insert(&self, _article: &Article) -> Result<(), ArticleRepositoryError> {
            unimplemented!()
        }

        async fn delete_by_url(&self, _url: &str) -> Result<(), ArticleRepositoryError> {
            unimplemented!()
        }

        async fn list_saved(&self) -> Result<Vec<Article>, ArticleRepositoryError> {
            self.0.clone().map_err(ArticleRepositoryError::Storage)
        }
    }

    #[tokio::test]
    async fn test_execute_returns_repository_order() {
        let articles = vec![
            Article::new("https://example.com/new", "New"),
            Article::new("https://example.com/old", "Old"),
        ];
        let use_case = GetSavedArticles::new(Arc::new(FixedArticles(Ok(articles.clone()))));

        assert_eq!(use_case.execute().await.unwrap(), articles);
    }

    #[tokio::test]
    async fn test_execute_propagates_storage_error() {
        let use_case = GetSavedArticles::from_ports(Arc::new(FixedArticles(Err("disk".into()))));

        let err = use_case.execute().await.unwrap_err();

        assert!(err.downcast_ref::<ArticleRepositoryError>().is_some());
    }
}
