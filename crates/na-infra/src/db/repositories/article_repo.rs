use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use na_core::article::Article;
use na_core::ports::{ArticleRepositoryError, ArticleRepositoryPort};

use crate::db::executor::DbExecutor;
use crate::db::models::ArticleRow;
use crate::db::schema::t_article::dsl::*;

/// Saved articles in SQLite. Every query runs on the blocking pool.
pub struct DieselArticleRepository<E>
where
    E: DbExecutor,
{
    executor: Arc<E>,
}

impl<E> DieselArticleRepository<E>
where
    E: DbExecutor,
{
    pub fn new(executor: E) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T, ArticleRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> anyhow::Result<T> + Send + 'static,
    {
        let executor = Arc::clone(&self.executor);
        tokio::task::spawn_blocking(move || executor.run(f))
            .await
            .map_err(|e| ArticleRepositoryError::Storage(format!("db task aborted: {}", e)))?
            .map_err(|e| ArticleRepositoryError::Storage(e.to_string()))
    }
}

#[async_trait]
impl<E> ArticleRepositoryPort for DieselArticleRepository<E>
where
    E: DbExecutor,
{
    async fn exists_by_url(&self, article_url: &str) -> Result<bool, ArticleRepositoryError> {
        let article_url = article_url.to_string();
        self.blocking(move |conn| {
            let found = diesel::select(diesel::dsl::exists(
                t_article.filter(url.eq(&article_url)),
            ))
            .get_result::<bool>(conn)?;
            Ok(found)
        })
        .await
    }

    async fn select_by_url(
        &self,
        article_url: &str,
    ) -> Result<Option<Article>, ArticleRepositoryError> {
        let article_url = article_url.to_string();
        let row = self
            .blocking(move |conn| {
                let row = t_article
                    .filter(url.eq(&article_url))
                    .select(ArticleRow::as_select())
                    .first::<ArticleRow>(conn)
                    .optional()?;
                Ok(row)
            })
            .await?;

        Ok(row.map(Article::from))
    }

    async fn insert(&self, article: &Article) -> Result<(), ArticleRepositoryError> {
        let row = ArticleRow::from_domain(article, chrono::Utc::now().timestamp_millis());
        tracing::debug!(url = %row.url, "upserting saved article");

        self.blocking(move |conn| {
            diesel::insert_into(t_article)
                .values(&row)
                .on_conflict(url)
                .do_update()
                .set(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn delete_by_url(&self, article_url: &str) -> Result<(), ArticleRepositoryError> {
        let article_url = article_url.to_string();
        tracing::debug!(url = %article_url, "deleting saved article");

        self.blocking(move |conn| {
            diesel::delete(t_article.filter(url.eq(&article_url))).execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn list_saved(&self) -> Result<Vec<Article>, ArticleRepositoryError> {
        let rows = self
            .blocking(|conn| {
                let rows = t_article
                    .select(ArticleRow::as_select())
                    .order((saved_at.desc(), url.asc()))
                    .load::<ArticleRow>(conn)?;
                Ok(rows)
            })
            .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }
}
