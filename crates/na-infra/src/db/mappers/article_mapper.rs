use na_core::article::{Article, Source};

use crate::db::models::ArticleRow;

impl ArticleRow {
    /// Row for `article`, stamped with the time it was saved.
    pub fn from_domain(article: &Article, saved_at: i64) -> Self {
        Self {
            url: article.url.clone(),
            author: article.author.clone(),
            content: article.content.clone(),
            description: article.description.clone(),
            published_at: article.published_at.clone(),
            source_id: article.source.id.clone(),
            source_name: article.source.name.clone(),
            title: article.title.clone(),
            url_to_image: article.url_to_image.clone(),
            saved_at,
        }
    }
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            author: row.author,
            content: row.content,
            description: row.description,
            published_at: row.published_at,
            source: Source {
                id: row.source_id,
                name: row.source_name,
            },
            title: row.title,
            url: row.url,
            url_to_image: row.url_to_image,
        }
    }
}
