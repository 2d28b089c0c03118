use async_trait::async_trait;

use crate::article::Article;
use crate::ports::errors::NewsFeedError;

/// One page of the remote feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsPage {
    pub articles: Vec<Article>,
    /// Total number of articles the feed reports for the query.
    pub total_results: usize,
}

/// Remote news feed. Pages are 1-based.
#[async_trait]
pub trait NewsFeedPort: Send + Sync {
    async fn fetch_page(
        &self,
        sources: &[String],
        page: u32,
        page_size: u32,
    ) -> Result<NewsPage, NewsFeedError>;
}
