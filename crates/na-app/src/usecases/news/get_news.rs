use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use futures::stream::{self, BoxStream, StreamExt};
use na_core::ports::NewsFeedPort;
use na_core::Article;
use tracing::{debug, warn};

/// Sources shown on the home screen when the configuration names none.
pub const DEFAULT_NEWS_SOURCES: [&str; 3] = ["bbc-news", "abc-news", "al-jazeera-english"];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Use case for paging through the remote news feed.
///
/// `execute` is lazy: no page is requested until the stream is polled, and
/// each poll requests the next page. The stream ends after a short page,
/// once the reported total has been delivered, or after the first error.
pub struct GetNews {
    news_feed: Arc<dyn NewsFeedPort>,
    page_size: u32,
}

enum Cursor {
    Next { page: u32, delivered: usize },
    Done,
}

impl GetNews {
    pub fn new(news_feed: Arc<dyn NewsFeedPort>) -> Self {
        Self::with_page_size(news_feed, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(news_feed: Arc<dyn NewsFeedPort>, page_size: u32) -> Self {
        Self {
            news_feed,
            page_size: page_size.max(1),
        }
    }

    /// Create a new GetNews use case from cloned Arc<dyn Port> references.
    pub fn from_ports(news_feed: Arc<dyn NewsFeedPort>) -> Self {
        Self::new(news_feed)
    }

    pub fn default_sources() -> Vec<String> {
        DEFAULT_NEWS_SOURCES.iter().map(|s| s.to_string()).collect()
    }

    pub fn execute(&self, sources: Vec<String>) -> BoxStream<'static, anyhow::Result<Vec<Article>>> {
        let news_feed = self.news_feed.clone();
        let page_size = self.page_size;
        let sources = Arc::new(sources);

        let start = Cursor::Next {
            page: 1,
            delivered: 0,
        };

        stream::unfold(start, move |cursor| {
            let news_feed = news_feed.clone();
            let sources = sources.clone();
            async move {
                let Cursor::Next { page, delivered } = cursor else {
                    return None;
                };

                let fetched = news_feed
                    .fetch_page(&sources, page, page_size)
                    .await
                    .with_context(|| format!("failed to fetch news page {page}"));

                let news_page = match fetched {
                    Ok(news_page) => news_page,
                    Err(err) => {
                        warn!(page, error = %err, "news page failed, ending feed");
                        return Some((Err(err), Cursor::Done));
                    }
                };

                let received = news_page.articles.len();
                let delivered = delivered + received;
                let exhausted = received < page_size as usize
                    || delivered >= news_page.total_results;
                debug!(page, received, delivered, total = news_page.total_results, exhausted, "news page fetched");

                if received == 0 {
                    return None;
                }

                let next = if exhausted {
                    Cursor::Done
                } else {
                    Cursor::Next {
                        page: page + 1,
                        delivered,
                    }
                };
                Some((Ok(distinct_by_title(news_page.articles)), next))
            }
        })
        .boxed()
    }
}

/// Keep the first article for each title, preserving feed order.
fn distinct_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use na_core::ports::{NewsFeedError, NewsPage};

    struct MockFeed {
        total: usize,
        fail_on_page: Option<u32>,
        requests: Mutex<Vec<(Vec<String>, u32, u32)>>,
    }

    impl MockFeed {
        fn new(total: usize) -> Self {
            Self {
                total,
                fail_on_page: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn pages_requested(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|r| r.1).collect()
        }
    }

    #[async_trait]
    impl NewsFeedPort for MockFeed {
        async fn fetch_page(
            &self,
            sources: &[String],
            page: u32,
            page_size: u32,
        ) -> Result<NewsPage, NewsFeedError> {
            self.requests
                .lock()
                .unwrap()
                .push((sources.to_vec(), page, page_size));

            if sources.is_empty() {
                return Err(NewsFeedError::Rejected("no sources".into()));
            }
            if self.fail_on_page == Some(page) {
                return Err(NewsFeedError::Unavailable("offline".into()));
            }

            let start = (page as usize - 1) * page_size as usize;
            let end = (start + page_size as usize).min(self.total);
            let articles = (start..end)
                .map(|i| Article::new(format!("https://example.com/{i}"), format!("Title {i}")))
                .collect();
            Ok(NewsPage {
                articles,
                total_results: self.total,
            })
        }
    }

    #[tokio::test]
    async fn test_stream_is_lazy() {
        let feed = Arc::new(MockFeed::new(10));
        let use_case = GetNews::with_page_size(feed.clone(), 4);

        let _pages = use_case.execute(GetNews::default_sources());

        assert!(feed.pages_requested().is_empty());
    }

    #[tokio::test]
    async fn test_pages_until_short_page() {
        let feed = Arc::new(MockFeed::new(10));
        let use_case = GetNews::with_page_size(feed.clone(), 4);

        let pages: Vec<Vec<Article>> = use_case
            .execute(GetNews::default_sources())
            .map(|page| page.unwrap())
            .collect()
            .await;

        assert_eq!(pages.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 4, 2]);
        assert_eq!(feed.pages_requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stops_when_total_reached_on_full_page() {
        let feed = Arc::new(MockFeed::new(8));
        let use_case = GetNews::with_page_size(feed.clone(), 4);

        let pages: Vec<_> = use_case.execute(vec!["bbc-news".into()]).collect().await;

        assert_eq!(pages.len(), 2);
        assert_eq!(feed.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_feed_yields_nothing() {
        let feed = Arc::new(MockFeed::new(0));
        let use_case = GetNews::new(feed.clone());

        let pages: Vec<_> = use_case.execute(GetNews::default_sources()).collect().await;

        assert!(pages.is_empty());
        assert_eq!(feed.pages_requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let feed = Arc::new(MockFeed {
            fail_on_page: Some(2),
            ..MockFeed::new(100)
        });
        let use_case = GetNews::with_page_size(feed.clone(), 10);

        let pages: Vec<_> = use_case.execute(GetNews::default_sources()).collect().await;

        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_ok());
        assert!(pages[1].is_err());
        assert_eq!(feed.pages_requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_rejected_request_keeps_feed_error() {
        let feed = Arc::new(MockFeed::new(10));
        let use_case = GetNews::new(feed.clone());

        let pages: Vec<_> = use_case.execute(Vec::new()).collect().await;

        assert_eq!(pages.len(), 1);
        let err = pages.into_iter().next().unwrap().unwrap_err();
        assert!(err.to_string().contains("page 1"));
        assert!(matches!(
            err.downcast_ref::<NewsFeedError>(),
            Some(NewsFeedError::Rejected(_))
        ));
        assert_eq!(feed.pages_requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_sources_and_page_size_are_forwarded() {
        let feed = Arc::new(MockFeed::new(1));
        let use_case = GetNews::new(feed.clone());

        let _: Vec<_> = use_case.execute(GetNews::default_sources()).collect().await;

        let requests = feed.requests.lock().unwrap();
        assert_eq!(
            requests[0],
            (
                vec![
                    "bbc-news".to_string(),
                    "abc-news".to_string(),
                    "al-jazeera-english".to_string()
                ],
                1,
                DEFAULT_PAGE_SIZE
            )
        );
    }

    #[test]
    fn test_distinct_by_title_keeps_first() {
        let articles = vec![
            Article::new("https://example.com/1", "Same"),
            Article::new("https://example.com/2", "Other"),
            Article::new("https://example.com/3", "Same"),
        ];

        let urls: Vec<String> = distinct_by_title(articles)
            .into_iter()
            .map(|a| a.url)
            .collect();

        assert_eq!(urls, vec!["https://example.com/1", "https://example.com/2"]);
    }
}
