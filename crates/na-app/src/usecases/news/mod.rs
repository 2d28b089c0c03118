//! News feed and bookmark use cases.

mod get_news;
mod get_saved;

pub use get_news::{GetNews, DEFAULT_NEWS_SOURCES, DEFAULT_PAGE_SIZE};
pub use get_saved::GetSavedArticles;
