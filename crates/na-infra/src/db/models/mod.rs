mod article_row;

pub use article_row::ArticleRow;
