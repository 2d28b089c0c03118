use crate::db::schema::t_article;
use diesel::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = t_article)]
#[diesel(primary_key(url))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArticleRow {
    pub url: String,
    pub author: Option<String>,
    pub content: String,
    pub description: String,
    pub published_at: String,
    pub source_id: String,
    pub source_name: String,
    pub title: String,
    pub url_to_image: Option<String>,
    pub saved_at: i64,
}
