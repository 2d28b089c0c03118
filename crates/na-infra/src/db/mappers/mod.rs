pub mod article_mapper;
