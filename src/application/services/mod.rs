// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    commands::{articles::ArticleCommandService, categories::CategoryCommandService},
    ports::{storage::BlogContextFactory, time::Clock, util::SlugGenerator},
    queries::{articles::ArticleQueryService, categories::CategoryQueryService},
};

/// Every handler, wired to one storage factory and one clock.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        contexts: Arc<dyn BlogContextFactory>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&contexts),
            slugger,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&contexts)));

        let category_commands =
            Arc::new(CategoryCommandService::new(Arc::clone(&contexts), clock));
        let category_queries = Arc::new(CategoryQueryService::new(contexts));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
        }
    }
}
