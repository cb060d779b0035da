use tracing::{debug, error, warn};

use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    messages::{FAILED_TO_RETRIEVE_ARTICLES, NO_ARTICLES_FOUND},
    ports::storage::{Filter, StorageError},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery {
    pub exclude_archived: bool,
}

impl ArticleQueryService {
    /// Every stored article, optionally without archived ones. An empty
    /// result is reported as `NotFound`.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = if query.exclude_archived {
            Filter::NotArchived
        } else {
            Filter::All
        };

        let storage_failure = |err: StorageError| {
            error!(error = %err, "{FAILED_TO_RETRIEVE_ARTICLES}");
            ApplicationError::storage(FAILED_TO_RETRIEVE_ARTICLES, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let articles = context
            .articles()
            .find(&filter)
            .await
            .map_err(storage_failure)?;

        if articles.is_empty() {
            warn!(?filter, "{NO_ARTICLES_FOUND}");
            return Err(ApplicationError::not_found(NO_ARTICLES_FOUND));
        }

        debug!(count = articles.len(), ?filter, "articles listed");
        Ok(articles.iter().map(ArticleDto::from).collect())
    }
}
