// src/application/commands/articles/edit.rs
use tracing::{error, info, warn};

use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        messages::{ARTICLE_NOT_FOUND, FAILED_TO_UPDATE_ARTICLE, ID_IS_EMPTY, REQUEST_IS_NULL},
        ports::storage::StorageError,
    },
    domain::entity::Entity,
};

impl ArticleCommandService {
    /// Applies the editable fields of `request` onto the stored article with
    /// the same id and replaces the stored document. Identity, creation time
    /// and author are kept from the stored article.
    pub async fn edit_article(&self, request: Option<ArticleDto>) -> ApplicationResult<ArticleDto> {
        let Some(request) = request else {
            error!("{REQUEST_IS_NULL}");
            return Err(ApplicationError::invalid_request(REQUEST_IS_NULL));
        };
        if request.id.is_empty() {
            error!("{ID_IS_EMPTY}");
            return Err(ApplicationError::invalid_request(ID_IS_EMPTY));
        }

        let storage_failure = |err: StorageError| {
            error!(article_id = %request.id, error = %err, "{FAILED_TO_UPDATE_ARTICLE}");
            ApplicationError::storage(FAILED_TO_UPDATE_ARTICLE, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let articles = context.articles();

        let Some(mut article) = articles.find_one(request.id).await.map_err(storage_failure)? else {
            warn!(article_id = %request.id, "{ARTICLE_NOT_FOUND}");
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        };

        article
            .update(request.to_update(), self.clock.now())
            .map_err(|err| {
                warn!(article_id = %request.id, error = %err, "Article update failed validation");
                ApplicationError::from_domain(err)
            })?;

        let outcome = articles
            .replace_one(article.id(), article.clone())
            .await
            .map_err(storage_failure)?;
        if !outcome.matched_any() {
            warn!(article_id = %request.id, "{ARTICLE_NOT_FOUND}");
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        }

        info!(article_id = %article.id(), "Article updated successfully");
        Ok(ArticleDto::from(&article))
    }
}
