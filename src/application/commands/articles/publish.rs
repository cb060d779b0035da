// src/application/commands/articles/publish.rs
use tracing::{error, info, warn};

use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        messages::{ARTICLE_NOT_FOUND, FAILED_TO_UPDATE_ARTICLE, ID_IS_EMPTY},
        ports::storage::StorageError,
    },
    domain::entity::{Entity, EntityId},
};

pub struct SetPublishStateCommand {
    pub id: EntityId,
    pub publish: bool,
}

impl ArticleCommandService {
    pub async fn set_article_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        if command.id.is_empty() {
            error!("{ID_IS_EMPTY}");
            return Err(ApplicationError::invalid_request(ID_IS_EMPTY));
        }

        let storage_failure = |err: StorageError| {
            error!(article_id = %command.id, error = %err, "{FAILED_TO_UPDATE_ARTICLE}");
            ApplicationError::storage(FAILED_TO_UPDATE_ARTICLE, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let articles = context.articles();

        let Some(mut article) = articles.find_one(command.id).await.map_err(storage_failure)? else {
            warn!(article_id = %command.id, "{ARTICLE_NOT_FOUND}");
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        };

        if article.is_published == command.publish {
            return Ok(ArticleDto::from(&article));
        }

        let now = self.clock.now();
        if command.publish {
            article.publish(now, now);
        } else {
            article.unpublish(now);
        }

        let outcome = articles
            .replace_one(article.id(), article.clone())
            .await
            .map_err(storage_failure)?;
        if !outcome.matched_any() {
            warn!(article_id = %command.id, "{ARTICLE_NOT_FOUND}");
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        }

        info!(
            article_id = %article.id(),
            published = article.is_published,
            "Article publish state updated"
        );
        Ok(ArticleDto::from(&article))
    }
}
