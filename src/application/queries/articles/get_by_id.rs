use tracing::{error, warn};

use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        messages::{ARTICLE_NOT_FOUND, FAILED_TO_FIND_ARTICLE, ID_IS_EMPTY},
        ports::storage::StorageError,
    },
    domain::entity::EntityId,
};

impl ArticleQueryService {
    pub async fn get_article(&self, id: EntityId) -> ApplicationResult<ArticleDto> {
        if id.is_empty() {
            error!("{ID_IS_EMPTY}");
            return Err(ApplicationError::invalid_request(ID_IS_EMPTY));
        }

        let storage_failure = |err: StorageError| {
            error!(article_id = %id, error = %err, "{FAILED_TO_FIND_ARTICLE}");
            ApplicationError::storage(FAILED_TO_FIND_ARTICLE, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let article = context
            .articles()
            .find_one(id)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| {
                warn!(article_id = %id, "{ARTICLE_NOT_FOUND}");
                ApplicationError::not_found(ARTICLE_NOT_FOUND)
            })?;

        Ok(ArticleDto::from(&article))
    }
}
