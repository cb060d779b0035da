use tracing::{error, warn};

use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        messages::{CATEGORY_NOT_FOUND, FAILED_TO_FIND_CATEGORY, ID_IS_EMPTY},
        ports::storage::StorageError,
    },
    domain::entity::EntityId,
};

impl CategoryQueryService {
    pub async fn get_category(&self, id: EntityId) -> ApplicationResult<CategoryDto> {
        if id.is_empty() {
            error!("{ID_IS_EMPTY}");
            return Err(ApplicationError::invalid_request(ID_IS_EMPTY));
        }

        let storage_failure = |err: StorageError| {
            error!(category_id = %id, error = %err, "{FAILED_TO_FIND_CATEGORY}");
            ApplicationError::storage(FAILED_TO_FIND_CATEGORY, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let category = context
            .categories()
            .find_one(id)
            .await
            .map_err(storage_failure)?
            .ok_or_else(|| {
                warn!(category_id = %id, "{CATEGORY_NOT_FOUND}");
                ApplicationError::not_found(CATEGORY_NOT_FOUND)
            })?;

        Ok(CategoryDto::from(&category))
    }
}
