// src/application/commands/categories/edit.rs
use tracing::{error, info, warn};

use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        messages::{
            CATEGORY_NAME_EMPTY, CATEGORY_NOT_FOUND, FAILED_TO_UPDATE_CATEGORY, ID_IS_EMPTY,
            REQUEST_IS_NULL,
        },
        ports::storage::StorageError,
    },
    domain::entity::Entity,
};

impl CategoryCommandService {
    pub async fn edit_category(
        &self,
        request: Option<CategoryDto>,
    ) -> ApplicationResult<CategoryDto> {
        let Some(request) = request else {
            error!("{REQUEST_IS_NULL}");
            return Err(ApplicationError::invalid_request(REQUEST_IS_NULL));
        };
        if request.id.is_empty() {
            error!("{ID_IS_EMPTY}");
            return Err(ApplicationError::invalid_request(ID_IS_EMPTY));
        }
        if request.category_name.trim().is_empty() {
            error!(category_id = %request.id, "{CATEGORY_NAME_EMPTY}");
            return Err(ApplicationError::invalid_request(CATEGORY_NAME_EMPTY));
        }

        let storage_failure = |err: StorageError| {
            error!(category_id = %request.id, error = %err, "{FAILED_TO_UPDATE_CATEGORY}");
            ApplicationError::storage(FAILED_TO_UPDATE_CATEGORY, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let categories = context.categories();

        let Some(mut category) = categories.find_one(request.id).await.map_err(storage_failure)?
        else {
            warn!(category_id = %request.id, "{CATEGORY_NOT_FOUND}");
            return Err(ApplicationError::not_found(CATEGORY_NOT_FOUND));
        };

        category
            .update(
                request.category_name.clone(),
                request.is_archived,
                self.clock.now(),
            )
            .map_err(|err| {
                warn!(category_id = %request.id, error = %err, "Category update failed validation");
                ApplicationError::from_domain(err)
            })?;

        let outcome = categories
            .replace_one(category.id(), category.clone())
            .await
            .map_err(storage_failure)?;
        if !outcome.matched_any() {
            warn!(category_id = %request.id, "{CATEGORY_NOT_FOUND}");
            return Err(ApplicationError::not_found(CATEGORY_NOT_FOUND));
        }

        info!(category_id = %category.id(), "Category updated successfully");
        Ok(CategoryDto::from(&category))
    }
}
