// src/application/commands/categories/create.rs
use tracing::{error, info, warn};

use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        messages::{FAILED_TO_CREATE_CATEGORY, REQUEST_IS_NULL},
        ports::storage::StorageError,
    },
    domain::{category::Category, entity::Entity},
};

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        request: Option<CategoryDto>,
    ) -> ApplicationResult<CategoryDto> {
        let Some(request) = request else {
            error!("{REQUEST_IS_NULL}");
            return Err(ApplicationError::invalid_request(REQUEST_IS_NULL));
        };

        let mut category = Category::new(request.category_name, self.clock.now()).map_err(|err| {
            warn!(error = %err, "Category failed validation");
            ApplicationError::from_domain(err)
        })?;
        category.is_archived = request.is_archived;

        let storage_failure = |err: StorageError| {
            error!(error = %err, "{FAILED_TO_CREATE_CATEGORY}");
            ApplicationError::storage(FAILED_TO_CREATE_CATEGORY, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        context
            .categories()
            .insert_one(category.clone())
            .await
            .map_err(storage_failure)?;

        info!(
            category_id = %category.id(),
            name = %category.category_name,
            "Category created successfully"
        );
        Ok(CategoryDto::from(&category))
    }
}
