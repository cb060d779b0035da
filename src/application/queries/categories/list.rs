use tracing::{debug, error, warn};

use super::CategoryQueryService;
use crate::application::{
    dto::CategoryDto,
    error::{ApplicationError, ApplicationResult},
    messages::{FAILED_TO_RETRIEVE_CATEGORIES, NO_CATEGORIES_FOUND},
    ports::storage::{Filter, StorageError},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCategoriesQuery {
    pub exclude_archived: bool,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let filter = if query.exclude_archived {
            Filter::NotArchived
        } else {
            Filter::All
        };

        let storage_failure = |err: StorageError| {
            error!(error = %err, "{FAILED_TO_RETRIEVE_CATEGORIES}");
            ApplicationError::storage(FAILED_TO_RETRIEVE_CATEGORIES, &err)
        };

        let context = self.contexts.create_context().await.map_err(storage_failure)?;
        let categories = context
            .categories()
            .find(&filter)
            .await
            .map_err(storage_failure)?;

        if categories.is_empty() {
            warn!(?filter, "{NO_CATEGORIES_FOUND}");
            return Err(ApplicationError::not_found(NO_CATEGORIES_FOUND));
        }

        debug!(count = categories.len(), ?filter, "categories listed");
        Ok(categories.iter().map(CategoryDto::from).collect())
    }
}
