use crate::domain::category::Category;
use crate::domain::entity::Entity;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::snapshot::CategoryDto;

impl CategoryDto {
    pub fn from_entity(category: &Category) -> Self {
        Self {
            id: category.id(),
            category_name: category.category_name.clone(),
            created_on: category.created_on(),
            modified_on: category.modified_on(),
            is_archived: category.is_archived,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self::from_entity(category)
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self::from_entity(&category)
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = DomainError;

    fn try_from(dto: CategoryDto) -> DomainResult<Self> {
        Self::restore(
            dto.id,
            dto.created_on,
            dto.modified_on,
            dto.category_name,
            dto.is_archived,
        )
    }
}
