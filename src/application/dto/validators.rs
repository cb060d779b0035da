//! Rule sets for the transport records. Article rules match the entity's so
//! a form can be checked before it is turned into an aggregate.

use super::{AppUserDto, ArticleDto, CategoryDto};
use crate::domain::validation::{ValidationErrors, Validator, check};

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleDtoValidator;

impl Validator<ArticleDto> for ArticleDtoValidator {
    fn validate(&self, dto: &ArticleDto) -> Result<(), ValidationErrors> {
        check(dto)
    }
}

/// Unlike the entity, a category record must carry an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryDtoValidator;

impl Validator<CategoryDto> for CategoryDtoValidator {
    fn validate(&self, dto: &CategoryDto) -> Result<(), ValidationErrors> {
        check(dto)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppUserDtoValidator;

impl Validator<AppUserDto> for AppUserDtoValidator {
    fn validate(&self, dto: &AppUserDto) -> Result<(), ValidationErrors> {
        check(dto)
    }
}
