use crate::domain::category::entity::Category;
use crate::domain::validation::{ValidationErrors, Validator, check};

pub const CATEGORY_NAME_MAX_LEN: usize = 80;

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryValidator;

impl Validator<Category> for CategoryValidator {
    fn validate(&self, category: &Category) -> Result<(), ValidationErrors> {
        check(category)
    }
}
