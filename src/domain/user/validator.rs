use crate::domain::user::entity::AppUser;
use crate::domain::validation::{ValidationErrors, Validator, check};

#[derive(Debug, Clone, Copy, Default)]
pub struct AppUserValidator;

impl Validator<AppUser> for AppUserValidator {
    fn validate(&self, user: &AppUser) -> Result<(), ValidationErrors> {
        check(user)
    }
}
