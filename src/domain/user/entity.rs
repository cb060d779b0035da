// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::validator::AppUserValidator;
use crate::domain::validation::{Validator, not_blank};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user as known to the blog. The id is the identity provider's subject,
/// so it is a plain string rather than an [`crate::domain::entity::EntityId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppUser {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "UserName is required"))]
    pub user_name: String,
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email must be a valid email address")
    )]
    pub email: String,
    pub roles: Vec<String>,
}

impl AppUser {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
    ) -> DomainResult<Self> {
        let user = Self::new_unvalidated(id, user_name, email, roles);
        user.validate()?;
        Ok(user)
    }

    /// Builds a user without running validation. Fixture use only.
    pub fn new_unvalidated(
        id: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            email: email.into(),
            roles,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        AppUserValidator.validate(self)?;
        Ok(())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
