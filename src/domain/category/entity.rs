// src/domain/category/entity.rs
use crate::domain::category::validator::CategoryValidator;
use crate::domain::entity::{Document, Entity, EntityId, EntityMeta};
use crate::domain::errors::DomainResult;
use crate::domain::validation::{Validator, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Category {
    #[serde(flatten)]
    meta: EntityMeta,
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 80, message = "CategoryName must be 80 characters or fewer")
    )]
    pub category_name: String,
    #[serde(default)]
    pub is_archived: bool,
}

impl Category {
    pub fn new(category_name: impl Into<String>, now: DateTime<Utc>) -> DomainResult<Self> {
        let category = Self::new_unvalidated(category_name, false, now);
        category.validate()?;
        Ok(category)
    }

    /// Builds a category without running validation. Fixture use only.
    pub fn new_unvalidated(
        category_name: impl Into<String>,
        is_archived: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            meta: EntityMeta::new(now),
            category_name: category_name.into(),
            is_archived,
        }
    }

    /// Rehydrates a stored or transported category, keeping its identity.
    pub fn restore(
        id: EntityId,
        created_on: DateTime<Utc>,
        modified_on: Option<DateTime<Utc>>,
        category_name: impl Into<String>,
        is_archived: bool,
    ) -> DomainResult<Self> {
        let category = Self {
            meta: EntityMeta::restore(id, created_on, modified_on),
            category_name: category_name.into(),
            is_archived,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn validate(&self) -> DomainResult<()> {
        CategoryValidator.validate(self)?;
        Ok(())
    }

    /// Replaces the mutable fields. The change is validated before it is
    /// applied, so a rejected update leaves `self` untouched.
    pub fn update(
        &mut self,
        category_name: impl Into<String>,
        is_archived: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut staged = self.clone();
        staged.category_name = category_name.into();
        staged.is_archived = is_archived;
        staged.validate()?;
        staged.meta.touch(now);
        *self = staged;
        Ok(())
    }
}

impl Entity for Category {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl Document for Category {
    fn is_archived(&self) -> bool {
        self.is_archived
    }
}
