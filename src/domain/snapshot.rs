// src/domain/snapshot.rs
//! Denormalised records an article carries for its author and category.
//!
//! They are copies taken when the article is written, not references: later
//! edits to the user or category do not reach articles already stored. The
//! same records are the transport shape for users and categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entity::EntityId;
use crate::domain::serde_time;
use crate::domain::validation::not_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppUserDto {
    pub id: String,
    #[validate(custom(function = "not_blank", message = "UserName is required"))]
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl AppUserDto {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.user_name.is_empty() && self.email.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(default)]
    #[validate(custom(function = "id_present", message = "Id is required"))]
    pub id: EntityId,
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 80, message = "CategoryName must be 80 characters or fewer")
    )]
    pub category_name: String,
    #[serde(default, with = "serde_time")]
    pub created_on: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_archived: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: EntityId::empty(),
            category_name: String::new(),
            created_on: DateTime::<Utc>::UNIX_EPOCH,
            modified_on: None,
            is_archived: false,
        }
    }
}

fn id_present(id: &EntityId) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::new("empty_id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_snapshot_needs_only_a_name_to_deserialize() {
        let dto: CategoryDto =
            serde_json::from_str(r#"{ "category_name": "Web Development" }"#).unwrap();
        assert!(dto.id.is_empty());
        assert_eq!(dto.created_on, DateTime::<Utc>::UNIX_EPOCH);
        assert!(dto.modified_on.is_none());
    }

    #[test]
    fn empty_user_snapshot() {
        assert!(AppUserDto::default().is_empty());
    }
}
