// src/infrastructure/collections.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    messages::INVALID_ENTITY_NAME,
};

pub const ARTICLE_COLLECTION: &str = "articles";
pub const CATEGORY_COLLECTION: &str = "categories";

/// Maps a logical entity name onto the physical collection storing it.
pub fn collection_name(entity_name: Option<&str>) -> ApplicationResult<&'static str> {
    match entity_name {
        Some("Article") => Ok(ARTICLE_COLLECTION),
        Some("Category") => Ok(CATEGORY_COLLECTION),
        _ => Err(ApplicationError::invalid_request(INVALID_ENTITY_NAME)),
    }
}
