// src/application/messages.rs
//! Failure and log messages shared by the handlers.

pub const REQUEST_IS_NULL: &str = "The request is null.";
pub const ID_IS_EMPTY: &str = "The ID cannot be empty.";

pub const ARTICLE_NOT_FOUND: &str = "Article not found";
pub const NO_ARTICLES_FOUND: &str = "No articles found";
pub const FAILED_TO_CREATE_ARTICLE: &str = "Failed to create article";
pub const FAILED_TO_UPDATE_ARTICLE: &str = "Failed to update article";
pub const FAILED_TO_FIND_ARTICLE: &str = "Failed to find the article";
pub const FAILED_TO_RETRIEVE_ARTICLES: &str = "Failed to retrieve articles";

pub const CATEGORY_NOT_FOUND: &str = "Category not found";
pub const NO_CATEGORIES_FOUND: &str = "No categories found";
pub const CATEGORY_NAME_EMPTY: &str = "Category name cannot be empty";
pub const FAILED_TO_CREATE_CATEGORY: &str = "Failed to create category";
pub const FAILED_TO_UPDATE_CATEGORY: &str = "Failed to update category";
pub const FAILED_TO_FIND_CATEGORY: &str = "Failed to find the category";
pub const FAILED_TO_RETRIEVE_CATEGORIES: &str = "Failed to retrieve categories";

pub const INVALID_ENTITY_NAME: &str = "Invalid entity name provided.";
