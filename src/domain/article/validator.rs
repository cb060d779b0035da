// src/domain/article/validator.rs
//! Article rules that are not a single field's business. Field rules are
//! declared on [`Article`] and on the article DTO.
use crate::domain::article::entity::Article;
use crate::domain::validation::{ValidationErrors, Validator, check, struct_failure};
use chrono::{DateTime, Utc};
use validator::ValidationError;

pub const TITLE_MAX_LEN: usize = 100;
pub const INTRODUCTION_MAX_LEN: usize = 200;
pub const COVER_IMAGE_URL_MAX_LEN: usize = 200;
pub const URL_SLUG_MAX_LEN: usize = 200;
pub const CONTENT_MAX_LEN: usize = 4000;

pub const PUBLISHED_ON_REQUIRED: &str = "PublishedOn is required when IsPublished is true";

/// A published article must say when it was published.
pub fn published_on_rule(
    is_published: bool,
    published_on: Option<&DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if is_published && published_on.is_none() {
        return Err(struct_failure("published_on", PUBLISHED_ON_REQUIRED));
    }
    Ok(())
}

pub(crate) fn article_published_on(article: &Article) -> Result<(), ValidationError> {
    published_on_rule(article.is_published, article.published_on.as_ref())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleValidator;

impl Validator<Article> for ArticleValidator {
    fn validate(&self, article: &Article) -> Result<(), ValidationErrors> {
        check(article)
    }
}
