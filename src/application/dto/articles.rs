use crate::domain::article::validator::published_on_rule;
use crate::domain::article::{Article, ArticleUpdate, NewArticle};
use crate::domain::entity::{Entity, EntityId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::serde_time;
use crate::domain::validation::{SLUG_PATTERN, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{AppUserDto, CategoryDto};

/// Transport shape of an article. Field rules match the entity's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "dto_published_on", skip_on_field_errors = false))]
pub struct ArticleDto {
    #[serde(default)]
    pub id: EntityId,
    #[validate(
        custom(function = "not_blank", message = "Title is required"),
        length(max = 100, message = "Title must be 100 characters or fewer")
    )]
    pub title: String,
    #[validate(
        custom(function = "not_blank", message = "Introduction is required"),
        length(max = 200, message = "Introduction must be 200 characters or fewer")
    )]
    pub introduction: String,
    #[validate(
        custom(function = "not_blank", message = "Content is required"),
        length(max = 4000, message = "Content cannot exceed 4000 characters")
    )]
    pub content: String,
    #[validate(
        custom(function = "not_blank", message = "Cover image is required"),
        length(max = 200, message = "CoverImageUrl must be 200 characters or fewer")
    )]
    pub cover_image_url: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "URL slug is required"),
        length(max = 200, message = "UrlSlug must be 200 characters or fewer"),
        regex(
            path = *SLUG_PATTERN,
            message = "URL slug can only contain lowercase letters, numbers, and underscores"
        )
    )]
    pub url_slug: String,
    #[serde(default)]
    #[validate(required(message = "Author is required"))]
    pub author: Option<AppUserDto>,
    #[serde(default)]
    #[validate(required(message = "Categories is required"))]
    pub category: Option<CategoryDto>,
    #[serde(default, with = "serde_time")]
    pub created_on: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_archived: bool,
    /// Presentation hint only; never mapped to or from the entity.
    #[serde(default)]
    pub can_edit: bool,
}

impl Default for ArticleDto {
    fn default() -> Self {
        Self {
            id: EntityId::empty(),
            title: String::new(),
            introduction: String::new(),
            content: String::new(),
            cover_image_url: String::new(),
            url_slug: String::new(),
            author: None,
            category: None,
            created_on: DateTime::<Utc>::UNIX_EPOCH,
            modified_on: None,
            is_published: false,
            published_on: None,
            is_archived: false,
            can_edit: false,
        }
    }
}

impl ArticleDto {
    pub fn from_entity(article: &Article) -> Self {
        Self {
            id: article.id(),
            title: article.title.clone(),
            introduction: article.introduction.clone(),
            content: article.content.clone(),
            cover_image_url: article.cover_image_url.clone(),
            url_slug: article.url_slug.clone(),
            author: article.author.clone(),
            category: article.category.clone(),
            created_on: article.created_on(),
            modified_on: article.modified_on(),
            is_published: article.is_published,
            published_on: article.published_on,
            is_archived: article.is_archived,
            can_edit: false,
        }
    }

    #[must_use]
    pub const fn with_can_edit(mut self, can_edit: bool) -> Self {
        self.can_edit = can_edit;
        self
    }

    /// The content fields of this DTO in constructor form. Identity and
    /// timestamps are left behind.
    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.clone(),
            introduction: self.introduction.clone(),
            content: self.content.clone(),
            cover_image_url: self.cover_image_url.clone(),
            url_slug: self.url_slug.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            is_published: self.is_published,
            published_on: self.published_on,
            is_archived: self.is_archived,
        }
    }

    /// The editable fields of this DTO. The author is not editable.
    pub fn to_update(&self) -> ArticleUpdate {
        ArticleUpdate {
            title: self.title.clone(),
            introduction: self.introduction.clone(),
            content: self.content.clone(),
            cover_image_url: self.cover_image_url.clone(),
            url_slug: self.url_slug.clone(),
            category: self.category.clone(),
            is_published: self.is_published,
            published_on: self.published_on,
            is_archived: self.is_archived,
        }
    }
}

fn dto_published_on(dto: &ArticleDto) -> Result<(), ValidationError> {
    published_on_rule(dto.is_published, dto.published_on.as_ref())
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self::from_entity(article)
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::from_entity(&article)
    }
}

impl TryFrom<ArticleDto> for Article {
    type Error = DomainError;

    fn try_from(dto: ArticleDto) -> DomainResult<Self> {
        let fields = dto.to_new_article();
        Self::restore(dto.id, dto.created_on, dto.modified_on, fields)
    }
}
