// src/domain/article/entity.rs
use crate::domain::article::validator::{ArticleValidator, article_published_on};
use crate::domain::entity::{Document, Entity, EntityId, EntityMeta};
use crate::domain::errors::DomainResult;
use crate::domain::snapshot::{AppUserDto, CategoryDto};
use crate::domain::validation::{SLUG_PATTERN, Validator, not_blank};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A blog article.
///
/// Content fields are public: callers may set them freely and the invariants
/// (required fields, length ceilings, slug shape, `published_on` present when
/// published) are checked by [`Article::validate`], which construction and
/// [`Article::update`] run for them. Identity and timestamps are private and
/// only move through the mutation methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "article_published_on", skip_on_field_errors = false))]
pub struct Article {
    #[serde(flatten)]
    meta: EntityMeta,
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
    #[validate(
        custom(function = "not_blank", message = "URL slug is required"),
        length(max = 200, message = "UrlSlug must be 200 characters or fewer"),
        regex(
            path = *SLUG_PATTERN,
            message = "URL slug can only contain lowercase letters, numbers, and underscores"
        )
    )]
    pub url_slug: String,
    #[validate(required(message = "Author is required"))]
    pub author: Option<AppUserDto>,
    #[validate(required(message = "Categories is required"))]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub published_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_archived: bool,
}

/// Everything needed to construct an article.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: String,
    pub url_slug: String,
    pub author: Option<AppUserDto>,
    pub category: Option<CategoryDto>,
    pub is_published: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub is_archived: bool,
}

/// Full replacement of an article's mutable fields. The author is fixed at
/// creation and is not part of an update.
#[derive(Debug, Clone, Default)]
pub struct ArticleUpdate {
    pub title: String,
    pub introduction: String,
    pub content: String,
    pub cover_image_url: String,
    pub url_slug: String,
    pub category: Option<CategoryDto>,
    pub is_published: bool,
    pub published_on: Option<DateTime<Utc>>,
    pub is_archived: bool,
}

impl Article {
    pub fn new(new: NewArticle, now: DateTime<Utc>) -> DomainResult<Self> {
        let article = Self::new_unvalidated(new, now);
        article.validate()?;
        Ok(article)
    }

    /// Builds an article without running validation. Fixture use only.
    pub fn new_unvalidated(new: NewArticle, now: DateTime<Utc>) -> Self {
        Self::assemble(EntityMeta::new(now), new)
    }

    /// Rehydrates a stored or transported article, keeping its identity.
    pub fn restore(
        id: EntityId,
        created_on: DateTime<Utc>,
        modified_on: Option<DateTime<Utc>>,
        fields: NewArticle,
    ) -> DomainResult<Self> {
        let article = Self::assemble(EntityMeta::restore(id, created_on, modified_on), fields);
        article.validate()?;
        Ok(article)
    }

    fn assemble(meta: EntityMeta, new: NewArticle) -> Self {
        Self {
            meta,
            title: new.title,
            introduction: new.introduction,
            content: new.content,
            cover_image_url: new.cover_image_url,
            url_slug: new.url_slug,
            author: new.author,
            category: new.category,
            is_published: new.is_published,
            published_on: new.published_on,
            is_archived: new.is_archived,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ArticleValidator.validate(self)?;
        Ok(())
    }

    pub const fn is_draft(&self) -> bool {
        !self.is_published
    }

    pub fn publish(&mut self, published_on: DateTime<Utc>, now: DateTime<Utc>) {
        self.is_published = true;
        self.published_on = Some(published_on);
        self.meta.touch(now);
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_published = false;
        self.published_on = None;
        self.meta.touch(now);
    }

    /// Replaces every mutable field and re-runs validation. The update is
    /// staged on a copy; if it is rejected `self` keeps its previous state.
    pub fn update(&mut self, update: ArticleUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        let mut staged = self.clone();
        staged.title = update.title;
        staged.introduction = update.introduction;
        staged.content = update.content;
        staged.cover_image_url = update.cover_image_url;
        staged.url_slug = update.url_slug;
        staged.category = update.category;
        staged.is_published = update.is_published;
        staged.published_on = update.published_on;
        staged.is_archived = update.is_archived;
        staged.validate()?;
        staged.meta.touch(now);
        *self = staged;
        Ok(())
    }
}

impl Entity for Article {
    fn meta(&self) -> &EntityMeta {
        &self.meta
    }
}

impl Document for Article {
    fn is_archived(&self) -> bool {
        self.is_archived
    }
}
