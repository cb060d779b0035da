// tests/support/builders.rs
use blog_core::application::dto::{AppUserDto, ArticleDto, CategoryDto};
use blog_core::domain::entity::EntityId;

use super::mocks::fixed_now;

pub fn author() -> AppUserDto {
    AppUserDto {
        id: "auth0|author".into(),
        user_name: "Test Author".into(),
        email: "author@example.com".into(),
        roles: vec!["Author".into()],
    }
}

pub fn category_dto(name: &str) -> CategoryDto {
    CategoryDto {
        id: EntityId::new(),
        category_name: name.into(),
        created_on: fixed_now(),
        ..CategoryDto::default()
    }
}

/// Builds a create/edit request for an article. Starts out valid.
pub struct ArticleDtoBuilder {
    dto: ArticleDto,
}

impl ArticleDtoBuilder {
    pub fn new() -> Self {
        Self {
            dto: ArticleDto {
                title: "Test Article".into(),
                introduction: "A short introduction.".into(),
                content: "Some content worth reading.".into(),
                cover_image_url: "https://picsum.photos/640/480/?image=1".into(),
                url_slug: "test_article".into(),
                author: Some(author()),
                category: Some(category_dto("Web Development")),
                ..ArticleDto::default()
            },
        }
    }

    pub fn id(mut self, id: EntityId) -> Self {
        self.dto.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.dto.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.dto.url_slug = slug.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.dto.is_published = true;
        self.dto.published_on = Some(fixed_now());
        self
    }

    pub fn archived(mut self) -> Self {
        self.dto.is_archived = true;
        self
    }

    pub fn build(self) -> ArticleDto {
        self.dto
    }
}

impl Default for ArticleDtoBuilder {
    fn default() -> Self {
        Self::new()
    }
}
