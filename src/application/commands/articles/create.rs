// src/application/commands/articles/create.rs
use tracing::{error, info, warn};

use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        messages::{FAILED_TO_CREATE_ARTICLE, REQUEST_IS_NULL},
    },
    domain::{article::Article, entity::Entity},
};

impl ArticleCommandService {
    /// Persists a new article built from `request`. A fresh id is assigned;
    /// any id or timestamps on the request are ignored. A blank slug is
    /// derived from the title.
    pub async fn create_article(
        &self,
        request: Option<ArticleDto>,
    ) -> ApplicationResult<ArticleDto> {
        let Some(request) = request else {
            error!("{REQUEST_IS_NULL}");
            return Err(ApplicationError::invalid_request(REQUEST_IS_NULL));
        };

        let mut fields = request.to_new_article();
        if fields.url_slug.trim().is_empty() {
            fields.url_slug = self.slugger.slugify(&fields.title);
        }

        let article = Article::new(fields, self.clock.now()).map_err(|err| {
            warn!(error = %err, "Article failed validation");
            ApplicationError::from_domain(err)
        })?;

        let context = self.contexts.create_context().await.map_err(|err| {
            error!(error = %err, "{FAILED_TO_CREATE_ARTICLE}");
            ApplicationError::storage(FAILED_TO_CREATE_ARTICLE, &err)
        })?;

        context
            .articles()
            .insert_one(article.clone())
            .await
            .map_err(|err| {
                error!(article_id = %article.id(), error = %err, "{FAILED_TO_CREATE_ARTICLE}");
                ApplicationError::storage(FAILED_TO_CREATE_ARTICLE, &err)
            })?;

        info!(article_id = %article.id(), slug = %article.url_slug, "Article created successfully");
        Ok(ArticleDto::from(&article))
    }
}
