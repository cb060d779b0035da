// src/fakes/articles.rs
use super::rng::FakeRng;
use super::{categories, text, users};
use crate::application::dto::ArticleDto;
use crate::domain::article::validator::CONTENT_MAX_LEN;
use crate::domain::article::{Article, NewArticle};

// Headroom below the content ceiling.
const CONTENT_BUDGET: usize = CONTENT_MAX_LEN - 100;

fn generate(rng: &mut FakeRng, use_seed: bool) -> Article {
    let title = text::title(rng);
    let url_slug = text::slugify(&title);
    let introduction = text::sentence(rng);
    let content = text::markdown(rng, 5, CONTENT_BUDGET);
    let cover_image_url = text::picsum_url(rng);
    let is_published = rng.next_bool();
    let is_archived = rng.next_bool();
    let now = rng.timestamp();

    Article::new_unvalidated(
        NewArticle {
            title,
            introduction,
            content,
            cover_image_url,
            url_slug,
            author: Some(users::new_app_user_dto(use_seed)),
            category: Some(categories::new_category_dto(use_seed)),
            is_published,
            published_on: is_published.then_some(now),
            is_archived,
        },
        now,
    )
}

pub fn new_article(use_seed: bool) -> Article {
    generate(&mut FakeRng::new(use_seed), use_seed)
}

pub fn articles_many(count: usize, use_seed: bool) -> Vec<Article> {
    let mut rng = FakeRng::new(use_seed);
    (0..count).map(|_| generate(&mut rng, use_seed)).collect()
}

pub fn new_article_dto(use_seed: bool) -> ArticleDto {
    ArticleDto::from(new_article(use_seed))
}

pub fn article_dtos_many(count: usize, use_seed: bool) -> Vec<ArticleDto> {
    articles_many(count, use_seed)
        .iter()
        .map(ArticleDto::from)
        .collect()
}
