// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Lowercase `[a-z0-9]` words joined by single underscores.
pub fn slugify(input: &str) -> String {
    slug::slugify(input).replace('-', "_")
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
