// src/application/ports/util.rs
/// Turns free text into a URL slug made of `[a-z0-9_]`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
