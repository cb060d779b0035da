// src/fakes/categories.rs
use super::rng::FakeRng;
use super::text;
use crate::application::dto::CategoryDto;
use crate::domain::category::Category;

fn generate(rng: &mut FakeRng) -> Category {
    let name = text::category_name(rng);
    let is_archived = rng.next_bool();
    Category::new_unvalidated(name, is_archived, rng.timestamp())
}

pub fn new_category(use_seed: bool) -> Category {
    generate(&mut FakeRng::new(use_seed))
}

pub fn categories_many(count: usize, use_seed: bool) -> Vec<Category> {
    let mut rng = FakeRng::new(use_seed);
    (0..count).map(|_| generate(&mut rng)).collect()
}

pub fn new_category_dto(use_seed: bool) -> CategoryDto {
    CategoryDto::from(new_category(use_seed))
}

pub fn category_dtos_many(count: usize, use_seed: bool) -> Vec<CategoryDto> {
    categories_many(count, use_seed)
        .iter()
        .map(CategoryDto::from)
        .collect()
}
