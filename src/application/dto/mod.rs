pub mod articles;
pub mod categories;
pub mod users;
pub mod validators;

pub use crate::domain::snapshot::{AppUserDto, CategoryDto};
pub use articles::ArticleDto;
pub use validators::{AppUserDtoValidator, ArticleDtoValidator, CategoryDtoValidator};
