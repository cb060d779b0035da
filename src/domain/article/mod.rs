pub mod entity;
pub mod validator;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use self::validator::ArticleValidator;
