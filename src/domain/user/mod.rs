// src/domain/user/mod.rs
pub mod entity;
pub mod validator;
pub mod value_objects;

pub use entity::AppUser;
pub use self::validator::AppUserValidator;
pub use value_objects::Role;
