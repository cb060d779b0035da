pub mod article;
pub mod category;
pub mod entity;
pub mod errors;
pub mod serde_time;
pub mod snapshot;
pub mod user;
pub mod validation;
