// src/application/commands/articles/mod.rs
mod create;
mod edit;
mod publish;
mod service;

pub use publish::SetPublishStateCommand;
pub use service::ArticleCommandService;
