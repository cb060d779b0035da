// src/application/commands/categories/mod.rs
mod create;
mod edit;
mod service;

pub use service::CategoryCommandService;
