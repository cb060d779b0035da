// src/application/ports/storage.rs
//! Document-store collaborator used by the handlers.
//!
//! A context is opened per operation and hands out typed collections. The
//! collections speak in whole documents: no partial updates, no projections.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::entity::{Document, EntityId};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("document serialization failed: {0}")]
    Serialization(String),
    #[error("duplicate document id: {0}")]
    Duplicate(EntityId),
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    ById(EntityId),
    NotArchived,
}

impl Filter {
    pub fn matches<T: Document>(&self, document: &T) -> bool {
        match self {
            Self::All => true,
            Self::ById(id) => document.id() == *id,
            Self::NotArchived => !document.is_archived(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub matched: u64,
}

impl ReplaceOutcome {
    pub const fn matched_any(&self) -> bool {
        self.matched > 0
    }
}

#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    async fn find(&self, filter: &Filter) -> StorageResult<Vec<T>>;
    async fn insert_one(&self, document: T) -> StorageResult<()>;
    async fn replace_one(&self, id: EntityId, document: T) -> StorageResult<ReplaceOutcome>;

    async fn find_one(&self, id: EntityId) -> StorageResult<Option<T>> {
        Ok(self.find(&Filter::ById(id)).await?.into_iter().next())
    }
}

pub trait BlogContext: Send + Sync {
    fn articles(&self) -> Arc<dyn Collection<Article>>;
    fn categories(&self) -> Arc<dyn Collection<Category>>;
}

#[async_trait]
pub trait BlogContextFactory: Send + Sync {
    async fn create_context(&self) -> StorageResult<Arc<dyn BlogContext>>;
}
