// tests/support/mocks/storage.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use blog_core::application::ports::storage::{
    BlogContext, BlogContextFactory, Collection, Filter, ReplaceOutcome, StorageError,
    StorageResult,
};
use blog_core::domain::article::Article;
use blog_core::domain::category::Category;
use blog_core::domain::entity::{Document, EntityId};

/// Delegates to another factory and counts how often a context was opened.
pub struct CountingContextFactory {
    inner: Arc<dyn BlogContextFactory>,
    opened: AtomicUsize,
}

impl CountingContextFactory {
    pub fn new(inner: Arc<dyn BlogContextFactory>) -> Self {
        Self {
            inner,
            opened: AtomicUsize::new(0),
        }
    }

    pub fn contexts_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlogContextFactory for CountingContextFactory {
    async fn create_context(&self) -> StorageResult<Arc<dyn BlogContext>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.inner.create_context().await
    }
}

/// Never hands out a context.
pub struct UnavailableFactory;

#[async_trait]
impl BlogContextFactory for UnavailableFactory {
    async fn create_context(&self) -> StorageResult<Arc<dyn BlogContext>> {
        Err(StorageError::Unavailable("connection refused".into()))
    }
}

/// Opens contexts whose collections fail every call.
pub struct FailingCollectionsFactory;

struct FailingCollection;

#[async_trait]
impl<T: Document> Collection<T> for FailingCollection {
    async fn find(&self, _filter: &Filter) -> StorageResult<Vec<T>> {
        Err(StorageError::Backend("disk read error".into()))
    }

    async fn insert_one(&self, _document: T) -> StorageResult<()> {
        Err(StorageError::Backend("disk write error".into()))
    }

    async fn replace_one(&self, _id: EntityId, _document: T) -> StorageResult<ReplaceOutcome> {
        Err(StorageError::Backend("disk write error".into()))
    }
}

struct FailingContext;

impl BlogContext for FailingContext {
    fn articles(&self) -> Arc<dyn Collection<Article>> {
        Arc::new(FailingCollection)
    }

    fn categories(&self) -> Arc<dyn Collection<Category>> {
        Arc::new(FailingCollection)
    }
}

#[async_trait]
impl BlogContextFactory for FailingCollectionsFactory {
    async fn create_context(&self) -> StorageResult<Arc<dyn BlogContext>> {
        Ok(Arc::new(FailingContext))
    }
}
