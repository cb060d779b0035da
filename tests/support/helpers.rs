// tests/support/helpers.rs
use std::sync::Arc;

use blog_core::application::ports::storage::BlogContextFactory;
use blog_core::application::services::ApplicationServices;
use blog_core::infrastructure::document_store::{InMemoryBlogContextFactory, InMemoryDocumentStore};

use super::mocks::{CountingContextFactory, DummyClock, DummySlug};

/// Services over a fresh in-memory store, plus handles for inspecting it.
pub struct TestApp {
    pub services: ApplicationServices,
    pub store: Arc<InMemoryDocumentStore>,
    pub factory: Arc<CountingContextFactory>,
}

impl TestApp {
    pub fn new() -> Self {
        init_tracing();
        let store = Arc::new(InMemoryDocumentStore::new("articlesDb"));
        let inner: Arc<dyn BlogContextFactory> =
            Arc::new(InMemoryBlogContextFactory::new(Arc::clone(&store)));
        let factory = Arc::new(CountingContextFactory::new(inner));
        let services = services_over(Arc::clone(&factory) as Arc<dyn BlogContextFactory>);
        Self {
            services,
            store,
            factory,
        }
    }

    pub fn storage_calls(&self) -> usize {
        self.factory.contexts_opened()
    }
}

pub fn services_over(contexts: Arc<dyn BlogContextFactory>) -> ApplicationServices {
    ApplicationServices::new(contexts, Arc::new(DummyClock), Arc::new(DummySlug))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
