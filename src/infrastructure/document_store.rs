// src/infrastructure/document_store.rs
//! In-process document store.
//!
//! Documents are kept as JSON values per named collection, the way a
//! Mongo-style server would hold them, and decoded into aggregates on every
//! read. Writers take the store-wide lock; the last writer wins.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::ports::storage::{
    BlogContext, BlogContextFactory, Collection, Filter, ReplaceOutcome, StorageError,
    StorageResult,
};
use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::entity::{Document, EntityId};
use crate::infrastructure::collections::collection_name;

/// Aggregates that know which logical entity they are stored as.
pub trait StoredDocument: Document + Serialize + DeserializeOwned {
    const ENTITY_NAME: &'static str;
}

impl StoredDocument for Article {
    const ENTITY_NAME: &'static str = "Article";
}

impl StoredDocument for Category {
    const ENTITY_NAME: &'static str = "Category";
}

type RawCollection = Vec<(EntityId, Value)>;

pub struct InMemoryDocumentStore {
    database: String,
    collections: RwLock<HashMap<&'static str, RawCollection>>,
    online: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collections: RwLock::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Simulates losing the connection: new contexts fail with
    /// [`StorageError::Unavailable`] until the store is brought back.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

pub struct JsonCollection<T> {
    store: Arc<InMemoryDocumentStore>,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: StoredDocument> JsonCollection<T> {
    fn open(store: Arc<InMemoryDocumentStore>) -> StorageResult<Self> {
        let name = collection_name(Some(T::ENTITY_NAME))
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        Ok(Self {
            store,
            name,
            _marker: PhantomData,
        })
    }
}

#[async_trait]
impl<T: StoredDocument> Collection<T> for JsonCollection<T> {
    async fn find(&self, filter: &Filter) -> StorageResult<Vec<T>> {
        let collections = self.store.collections.read().await;
        let Some(raw) = collections.get(self.name) else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        for (id, value) in raw {
            if let Filter::ById(wanted) = filter
                && wanted != id
            {
                continue;
            }
            let document: T = serde_json::from_value(value.clone())?;
            if filter.matches(&document) {
                found.push(document);
            }
        }
        debug!(collection = self.name, ?filter, count = found.len(), "find");
        Ok(found)
    }

    async fn insert_one(&self, document: T) -> StorageResult<()> {
        let id = document.id();
        let value = serde_json::to_value(&document)?;

        let mut collections = self.store.collections.write().await;
        let raw = collections.entry(self.name).or_default();
        if raw.iter().any(|(existing, _)| *existing == id) {
            return Err(StorageError::Duplicate(id));
        }
        raw.push((id, value));
        debug!(collection = self.name, %id, "insert_one");
        Ok(())
    }

    async fn replace_one(&self, id: EntityId, document: T) -> StorageResult<ReplaceOutcome> {
        let value = serde_json::to_value(&document)?;

        let mut collections = self.store.collections.write().await;
        let slot = collections
            .get_mut(self.name)
            .and_then(|raw| raw.iter_mut().find(|(existing, _)| *existing == id));

        let matched = match slot {
            Some(entry) => {
                *entry = (document.id(), value);
                1
            }
            None => 0,
        };
        debug!(collection = self.name, %id, matched, "replace_one");
        Ok(ReplaceOutcome { matched })
    }
}

pub struct InMemoryBlogContext {
    articles: Arc<JsonCollection<Article>>,
    categories: Arc<JsonCollection<Category>>,
}

impl BlogContext for InMemoryBlogContext {
    fn articles(&self) -> Arc<dyn Collection<Article>> {
        self.articles.clone()
    }

    fn categories(&self) -> Arc<dyn Collection<Category>> {
        self.categories.clone()
    }
}

#[derive(Clone)]
pub struct InMemoryBlogContextFactory {
    store: Arc<InMemoryDocumentStore>,
}

impl InMemoryBlogContextFactory {
    pub const fn new(store: Arc<InMemoryDocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<InMemoryDocumentStore> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl BlogContextFactory for InMemoryBlogContextFactory {
    async fn create_context(&self) -> StorageResult<Arc<dyn BlogContext>> {
        if !self.store.is_online() {
            return Err(StorageError::Unavailable(format!(
                "database '{}' is offline",
                self.store.database()
            )));
        }
        Ok(Arc::new(InMemoryBlogContext {
            articles: Arc::new(JsonCollection::open(Arc::clone(&self.store))?),
            categories: Arc::new(JsonCollection::open(Arc::clone(&self.store))?),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Entity;
    use crate::domain::snapshot::CategoryDto;
    use crate::fakes;
    use chrono::{TimeZone, Utc};

    fn factory() -> InMemoryBlogContextFactory {
        InMemoryBlogContextFactory::new(Arc::new(InMemoryDocumentStore::new("articlesDb")))
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let factory = factory();
        let context = factory.create_context().await.unwrap();
        let article = fakes::articles::new_article(false);

        context.articles().insert_one(article.clone()).await.unwrap();

        let found = context.articles().find_one(article.id()).await.unwrap();
        assert_eq!(found, Some(article));
        assert_eq!(factory.store().document_count("articles").await, 1);
    }

    #[tokio::test]
    async fn stored_snapshots_keep_full_timestamp_precision() {
        let context = factory().create_context().await.unwrap();
        let created = Utc.timestamp_opt(1_735_718_405, 609_381_757).unwrap();
        let category = CategoryDto {
            id: EntityId::new(),
            category_name: "Blazor Server".into(),
            created_on: created,
            modified_on: Some(created + chrono::Duration::nanoseconds(1)),
            is_archived: false,
        };
        let mut article = fakes::articles::new_article(false);
        article.category = Some(category.clone());

        context.articles().insert_one(article.clone()).await.unwrap();

        let stored = context.articles().find_one(article.id()).await.unwrap().unwrap();
        assert_eq!(stored.category, Some(category));
        assert_eq!(stored, article);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let context = factory().create_context().await.unwrap();
        let category = fakes::categories::new_category(false);

        context.categories().insert_one(category.clone()).await.unwrap();
        let err = context.categories().insert_one(category).await.unwrap_err();
        assert!(matches!(err, StorageError::Duplicate(_)));
    }

    #[tokio::test]
    async fn replace_reports_match_count() {
        let context = factory().create_context().await.unwrap();
        let mut category = fakes::categories::new_category(false);
        context.categories().insert_one(category.clone()).await.unwrap();

        category
            .update("Web Development", true, Utc::now())
            .unwrap();
        let outcome = context
            .categories()
            .replace_one(category.id(), category.clone())
            .await
            .unwrap();
        assert!(outcome.matched_any());

        let missing = fakes::categories::new_category(false);
        let outcome = context
            .categories()
            .replace_one(missing.id(), missing)
            .await
            .unwrap();
        assert_eq!(outcome.matched, 0);

        let stored = context.categories().find_one(category.id()).await.unwrap();
        assert_eq!(stored, Some(category));
    }

    #[tokio::test]
    async fn not_archived_filter_skips_archived_documents() {
        let context = factory().create_context().await.unwrap();
        let mut archived = fakes::categories::new_category(false);
        archived.is_archived = true;
        let mut live = fakes::categories::new_category(false);
        live.is_archived = false;
        context.categories().insert_one(archived).await.unwrap();
        context.categories().insert_one(live.clone()).await.unwrap();

        let all = context.categories().find(&Filter::All).await.unwrap();
        let visible = context.categories().find(&Filter::NotArchived).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(visible, vec![live]);
    }

    #[tokio::test]
    async fn collections_are_separate() {
        let context = factory().create_context().await.unwrap();
        context
            .articles()
            .insert_one(fakes::articles::new_article(false))
            .await
            .unwrap();
        assert!(context.categories().find(&Filter::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn offline_store_refuses_contexts() {
        let factory = factory();
        factory.store().set_online(false);
        let err = factory.create_context().await.err().unwrap();
        assert!(err.to_string().contains("articlesDb"));

        factory.store().set_online(true);
        assert!(factory.create_context().await.is_ok());
    }
}
