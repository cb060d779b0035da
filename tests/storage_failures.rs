use std::sync::Arc;

use blog_core::application::commands::articles::SetPublishStateCommand;
use blog_core::application::error::ApplicationError;
use blog_core::application::queries::{
    articles::ListArticlesQuery, categories::ListCategoriesQuery,
};
use blog_core::domain::entity::EntityId;

mod support;

use support::{ArticleDtoBuilder, FailingCollectionsFactory, UnavailableFactory, category_dto};

fn assert_storage(err: &ApplicationError, context: &str, cause: &str) {
    match err {
        ApplicationError::Storage(message) => {
            assert!(message.starts_with(context), "{message}");
            assert!(message.contains(cause), "{message}");
        }
        other => panic!("expected storage failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unavailable_store_surfaces_in_every_handler() {
    support::init_tracing();
    let services = support::services_over(Arc::new(UnavailableFactory));

    let err = services
        .article_commands
        .create_article(Some(ArticleDtoBuilder::new().build()))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to create article", "connection refused");

    let err = services
        .article_commands
        .edit_article(Some(ArticleDtoBuilder::new().id(EntityId::new()).build()))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to update article", "connection refused");

    let err = services
        .article_commands
        .set_article_publish_state(SetPublishStateCommand {
            id: EntityId::new(),
            publish: true,
        })
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to update article", "connection refused");

    let err = services
        .article_queries
        .get_article(EntityId::new())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to find the article", "connection refused");

    let err = services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to retrieve articles", "connection refused");

    let err = services
        .category_commands
        .create_category(Some(category_dto("Web Development")))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to create category", "connection refused");

    let err = services
        .category_commands
        .edit_category(Some(category_dto("Blazor Server")))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to update category", "connection refused");

    let err = services
        .category_queries
        .get_category(EntityId::new())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to find the category", "connection refused");

    let err = services
        .category_queries
        .list_categories(ListCategoriesQuery::default())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to retrieve categories", "connection refused");
}

#[tokio::test]
async fn collection_failures_keep_the_backend_message() {
    support::init_tracing();
    let services = support::services_over(Arc::new(FailingCollectionsFactory));

    let err = services
        .article_commands
        .create_article(Some(ArticleDtoBuilder::new().build()))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to create article", "disk write error");

    let err = services
        .article_commands
        .set_article_publish_state(SetPublishStateCommand {
            id: EntityId::new(),
            publish: false,
        })
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to update article", "disk read error");

    let err = services
        .category_commands
        .edit_category(Some(category_dto("Blazor Server")))
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to update category", "disk read error");

    let err = services
        .category_queries
        .get_category(EntityId::new())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to find the category", "disk read error");
}

#[tokio::test]
async fn offline_in_memory_store_reports_database_name() {
    let app = support::TestApp::new();
    app.store.set_online(false);

    let err = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap_err();
    assert_storage(&err, "Failed to retrieve articles", "articlesDb");
}
