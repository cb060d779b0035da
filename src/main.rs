use std::sync::Arc;

use anyhow::{Context, Result};
use blog_core::application::{
    ports::{storage::BlogContextFactory, time::Clock, util::SlugGenerator},
    queries::{articles::ListArticlesQuery, categories::ListCategoriesQuery},
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::fakes;
use blog_core::infrastructure::{
    document_store::{InMemoryBlogContextFactory, InMemoryDocumentStore},
    time::{FixedClock, SystemClock},
    util::DefaultSlugGenerator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryDocumentStore::new(config.database_name()));
    let contexts: Arc<dyn BlogContextFactory> = Arc::new(InMemoryBlogContextFactory::new(store));
    let clock: Arc<dyn Clock> = if config.sample_use_seed() {
        Arc::new(FixedClock(fakes::static_date()))
    } else {
        Arc::new(SystemClock)
    };
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(contexts, clock, slugger);

    if config.seed_sample_data() {
        seed_sample_data(&services, &config).await?;
    }

    print_listings(&services).await
}

async fn seed_sample_data(services: &ApplicationServices, config: &AppConfig) -> Result<()> {
    let use_seed = config.sample_use_seed();

    for category in fakes::categories::category_dtos_many(config.sample_categories(), use_seed) {
        services
            .category_commands
            .create_category(Some(category))
            .await
            .context("seeding categories")?;
    }

    for article in fakes::articles::article_dtos_many(config.sample_articles(), use_seed) {
        services
            .article_commands
            .create_article(Some(article))
            .await
            .context("seeding articles")?;
    }

    tracing::info!(
        database = config.database_name(),
        articles = config.sample_articles(),
        categories = config.sample_categories(),
        seeded = use_seed,
        "sample data loaded"
    );
    Ok(())
}

async fn print_listings(services: &ApplicationServices) -> Result<()> {
    let query = ListArticlesQuery {
        exclude_archived: true,
    };
    match services.article_queries.list_articles(query).await {
        Ok(articles) => println!("{}", serde_json::to_string_pretty(&articles)?),
        Err(err) if err.is_not_found() => tracing::info!("{err}"),
        Err(err) => return Err(err.into()),
    }

    let query = ListCategoriesQuery {
        exclude_archived: false,
    };
    match services.category_queries.list_categories(query).await {
        Ok(categories) => println!("{}", serde_json::to_string_pretty(&categories)?),
        Err(err) if err.is_not_found() => tracing::info!("{err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
