// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    database_name: String,
    seed_sample_data: bool,
    sample_articles: usize,
    sample_categories: usize,
    sample_use_seed: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_name() -> String {
    "articlesDb".into()
}

const DEFAULT_SAMPLE_ARTICLES: usize = 10;
const DEFAULT_SAMPLE_CATEGORIES: usize = 5;

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_count(
    key: &'static str,
    value: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.trim().parse::<usize>().map_err(|err| {
            ConfigError::Invalid(format!("{key} must be a non-negative integer: {err}"))
        })
    })
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_name = lookup("ARTICLES_DB").unwrap_or_else(default_database_name);
        if database_name.trim().is_empty() {
            return Err(ConfigError::Missing("ARTICLES_DB"));
        }

        let seed_sample_data = lookup("SEED_SAMPLE_DATA").is_none_or(|v| parse_flag(&v));
        let sample_use_seed = lookup("SAMPLE_USE_SEED").is_some_and(|v| parse_flag(&v));
        let sample_articles = parse_count(
            "SAMPLE_ARTICLES",
            lookup("SAMPLE_ARTICLES"),
            DEFAULT_SAMPLE_ARTICLES,
        )?;
        let sample_categories = parse_count(
            "SAMPLE_CATEGORIES",
            lookup("SAMPLE_CATEGORIES"),
            DEFAULT_SAMPLE_CATEGORIES,
        )?;

        Ok(Self {
            database_name,
            seed_sample_data,
            sample_articles,
            sample_categories,
            sample_use_seed,
        })
    }

    /// Logical name of the document database holding the blog collections.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub const fn seed_sample_data(&self) -> bool {
        self.seed_sample_data
    }

    pub const fn sample_articles(&self) -> usize {
        self.sample_articles
    }

    pub const fn sample_categories(&self) -> usize {
        self.sample_categories
    }

    pub const fn sample_use_seed(&self) -> bool {
        self.sample_use_seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&'static str, String> = pairs
            .iter()
            .map(|(key, value)| (*key, (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_name(), "articlesDb");
        assert!(config.seed_sample_data());
        assert_eq!(config.sample_articles(), 10);
        assert_eq!(config.sample_categories(), 5);
        assert!(!config.sample_use_seed());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("ARTICLES_DB", "blog"),
            ("SEED_SAMPLE_DATA", "0"),
            ("SAMPLE_ARTICLES", "3"),
            ("SAMPLE_CATEGORIES", " 2 "),
            ("SAMPLE_USE_SEED", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.database_name(), "blog");
        assert!(!config.seed_sample_data());
        assert_eq!(config.sample_articles(), 3);
        assert_eq!(config.sample_categories(), 2);
        assert!(config.sample_use_seed());
    }

    #[test]
    fn rejects_bad_counts_and_blank_database() {
        assert!(matches!(
            config_from(&[("SAMPLE_ARTICLES", "many")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config_from(&[("ARTICLES_DB", "  ")]),
            Err(ConfigError::Missing("ARTICLES_DB"))
        ));
    }
}
