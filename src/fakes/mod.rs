// src/fakes/mod.rs
//! Fake aggregates and DTOs for tests and sample data.
//!
//! Every generator takes `use_seed`. Seeded calls replay the same values
//! (identifiers excepted, they are always fresh); unseeded calls draw from
//! fresh entropy.

pub mod articles;
pub mod categories;
pub mod rng;
pub mod text;
pub mod users;

pub use rng::{SEED, static_date};
pub use text::{blog_categories, slugify};
