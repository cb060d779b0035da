// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod storage;
pub mod time;
pub mod util;

pub use storage::{CountingContextFactory, FailingCollectionsFactory, UnavailableFactory};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};
