// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of mutation and creation timestamps for the handlers.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
