// src/domain/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::validation::ValidationErrors;

/// Opaque document identifier. The nil value doubles as "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn empty() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|err| {
            DomainError::Validation(ValidationErrors::single(
                "Id",
                format!("invalid id '{s}': {err}"),
            ))
        })
    }
}

/// Identity and audit timestamps carried by every persisted aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    id: EntityId,
    created_on: DateTime<Utc>,
    modified_on: Option<DateTime<Utc>>,
}

impl EntityMeta {
    pub(crate) fn new(created_on: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::new(),
            created_on,
            modified_on: None,
        }
    }

    pub(crate) const fn restore(
        id: EntityId,
        created_on: DateTime<Utc>,
        modified_on: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            created_on,
            modified_on,
        }
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.modified_on = Some(now);
    }

    pub const fn id(&self) -> EntityId {
        self.id
    }

    pub const fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    pub const fn modified_on(&self) -> Option<DateTime<Utc>> {
        self.modified_on
    }
}

pub trait Entity {
    fn meta(&self) -> &EntityMeta;

    fn id(&self) -> EntityId {
        self.meta().id()
    }

    fn created_on(&self) -> DateTime<Utc> {
        self.meta().created_on()
    }

    fn modified_on(&self) -> Option<DateTime<Utc>> {
        self.meta().modified_on()
    }
}

/// Anything stored in a document collection.
pub trait Document: Entity + Clone + Send + Sync + 'static {
    fn is_archived(&self) -> bool;
}
