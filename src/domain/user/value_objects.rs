// src/domain/user/value_objects.rs
use crate::domain::errors::DomainError;
use crate::domain::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Role {
    Admin,
    Author,
    #[default]
    User,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Author, Self::User];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Author => "Author",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Author" => Ok(Self::Author),
            "User" => Ok(Self::User),
            other => Err(DomainError::Validation(ValidationErrors::single(
                "Roles",
                format!("unknown role '{other}'"),
            ))),
        }
    }
}
