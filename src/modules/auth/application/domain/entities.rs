use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a caller as asserted by the external auth platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Roles granted in the `user_roles` table that this service checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRole {
    Admin,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
        }
    }
}
