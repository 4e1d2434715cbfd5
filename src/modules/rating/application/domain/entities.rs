use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Star score, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stars(i32);

impl Stars {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub id: Uuid,
    pub ride_id: Uuid,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
    pub rating: Stars,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}
