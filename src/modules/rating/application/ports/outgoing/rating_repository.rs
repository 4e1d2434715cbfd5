use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::domain::entities::{Rating, Stars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub ride_id: Uuid,
    pub from_user_id: UserId,
    pub to_user_id: UserId,
    pub rating: Stars,
    pub review: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RatingRepositoryError {
    #[error("Rating already exists for this ride and user")]
    Duplicate,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn insert(&self, data: NewRating) -> Result<Rating, RatingRepositoryError>;
}
