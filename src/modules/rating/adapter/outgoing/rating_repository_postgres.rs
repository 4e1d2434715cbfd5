use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::rating::application::domain::entities::Rating;
use crate::rating::application::ports::outgoing::{
    NewRating, RatingRepository, RatingRepositoryError,
};

use super::sea_orm_entity::ActiveModel;

#[derive(Debug, Clone)]
pub struct RatingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    async fn insert(&self, data: NewRating) -> Result<Rating, RatingRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            ride_id: Set(data.ride_id),
            from_user_id: Set(data.from_user_id.value()),
            to_user_id: Set(data.to_user_id.value()),
            rating: Set(data.rating.value()),
            review: Set(data.review),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        inserted.to_domain().ok_or_else(|| {
            RatingRepositoryError::DatabaseError(format!(
                "stored rating {} has out-of-range score {}",
                inserted.id, inserted.rating
            ))
        })
    }
}

fn map_insert_err(e: DbErr) -> RatingRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        RatingRepositoryError::Duplicate
    } else {
        RatingRepositoryError::DatabaseError(e.to_string())
    }
}
