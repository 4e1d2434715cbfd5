use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::domain::entities::{Rating, Stars};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub ride_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub from_user_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub to_user_id: Uuid,

    pub rating: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub review: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// `None` if the stored score violates the 1..=5 check.
    pub fn to_domain(&self) -> Option<Rating> {
        Some(Rating {
            id: self.id,
            ride_id: self.ride_id,
            from_user_id: UserId::from(self.from_user_id),
            to_user_id: UserId::from(self.to_user_id),
            rating: Stars::new(self.rating)?,
            review: self.review.clone(),
            created_at: self.created_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
