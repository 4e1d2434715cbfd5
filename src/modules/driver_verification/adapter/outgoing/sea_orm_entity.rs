use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::{
    DriverVerification, VerificationStatus,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "driver_verifications")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    pub license_number: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub license_image_url: Option<String>,

    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,

    pub years_experience: Option<i32>,

    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub rejection_reason: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub verified_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub verified_by: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> DriverVerification {
        // Unknown names are treated as final so they cannot be reviewed.
        let status = VerificationStatus::parse(&self.status).unwrap_or_else(|| {
            tracing::warn!(verification_id = %self.id, status = %self.status, "Unknown verification status");
            VerificationStatus::Rejected
        });

        DriverVerification {
            id: self.id,
            user_id: UserId::from(self.user_id),
            license_number: self.license_number.clone(),
            license_image_url: self.license_image_url.clone(),
            vehicle_make: self.vehicle_make.clone(),
            vehicle_model: self.vehicle_model.clone(),
            vehicle_number: self.vehicle_number.clone(),
            years_experience: self.years_experience,
            status,
            rejection_reason: self.rejection_reason.clone(),
            verified_at: self.verified_at.map(Into::into),
            verified_by: self.verified_by.map(UserId::from),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
