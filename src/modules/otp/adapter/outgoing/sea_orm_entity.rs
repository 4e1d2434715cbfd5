use sea_orm::entity::prelude::*;

use crate::otp::application::domain::entities::EmailVerification;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_verifications")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub email: String,

    pub otp: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub expires_at: DateTimeWithTimeZone,

    pub verified: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> EmailVerification {
        EmailVerification {
            id: self.id,
            email: self.email.clone(),
            otp: self.otp.clone(),
            expires_at: self.expires_at.into(),
            verified: self.verified,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
