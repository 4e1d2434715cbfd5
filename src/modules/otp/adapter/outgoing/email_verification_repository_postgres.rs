use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::otp::application::domain::entities::EmailVerification;
use crate::otp::application::ports::outgoing::{
    EmailVerificationRepository, EmailVerificationRepositoryError, NewEmailVerification,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct EmailVerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EmailVerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmailVerificationRepository for EmailVerificationRepositoryPostgres {
    async fn prune_stale(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, EmailVerificationRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Email.eq(email))
            .filter(
                Condition::any()
                    .add(Column::ExpiresAt.lte(now.fixed_offset()))
                    .add(Column::Verified.eq(true)),
            )
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn insert(
        &self,
        data: NewEmailVerification,
    ) -> Result<EmailVerification, EmailVerificationRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            otp: Set(data.otp),
            expires_at: Set(data.expires_at.fixed_offset()),
            verified: Set(false),
            created_at: Set(data.created_at.fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find_latest_unverified(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<Option<EmailVerification>, EmailVerificationRepositoryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Otp.eq(otp))
            .filter(Column::Verified.eq(false))
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, EmailVerificationRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Verified, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::Verified.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }
}

fn map_db_err(e: DbErr) -> EmailVerificationRepositoryError {
    EmailVerificationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
