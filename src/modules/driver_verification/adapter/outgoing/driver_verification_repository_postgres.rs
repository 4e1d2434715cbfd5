use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::driver_verification::application::domain::entities::{
    DriverVerification, VerificationDecision, VerificationStatus,
};
use crate::driver_verification::application::ports::outgoing::{
    DriverVerificationRepository, DriverVerificationRepositoryError, NewDriverVerification,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct DriverVerificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DriverVerificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DriverVerificationRepository for DriverVerificationRepositoryPostgres {
    async fn insert(
        &self,
        data: NewDriverVerification,
    ) -> Result<DriverVerification, DriverVerificationRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            license_number: Set(data.license_number),
            license_image_url: Set(data.license_image_url),
            vehicle_make: Set(data.vehicle_make),
            vehicle_model: Set(data.vehicle_model),
            vehicle_number: Set(data.vehicle_number),
            years_experience: Set(data.years_experience),
            status: Set(VerificationStatus::Pending.as_str().to_string()),
            rejection_reason: Set(None),
            verified_at: Set(None),
            verified_by: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(inserted.to_domain())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn find_open_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError> {
        let found = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::Status.is_in([
                VerificationStatus::Pending.as_str(),
                VerificationStatus::Verified.as_str(),
            ]))
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn list(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<DriverVerification>, DriverVerificationRepositoryError> {
        let mut query = Entity::find();

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        decision: &VerificationDecision,
        admin: UserId,
        decided_at: DateTime<Utc>,
    ) -> Result<Option<DriverVerification>, DriverVerificationRepositoryError> {
        let mut update = Entity::update_many()
            .col_expr(Column::Status, Expr::value(decision.target_status().as_str()));

        update = match decision {
            VerificationDecision::Verify => update
                .col_expr(Column::VerifiedAt, Expr::value(decided_at.fixed_offset()))
                .col_expr(Column::VerifiedBy, Expr::value(admin.value())),
            VerificationDecision::Reject(reason) => update.col_expr(
                Column::RejectionReason,
                Expr::value(reason.as_str().to_string()),
            ),
        };

        let updated = update
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(VerificationStatus::Pending.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.first().map(|m| m.to_domain()))
    }
}

fn map_insert_err(e: DbErr) -> DriverVerificationRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        DriverVerificationRepositoryError::AlreadyExists
    } else {
        DriverVerificationRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> DriverVerificationRepositoryError {
    DriverVerificationRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver_verification::adapter::outgoing::sea_orm_entity::Model;
    use crate::driver_verification::application::domain::entities::RejectionReason;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr, Statement, Value};

    fn logged_statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
        Arc::try_unwrap(db)
            .ok()
            .expect("repository still holds the connection")
            .into_transaction_log()
            .iter()
            .flat_map(|t| t.statements().to_vec())
            .collect()
    }

    fn model(id: Uuid, status: &str) -> Model {
        Model {
            id,
            user_id: Uuid::new_v4(),
            license_number: "DL-0420110149646".to_string(),
            license_image_url: Some("https://cdn.example.com/licence.jpg".to_string()),
            vehicle_make: None,
            vehicle_model: None,
            vehicle_number: None,
            years_experience: Some(2),
            status: status.to_string(),
            rejection_reason: None,
            verified_at: None,
            verified_by: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn new_data() -> NewDriverVerification {
        NewDriverVerification {
            user_id: UserId::from(Uuid::new_v4()),
            license_number: "DL-0420110149646".to_string(),
            license_image_url: None,
            vehicle_make: None,
            vehicle_model: None,
            vehicle_number: None,
            years_experience: None,
        }
    }

    #[tokio::test]
    async fn test_insert_returns_pending_record() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(id, "pending")]])
            .into_connection();

        let repo = DriverVerificationRepositoryPostgres::new(Arc::new(db));

        let created = repo.insert(new_data()).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.status, VerificationStatus::Pending);
    }

    #[tokio::test]
    async fn test_insert_duplicate_open_record() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_driver_verifications_user_open\""
                    .to_string(),
            )])
            .into_connection();

        let repo = DriverVerificationRepositoryPostgres::new(Arc::new(db));

        let result = repo.insert(new_data()).await;

        assert_eq!(
            result.unwrap_err(),
            DriverVerificationRepositoryError::AlreadyExists
        );
    }

    #[tokio::test]
    async fn test_list_newest_first_from_store() {
        let newer = Uuid::new_v4();
        let older = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(newer, "rejected"), model(older, "pending")]])
            .into_connection();

        let repo = DriverVerificationRepositoryPostgres::new(Arc::new(db));

        let rows = repo.list(None).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, newer);
        assert_eq!(rows[0].status, VerificationStatus::Rejected);
    }

    #[tokio::test]
    async fn test_apply_decision_returns_updated_row() {
        let id = Uuid::new_v4();
        let admin = Uuid::new_v4();
        let mut row = model(id, "verified");
        row.verified_by = Some(admin);
        row.verified_at = Some(Utc::now().fixed_offset());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let db = Arc::new(db);
        let repo = DriverVerificationRepositoryPostgres::new(Arc::clone(&db));

        let updated = repo
            .apply_decision(
                id,
                &VerificationDecision::Verify,
                UserId::from(admin),
                Utc::now(),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, VerificationStatus::Verified);
        assert_eq!(updated.verified_by, Some(UserId::from(admin)));

        drop(repo);
        let statements = logged_statements(db);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.starts_with(r#"UPDATE "driver_verifications" SET"#), "{sql}");
        assert!(
            sql.contains(r#""driver_verifications"."status" = "#),
            "update must be conditional on the current status: {sql}"
        );
        assert!(sql.contains("RETURNING"), "{sql}");

        let values = statements[0]
            .values
            .as_ref()
            .map(|v| v.0.clone())
            .unwrap_or_default();
        assert_eq!(values.first(), Some(&Value::from("verified")));
        assert_eq!(values.last(), Some(&Value::from("pending")));
        assert!(values.contains(&Value::Uuid(Some(Box::new(id)))));
    }

    #[tokio::test]
    async fn test_apply_decision_on_decided_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = DriverVerificationRepositoryPostgres::new(Arc::new(db));
        let reason = RejectionReason::new("expired").unwrap();

        let updated = repo
            .apply_decision(
                Uuid::new_v4(),
                &VerificationDecision::Reject(reason),
                UserId::from(Uuid::new_v4()),
                Utc::now(),
            )
            .await
            .unwrap();

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("down".into()))])
            .into_connection();

        let repo = DriverVerificationRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.find_by_id(Uuid::new_v4()).await,
            Err(DriverVerificationRepositoryError::DatabaseError(_))
        ));
    }
}
