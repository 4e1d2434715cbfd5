use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::{AppRole, UserId};
use crate::auth::application::ports::outgoing::{RoleQuery, RoleQueryError};

use super::sea_orm_entity::user_roles::{Column, Entity};

#[derive(Debug, Clone)]
pub struct RoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleQuery for RoleQueryPostgres {
    async fn has_role(&self, user: UserId, role: AppRole) -> Result<bool, RoleQueryError> {
        let found = Entity::find()
            .filter(Column::UserId.eq(user.value()))
            .filter(Column::Role.eq(role.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}
