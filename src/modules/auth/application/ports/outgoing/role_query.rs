use async_trait::async_trait;

use crate::auth::application::domain::entities::{AppRole, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RoleQuery: Send + Sync {
    async fn has_role(&self, user: UserId, role: AppRole) -> Result<bool, RoleQueryError>;
}
