use std::sync::Arc;

use crate::auth::application::domain::entities::{AppRole, UserId};
use crate::auth::application::ports::outgoing::{RoleQuery, RoleQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminAccessError {
    #[error("Access denied")]
    Denied,

    #[error("Role lookup failed: {0}")]
    RoleLookupFailed(String),
}

/// Gate for admin-only operations, consulted before any protected data is read.
#[derive(Clone)]
pub struct AdminGuard {
    roles: Arc<dyn RoleQuery + Send + Sync>,
}

impl AdminGuard {
    pub fn new(roles: Arc<dyn RoleQuery + Send + Sync>) -> Self {
        Self { roles }
    }

    pub async fn ensure_admin(&self, user: UserId) -> Result<(), AdminAccessError> {
        match self.roles.has_role(user, AppRole::Admin).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(user_id = %user, "Non-admin caller attempted an admin operation");
                Err(AdminAccessError::Denied)
            }
            Err(RoleQueryError::DatabaseError(msg)) => {
                Err(AdminAccessError::RoleLookupFailed(msg))
            }
        }
    }
}
