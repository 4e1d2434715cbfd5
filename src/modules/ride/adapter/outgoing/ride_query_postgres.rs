use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::ride::application::domain::entities::{Ride, RideStatus};
use crate::ride::application::ports::outgoing::{RideQuery, RideQueryError, RideSearchCriteria};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct RideQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RideQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RideQuery for RideQueryPostgres {
    async fn find_by_id(&self, ride_id: Uuid) -> Result<Option<Ride>, RideQueryError> {
        let found = Entity::find_by_id(ride_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn search(&self, criteria: &RideSearchCriteria) -> Result<Vec<Ride>, RideQueryError> {
        let mut query = Entity::find().filter(Column::Status.eq(RideStatus::Active.as_str()));

        if let Some(from) = &criteria.from {
            query = query.filter(contains_ci(Column::FromLocation, from));
        }

        if let Some(to) = &criteria.to {
            query = query.filter(contains_ci(Column::ToLocation, to));
        }

        if let Some(date) = criteria.departure_date {
            query = query.filter(Column::DepartureDate.eq(date));
        }

        let rides = query
            .order_by_asc(Column::DepartureDate)
            .order_by_asc(Column::DepartureTime)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rides.iter().map(|m| m.to_domain()).collect())
    }
}

/// `lower(col) LIKE '%needle%'` with LIKE wildcards in the needle escaped.
fn contains_ci(column: Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_db_err(e: DbErr) -> RideQueryError {
    RideQueryError::DatabaseError(e.to_string())
}
