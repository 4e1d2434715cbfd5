use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::ride::application::domain::entities::Ride;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RideSearchCriteria {
    /// Case-insensitive substring of the origin.
    pub from: Option<String>,
    /// Case-insensitive substring of the destination.
    pub to: Option<String>,
    pub departure_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RideQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RideQuery: Send + Sync {
    async fn find_by_id(&self, ride_id: Uuid) -> Result<Option<Ride>, RideQueryError>;

    /// Active rides only, earliest departure first.
    async fn search(&self, criteria: &RideSearchCriteria) -> Result<Vec<Ride>, RideQueryError>;
}
