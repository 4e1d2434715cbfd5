use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::auth::application::domain::entities::UserId;
use crate::ride::application::domain::entities::{Ride, RidePreferences, VehicleDetails};

/// A validated ride ready to be stored as `active`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub driver_id: UserId,
    pub from_location: String,
    pub to_location: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub available_seats: i32,
    pub price_per_seat: f64,
    pub vehicle: VehicleDetails,
    pub notes: Option<String>,
    pub preferences: RidePreferences,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RideRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RideRepository: Send + Sync {
    async fn insert(&self, ride: NewRide) -> Result<Ride, RideRepositoryError>;
}
