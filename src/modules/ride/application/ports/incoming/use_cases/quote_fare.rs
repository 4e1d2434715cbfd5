use async_trait::async_trait;
use uuid::Uuid;

use crate::ride::application::domain::fare::FareBreakdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteFareCommand {
    ride_id: Uuid,
    seats: i32,
}

impl QuoteFareCommand {
    pub fn new(ride_id: Uuid, seats: i32) -> Self {
        Self { ride_id, seats }
    }

    pub fn ride_id(&self) -> Uuid {
        self.ride_id
    }

    pub fn seats(&self) -> i32 {
        self.seats
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum QuoteFareError {
    #[error("Ride not found")]
    RideNotFound,

    #[error("Ride is no longer open for booking")]
    RideNotBookable,

    #[error("At least one seat must be booked")]
    InvalidSeats,

    #[error("Only {available} seat(s) available")]
    SeatsUnavailable { requested: i32, available: i32 },

    #[error("Ride price is invalid")]
    InvalidPrice,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait QuoteFareUseCase: Send + Sync {
    async fn execute(&self, command: QuoteFareCommand) -> Result<FareBreakdown, QuoteFareError>;
}
