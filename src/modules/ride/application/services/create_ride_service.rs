use async_trait::async_trait;

use crate::ride::application::domain::entities::Ride;
use crate::ride::application::ports::incoming::use_cases::{
    CreateRideCommand, CreateRideError, CreateRideUseCase,
};
use crate::ride::application::ports::outgoing::RideRepository;

pub struct CreateRideService<R>
where
    R: RideRepository,
{
    repository: R,
}

impl<R> CreateRideService<R>
where
    R: RideRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRideUseCase for CreateRideService<R>
where
    R: RideRepository + Send + Sync,
{
    async fn execute(&self, command: CreateRideCommand) -> Result<Ride, CreateRideError> {
        let driver_id = command.driver_id();

        let ride = self
            .repository
            .insert(command.into_new_ride())
            .await
            .map_err(|e| {
                tracing::error!(driver_id = %driver_id, error = %e, "Failed to insert ride");
                CreateRideError::RepositoryError(e.to_string())
            })?;

        tracing::info!(ride_id = %ride.id, driver_id = %driver_id, "Ride created");

        Ok(ride)
    }
}
