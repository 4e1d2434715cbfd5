use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::ride::application::domain::entities::{Ride, RideStatus};
use crate::ride::application::ports::outgoing::{NewRide, RideRepository, RideRepositoryError};

use super::sea_orm_entity::ActiveModel;

#[derive(Debug, Clone)]
pub struct RideRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RideRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RideRepository for RideRepositoryPostgres {
    async fn insert(&self, ride: NewRide) -> Result<Ride, RideRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            driver_id: Set(ride.driver_id.value()),
            from_location: Set(ride.from_location),
            to_location: Set(ride.to_location),
            departure_date: Set(ride.departure_date),
            departure_time: Set(ride.departure_time),
            available_seats: Set(ride.available_seats),
            price_per_seat: Set(ride.price_per_seat),
            vehicle_make: Set(ride.vehicle.vehicle_make),
            vehicle_model: Set(ride.vehicle.vehicle_model),
            vehicle_number: Set(ride.vehicle.vehicle_number),
            notes: Set(ride.notes),
            no_smoking: Set(ride.preferences.no_smoking),
            music_ok: Set(ride.preferences.music_ok),
            ac: Set(ride.preferences.ac),
            pets_ok: Set(ride.preferences.pets_ok),
            luggage: Set(ride.preferences.luggage),
            status: Set(RideStatus::Active.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(|e| RideRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}
