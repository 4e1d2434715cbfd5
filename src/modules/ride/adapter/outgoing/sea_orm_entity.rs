use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::ride::application::domain::entities::{
    Ride, RidePreferences, RideStatus, VehicleDetails,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rides")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub driver_id: Uuid,

    pub from_location: String,
    pub to_location: String,

    pub departure_date: Date,
    pub departure_time: Time,

    pub available_seats: i32,

    #[sea_orm(column_type = "Double")]
    pub price_per_seat: f64,

    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub no_smoking: bool,
    pub music_ok: bool,
    pub ac: bool,
    pub pets_ok: bool,
    pub luggage: bool,

    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Ride {
        let status = RideStatus::parse(&self.status).unwrap_or_else(|| {
            tracing::warn!(ride_id = %self.id, status = %self.status, "Unknown ride status");
            RideStatus::Cancelled
        });

        Ride {
            id: self.id,
            driver_id: UserId::from(self.driver_id),
            from_location: self.from_location.clone(),
            to_location: self.to_location.clone(),
            departure_date: self.departure_date,
            departure_time: self.departure_time,
            available_seats: self.available_seats,
            price_per_seat: self.price_per_seat,
            vehicle: VehicleDetails {
                vehicle_make: self.vehicle_make.clone(),
                vehicle_model: self.vehicle_model.clone(),
                vehicle_number: self.vehicle_number.clone(),
            },
            notes: self.notes.clone(),
            preferences: RidePreferences {
                no_smoking: self.no_smoking,
                music_ok: self.music_ok,
                ac: self.ac,
                pets_ok: self.pets_ok,
                luggage: self.luggage,
            },
            status,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
