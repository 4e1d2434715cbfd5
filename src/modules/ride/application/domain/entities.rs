use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MIN_SEATS: i32 = 1;
pub const MAX_SEATS: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Active,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Active => "active",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(RideStatus::Active),
            "completed" => Some(RideStatus::Completed),
            "cancelled" => Some(RideStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RidePreferences {
    pub no_smoking: bool,
    pub music_ok: bool,
    pub ac: bool,
    pub pets_ok: bool,
    pub luggage: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VehicleDetails {
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
}

/// A published ride offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ride {
    pub id: Uuid,
    pub driver_id: UserId,
    pub from_location: String,
    pub to_location: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub available_seats: i32,
    pub price_per_seat: f64,
    #[serde(flatten)]
    pub vehicle: VehicleDetails,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub preferences: RidePreferences,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    pub fn is_bookable(&self) -> bool {
        self.status == RideStatus::Active
    }
}
