use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

use crate::auth::application::domain::entities::UserId;
use crate::ride::application::domain::entities::{
    Ride, RidePreferences, VehicleDetails, MAX_SEATS, MIN_SEATS,
};
use crate::ride::application::ports::outgoing::NewRide;

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

/// Fields as submitted by the offer-ride form. `seats` and `price` arrive
/// either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Default)]
pub struct CreateRideInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub seats: Option<Value>,
    pub price: Option<Value>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_number: Option<String>,
    pub notes: Option<String>,
    pub no_smoking: Option<bool>,
    pub music_ok: Option<bool>,
    pub ac: Option<bool>,
    pub pets_ok: Option<bool>,
    pub luggage: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Create Ride Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateRideCommand {
    ride: NewRide,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreateRideCommandError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Seats must be between 1 and 6")]
    InvalidSeats,

    #[error("Price must be a positive number")]
    InvalidPrice,

    #[error("Departure date or time is not valid")]
    InvalidDeparture,

    #[error("Departure time must be in the future")]
    PastDeparture,
}

impl CreateRideCommand {
    /// Checks run in a fixed order: presence, seats, price, then departure.
    pub fn new(
        driver: UserId,
        input: CreateRideInput,
        now: DateTime<Utc>,
    ) -> Result<Self, CreateRideCommandError> {
        let from = required_text(input.from);
        let to = required_text(input.to);
        let date = required_text(input.date);
        let time = required_text(input.time);
        let seats = input.seats.filter(is_present);
        let price = input.price.filter(is_present);

        let (Some(from), Some(to), Some(date), Some(time), Some(seats), Some(price)) =
            (from, to, date, time, seats, price)
        else {
            return Err(CreateRideCommandError::MissingFields);
        };

        let seats = parse_seats(&seats).ok_or(CreateRideCommandError::InvalidSeats)?;
        let price = parse_price(&price).ok_or(CreateRideCommandError::InvalidPrice)?;

        let departure_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| CreateRideCommandError::InvalidDeparture)?;
        let departure_time =
            parse_time(&time).ok_or(CreateRideCommandError::InvalidDeparture)?;

        if departure_date.and_time(departure_time).and_utc() <= now {
            return Err(CreateRideCommandError::PastDeparture);
        }

        Ok(Self {
            ride: NewRide {
                driver_id: driver,
                from_location: from,
                to_location: to,
                departure_date,
                departure_time,
                available_seats: seats,
                price_per_seat: price,
                vehicle: VehicleDetails {
                    vehicle_make: optional_text(input.vehicle_make),
                    vehicle_model: optional_text(input.vehicle_model),
                    vehicle_number: optional_text(input.vehicle_number),
                },
                notes: optional_text(input.notes),
                preferences: RidePreferences {
                    no_smoking: input.no_smoking.unwrap_or(false),
                    music_ok: input.music_ok.unwrap_or(false),
                    ac: input.ac.unwrap_or(false),
                    pets_ok: input.pets_ok.unwrap_or(false),
                    luggage: input.luggage.unwrap_or(false),
                },
            },
        })
    }

    pub fn driver_id(&self) -> UserId {
        self.ride.driver_id
    }

    pub fn ride(&self) -> &NewRide {
        &self.ride
    }

    pub fn into_new_ride(self) -> NewRide {
        self.ride
    }
}

fn required_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn optional_text(value: Option<String>) -> Option<String> {
    required_text(value)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn parse_seats(value: &Value) -> Option<i32> {
    let seats = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 {
                    return None;
                }
                f as i64
            }
        },
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    if (i64::from(MIN_SEATS)..=i64::from(MAX_SEATS)).contains(&seats) {
        i32::try_from(seats).ok()
    } else {
        None
    }
}

fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    (price.is_finite() && price >= 0.0).then_some(price)
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRideError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateRideUseCase: Send + Sync {
    async fn execute(&self, command: CreateRideCommand) -> Result<Ride, CreateRideError>;
}
