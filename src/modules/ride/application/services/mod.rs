mod create_ride_service;
mod quote_fare_service;
mod search_rides_service;

pub use create_ride_service::CreateRideService;
pub use quote_fare_service::QuoteFareService;
pub use search_rides_service::SearchRidesService;
