pub mod create_ride;
pub mod quote_fare;
pub mod search_rides;

pub use create_ride::{create_ride_handler, CreateRideRequest, CreateRideResponse};
pub use quote_fare::{quote_fare_handler, FareQuoteResponse, QuoteFareRequest};
pub use search_rides::{search_rides_handler, SearchRidesParams};
