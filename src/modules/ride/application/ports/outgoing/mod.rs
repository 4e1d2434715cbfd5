mod ride_query;
mod ride_repository;

pub use ride_query::{RideQuery, RideQueryError, RideSearchCriteria};
pub use ride_repository::{NewRide, RideRepository, RideRepositoryError};
