mod create_ride;
mod quote_fare;
mod search_rides;

pub use create_ride::{
    CreateRideCommand, CreateRideCommandError, CreateRideError, CreateRideInput,
    CreateRideUseCase,
};
pub use quote_fare::{QuoteFareCommand, QuoteFareError, QuoteFareUseCase};
pub use search_rides::{SearchRidesError, SearchRidesQuery, SearchRidesQueryError, SearchRidesUseCase};
